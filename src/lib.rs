//! perceptron: a binary linear classifier trained by the perceptron rule.
//!
//! This crate provides the training/prediction engine (a weight vector with
//! an error-driven update rule and a thresholded decision function) together
//! with the train/test partitioning utility that feeds it, plus small
//! preprocessing and accuracy helpers used by the examples.
//!
//! The design favors small, testable modules operating on the crate's own
//! lightweight `math` containers, with randomness always injectable so tests
//! can seed it for reproducibility.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod math;
pub mod models;
pub mod preprocessing;
pub mod stats;
