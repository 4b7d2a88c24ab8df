use std::error::Error;
use std::fmt;

/// Custom error type for splitter and classifier failures.
///
/// Every fallible operation in the crate detects its errors at the call
/// boundary and reports them synchronously; none of these are fatal to the
/// process.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Row/column count incompatibility between features, labels, or the
    /// trained weight length and a new prediction input.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A hyper-parameter or argument outside its valid domain.
    InvalidParameter(String),
    /// `predict` was invoked before any successful `fit`.
    NotTrained,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                what, expected, found
            ),
            ModelError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            ModelError::NotTrained => {
                write!(f, "classifier has no weights; call fit before predict")
            }
        }
    }
}

impl Error for ModelError {}

impl ModelError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        ModelError::InvalidParameter(msg.into())
    }
}
