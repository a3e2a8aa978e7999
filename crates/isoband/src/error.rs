//! Error types for contour extraction.

use thiserror::Error;

/// Result type alias using IsobandError.
pub type IsobandResult<T> = Result<T, IsobandError>;

/// Errors raised while validating extraction inputs.
///
/// None of these are transient; the same call fails the same way every time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IsobandError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid band [{lower}, {upper}): {message}")]
    InvalidBand {
        lower: f64,
        upper: f64,
        message: String,
    },

    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}

impl IsobandError {
    /// Stable short code for this error, suitable for logs and exit messages.
    pub fn kind(&self) -> &'static str {
        match self {
            IsobandError::InvalidGrid(_) => "InvalidGrid",
            IsobandError::InvalidBand { .. } => "InvalidBand",
            IsobandError::InvalidThresholds(_) => "InvalidThresholds",
        }
    }

    pub(crate) fn band(lower: f64, upper: f64, message: impl Into<String>) -> Self {
        IsobandError::InvalidBand {
            lower,
            upper,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IsobandError::InvalidGrid("row 2 has 3 samples, expected 4".to_string());
        assert_eq!(err.to_string(), "Invalid grid: row 2 has 3 samples, expected 4");

        let err = IsobandError::band(2.0, 1.0, "lower must be below upper");
        assert_eq!(err.to_string(), "Invalid band [2, 1): lower must be below upper");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(IsobandError::InvalidGrid(String::new()).kind(), "InvalidGrid");
        assert_eq!(IsobandError::band(0.0, 0.0, "").kind(), "InvalidBand");
        assert_eq!(
            IsobandError::InvalidThresholds(String::new()).kind(),
            "InvalidThresholds"
        );
    }
}
