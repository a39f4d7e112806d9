//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// String doesn't parse into the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "day",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "day: must be an integer");
    }

    #[test]
    fn body_error_display() {
        let err = ValidationError::InvalidBody {
            reason: "missing field `completed`".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid request body: missing field `completed`"
        );
    }
}
