use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected exactly {expected} digits, got {actual}")]
    InvalidDigitCount { expected: usize, actual: usize },
    #[error("Digit must be between 1 and 9, got {0}")]
    DigitOutOfRange(u32),
    #[error("Digit string must contain only the digits 1-9: {0}")]
    InvalidDigitString(String),
    #[error("Invalid numeric token: '{0}'")]
    InvalidToken(String),
}
