use thiserror::Error;

/// Errors that can occur while validating a digit sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitsError {
    #[error("Digit sequence cannot be empty")]
    Empty,
    #[error("Value {0} is not a decimal digit")]
    NotADigit(u8),
}
