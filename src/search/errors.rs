use thiserror::Error;

use crate::digits::DigitsError;

/// Errors that can occur when setting up a search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Digit error: {0}")]
    Digits(#[from] DigitsError),
}
