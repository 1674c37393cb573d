use log::{debug, warn};

use crate::digits::errors::DigitsError;

/// # Errors
///
/// Returns an error if the sequence is empty or contains a value above 9.
pub fn validate_digits(digits: &[u8]) -> Result<(), DigitsError> {
    if digits.is_empty() {
        warn!("Digit sequence is empty");
        return Err(DigitsError::Empty);
    }

    if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
        warn!("Digit sequence contains non-digit value: {}", bad);
        return Err(DigitsError::NotADigit(bad));
    }

    debug!("Validated {} digits", digits.len());
    Ok(())
}
