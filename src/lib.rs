//! Arithmogram - find arithmetic expressions hidden in the digits of a number
//!
//! This library enumerates arithmetic expressions built from the decimal
//! digits of a source integer, kept in their original left-to-right order,
//! that evaluate exactly to a target integer. Digits combine through
//! addition, subtraction, multiplication, division and decimal
//! concatenation; evaluation is exact rational arithmetic, so `1/3*3`
//! matches `1` and division by zero silently matches nothing.

pub mod digits;
pub mod program;
pub mod search;

// Re-export the main public API
pub use digits::{digits_of, validate_digits, DigitsError};
pub use program::{evaluate, to_infix, BinOp, ProgramError, Token, Value};
pub use search::{ExpressionSearch, Matches, SearchError};

/// Find the first expression over the digits that evaluates to the target
///
/// This is a convenience function that validates the digit sequence and
/// runs the search to its first match.
///
/// # Errors
///
/// Returns an error if the digit sequence is empty or contains values
/// that are not decimal digits.
///
/// # Examples
///
/// ```
/// use arithmogram::{search_first, to_infix};
///
/// let digits = [1, 2, 3];
/// match search_first(&digits, 6) {
///     Ok(Some(program)) => {
///         let rendered = to_infix(&digits, &program).expect("matches render");
///         println!("6 = {}", rendered);
///     }
///     Ok(None) => println!("No result found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search_first(digits: &[u8], target: i64) -> Result<Option<Vec<Token>>, SearchError> {
    let search = ExpressionSearch::new(digits, target)?;
    Ok(search.first())
}

/// Lazily enumerate every matching expression over the digits
///
/// A fresh call re-enumerates from scratch; the returned iterator is
/// single-pass and yields matches in a fixed deterministic order.
///
/// # Errors
///
/// Returns an error if the digit sequence is empty or contains values
/// that are not decimal digits.
pub fn search_all(digits: &[u8], target: i64) -> Result<Matches, SearchError> {
    let search = ExpressionSearch::new(digits, target)?;
    Ok(search.matches())
}
