use crate::digits::{digits_of, validate_digits, DigitsError};

#[test]
fn test_digits_of_multi_digit_source() {
    assert_eq!(digits_of(114_514), vec![1, 1, 4, 5, 1, 4]);
    assert_eq!(digits_of(1_203), vec![1, 2, 0, 3]);
}

#[test]
fn test_digits_of_single_digit_source() {
    assert_eq!(digits_of(7), vec![7]);
}

#[test]
fn test_digits_of_zero() {
    assert_eq!(digits_of(0), vec![0]);
}

#[test]
fn test_validate_digits_accepts_valid_sequences() {
    assert!(validate_digits(&[0]).is_ok());
    assert!(validate_digits(&[1, 2, 3]).is_ok());
    assert!(validate_digits(&[9, 9, 9, 9]).is_ok());
}

#[test]
fn test_validate_digits_rejects_empty() {
    assert_eq!(validate_digits(&[]), Err(DigitsError::Empty));
}

#[test]
fn test_validate_digits_rejects_out_of_range_values() {
    assert_eq!(validate_digits(&[1, 10, 3]), Err(DigitsError::NotADigit(10)));
    assert_eq!(validate_digits(&[255]), Err(DigitsError::NotADigit(255)));
}

#[test]
fn test_extracted_digits_always_validate() {
    for source in [0, 7, 42, 114_514, u64::MAX] {
        assert!(validate_digits(&digits_of(source)).is_ok());
    }
}
