use num::{BigInt, BigRational, Zero};

use crate::program::token::BinOp;

/// Result of evaluating part of a program: an exact rational, or the
/// undefined sentinel produced by division by zero.
///
/// `Undefined` propagates through every operator and never matches a
/// target, so a branch that divides by zero is rejected at the final
/// comparison without special-casing anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Exact(BigRational),
    Undefined,
}

impl Value {
    pub fn from_digit(digit: u8) -> Self {
        Value::Exact(BigRational::from_integer(BigInt::from(digit)))
    }

    /// Exact comparison against a target. `Undefined` matches nothing.
    pub fn matches(&self, target: &BigRational) -> bool {
        match self {
            Value::Exact(value) => value == target,
            Value::Undefined => false,
        }
    }
}

impl BinOp {
    /// Combine two values, with `x` the left operand.
    pub fn apply(self, x: &Value, y: &Value) -> Value {
        let (Value::Exact(a), Value::Exact(b)) = (x, y) else {
            return Value::Undefined;
        };

        match self {
            BinOp::Add => Value::Exact(a + b),
            BinOp::Sub => Value::Exact(a - b),
            BinOp::Mul => Value::Exact(a * b),
            BinOp::Div => {
                if b.is_zero() {
                    Value::Undefined
                } else {
                    Value::Exact(a / b)
                }
            }
            BinOp::Concat => {
                Value::Exact(a * BigRational::from_integer(BigInt::from(10)) + b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(n: i64) -> Value {
        Value::Exact(BigRational::from_integer(BigInt::from(n)))
    }

    fn rational(numer: i64, denom: i64) -> Value {
        Value::Exact(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(BinOp::Add.apply(&exact(2), &exact(3)), exact(5));
        assert_eq!(BinOp::Sub.apply(&exact(2), &exact(3)), exact(-1));
        assert_eq!(BinOp::Mul.apply(&exact(2), &exact(3)), exact(6));
        assert_eq!(BinOp::Div.apply(&exact(1), &exact(3)), rational(1, 3));
    }

    #[test]
    fn test_concat_shifts_left_operand() {
        assert_eq!(BinOp::Concat.apply(&exact(1), &exact(2)), exact(12));
        assert_eq!(BinOp::Concat.apply(&exact(12), &exact(3)), exact(123));
        assert_eq!(BinOp::Concat.apply(&exact(1), &exact(0)), exact(10));
    }

    #[test]
    fn test_division_by_zero_is_undefined() {
        assert_eq!(BinOp::Div.apply(&exact(1), &exact(0)), Value::Undefined);
    }

    #[test]
    fn test_undefined_propagates_through_every_operator() {
        for op in [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div, BinOp::Concat] {
            assert_eq!(op.apply(&Value::Undefined, &exact(1)), Value::Undefined);
            assert_eq!(op.apply(&exact(1), &Value::Undefined), Value::Undefined);
        }
    }

    #[test]
    fn test_undefined_matches_no_target() {
        let zero = BigRational::from_integer(BigInt::from(0));
        assert!(!Value::Undefined.matches(&zero));
    }

    #[test]
    fn test_exact_match_is_exact() {
        let one = BigRational::from_integer(BigInt::from(1));
        let third = rational(1, 3);
        assert!(BinOp::Mul.apply(&third, &exact(3)).matches(&one));
        assert!(!rational(999_999, 1_000_000).matches(&one));
    }

    #[test]
    fn test_matches_negative_target() {
        let minus_four = BigRational::from_integer(BigInt::from(-4));
        assert!(exact(-4).matches(&minus_four));
    }
}
