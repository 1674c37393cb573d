use log::debug;

use crate::program::errors::ProgramError;
use crate::program::token::{Token, LEAF_PRECEDENCE};

/// Render a postfix program as a minimally parenthesized infix string.
///
/// Walks the program with a stack of `(text, precedence)` pairs mirroring
/// the evaluation shape. A left operand is parenthesized only when its
/// precedence is strictly lower than the operator's; a right operand also
/// keeps parentheses at equal precedence under subtraction and division,
/// which are not associative. Concatenated digits carry a precedence above
/// every arithmetic operator, so a fused multi-digit number is never
/// parenthesized.
///
/// # Errors
///
/// Rejects malformed programs with the same typed errors as evaluation.
pub fn to_infix(digits: &[u8], program: &[Token]) -> Result<String, ProgramError> {
    let mut source = digits.to_vec();
    let mut stack: Vec<(String, u8)> = Vec::new();

    for (index, token) in program.iter().enumerate() {
        match token {
            Token::Push => {
                let digit = source
                    .pop()
                    .ok_or(ProgramError::DigitsExhausted { index })?;
                stack.push((digit.to_string(), LEAF_PRECEDENCE));
            }
            Token::Op(op) => {
                let (left, left_prec) = stack
                    .pop()
                    .ok_or(ProgramError::StackUnderflow { index })?;
                let (right, right_prec) = stack
                    .pop()
                    .ok_or(ProgramError::StackUnderflow { index })?;

                let prec = op.precedence();
                let left = if left_prec < prec {
                    format!("({})", left)
                } else {
                    left
                };
                let right = if right_prec < prec
                    || (right_prec == prec && op.guards_right_operand())
                {
                    format!("({})", right)
                } else {
                    right
                };

                stack.push((format!("{}{}{}", left, op.symbol(), right), prec));
            }
        }
    }

    let (text, _) = stack.pop().ok_or(ProgramError::EmptyProgram)?;
    if !stack.is_empty() {
        return Err(ProgramError::Unreduced {
            remaining: stack.len() + 1,
        });
    }
    if !source.is_empty() {
        return Err(ProgramError::UnusedDigits {
            remaining: source.len(),
        });
    }

    debug!("Rendered program as '{}'", text);
    Ok(text)
}
