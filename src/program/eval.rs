use log::debug;

use crate::program::errors::ProgramError;
use crate::program::token::Token;
use crate::program::value::Value;

/// Interpret a postfix program against a digit sequence.
///
/// Digits are consumed from the least-significant end as `Push` tokens
/// manufacture leaves; the first-popped operand of every binary token is
/// the left operand, which is what keeps rendered output in the original
/// left-to-right digit order.
///
/// # Errors
///
/// A well-formed program cannot fail. Malformed programs are rejected
/// fast: popping an empty stack, pushing past the digit sequence, or
/// finishing with anything other than one value and zero unused digits.
pub fn evaluate(digits: &[u8], program: &[Token]) -> Result<Value, ProgramError> {
    let mut source = digits.to_vec();
    let mut stack: Vec<Value> = Vec::new();

    for (index, token) in program.iter().enumerate() {
        match token {
            Token::Push => {
                let digit = source
                    .pop()
                    .ok_or(ProgramError::DigitsExhausted { index })?;
                stack.push(Value::from_digit(digit));
            }
            Token::Op(op) => {
                let x = stack
                    .pop()
                    .ok_or(ProgramError::StackUnderflow { index })?;
                let y = stack
                    .pop()
                    .ok_or(ProgramError::StackUnderflow { index })?;
                stack.push(op.apply(&x, &y));
            }
        }
    }

    let result = stack.pop().ok_or(ProgramError::EmptyProgram)?;
    if !stack.is_empty() {
        debug!("Program left {} extra values on the stack", stack.len());
        return Err(ProgramError::Unreduced {
            remaining: stack.len() + 1,
        });
    }
    if !source.is_empty() {
        debug!("Program left {} digits unconsumed", source.len());
        return Err(ProgramError::UnusedDigits {
            remaining: source.len(),
        });
    }

    Ok(result)
}
