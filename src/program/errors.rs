use thiserror::Error;

/// Errors raised when interpreting a malformed token sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("Token {index} pops an empty operand stack")]
    StackUnderflow { index: usize },
    #[error("Token {index} pushes past the end of the digit sequence")]
    DigitsExhausted { index: usize },
    #[error("Program finished with {remaining} values still on the stack")]
    Unreduced { remaining: usize },
    #[error("Program left {remaining} digits unconsumed")]
    UnusedDigits { remaining: usize },
    #[error("Program contains no tokens")]
    EmptyProgram,
}
