use log::{debug, info};
use num::{BigInt, BigRational};

use crate::digits::validate_digits;
use crate::program::{evaluate, BinOp, Token};
use crate::search::errors::SearchError;
use crate::search::state::{Frame, Move};

/// Exhaustive search for postfix programs over a digit sequence that
/// evaluate exactly to an integer target.
pub struct ExpressionSearch {
    digits: Vec<u8>,
    target: BigRational,
}

impl ExpressionSearch {
    /// # Errors
    ///
    /// Returns an error if the digit sequence is empty or contains a
    /// value that is not a decimal digit.
    pub fn new(digits: &[u8], target: i64) -> Result<Self, SearchError> {
        validate_digits(digits)?;
        Ok(Self {
            digits: digits.to_vec(),
            target: BigRational::from_integer(BigInt::from(target)),
        })
    }

    /// Lazily enumerate every matching program, in a fixed deterministic
    /// order. Each call restarts the enumeration from scratch; the
    /// returned iterator itself is single-pass.
    pub fn matches(&self) -> Matches {
        Matches::new(self.digits.clone(), self.target.clone())
    }

    /// First matching program in enumeration order, if any.
    pub fn first(&self) -> Option<Vec<Token>> {
        self.matches().next()
    }
}

/// Depth-first walk over every well-formed program shape, yielding the
/// programs that hit the target.
///
/// The walk keeps one shared token buffer and a stack of choice-point
/// frames; entering a frame appends that move's tokens, leaving it
/// removes them again, so the buffer always holds exactly the path from
/// the root to the current frame. Dropping the iterator mid-search drops
/// the buffer with it; nothing leaks outside.
pub struct Matches {
    digits: Vec<u8>,
    target: BigRational,
    program: Vec<Token>,
    frames: Vec<Frame>,
    program_len: usize,
}

impl Matches {
    pub(crate) fn new(digits: Vec<u8>, target: BigRational) -> Self {
        let program_len = 2 * digits.len() - 1;
        info!(
            "Enumerating programs of length {} over {} digits",
            program_len,
            digits.len()
        );
        Self {
            program: Vec::with_capacity(program_len),
            frames: vec![Frame::root()],
            digits,
            target,
            program_len,
        }
    }

    fn enter(&mut self, mv: Move, used: usize, reduced: usize) {
        match mv {
            Move::Push => {
                self.program.push(Token::Push);
                self.frames.push(Frame::entered(used + 1, reduced, 1));
            }
            Move::Binary(op) => {
                self.program.push(Token::Op(op));
                self.frames.push(Frame::entered(used, reduced + 1, 1));
            }
            Move::Concat(block) => {
                for _ in 0..block {
                    self.program.push(Token::Push);
                }
                for _ in 1..block {
                    self.program.push(Token::Op(BinOp::Concat));
                }
                self.frames
                    .push(Frame::entered(used + block, reduced + block - 1, 2 * block - 1));
            }
        }
    }

    fn retreat(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.program.truncate(self.program.len() - frame.appended);
        }
    }
}

impl Iterator for Matches {
    type Item = Vec<Token>;

    fn next(&mut self) -> Option<Vec<Token>> {
        let digit_count = self.digits.len();

        loop {
            let (used, reduced) = match self.frames.last() {
                Some(frame) => (frame.used, frame.reduced),
                None => return None,
            };

            if used + reduced == self.program_len {
                let mut matched = false;
                if let Ok(value) = evaluate(&self.digits, &self.program) {
                    matched = value.matches(&self.target);
                }
                let snapshot = if matched {
                    Some(self.program.clone())
                } else {
                    None
                };
                self.retreat();
                if let Some(program) = snapshot {
                    debug!("Yielding matching program of {} tokens", program.len());
                    return Some(program);
                }
                continue;
            }

            let mv = self
                .frames
                .last_mut()
                .and_then(|frame| frame.next_move(digit_count));
            match mv {
                Some(mv) => self.enter(mv, used, reduced),
                None => self.retreat(),
            }
        }
    }
}
