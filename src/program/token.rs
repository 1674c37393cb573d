/// One step of a postfix program over a digit sequence.
///
/// A complete program over `n` digits holds exactly `n` `Push` tokens and
/// `n - 1` binary tokens, and keeps the operand stack non-empty at every
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Materialize the next unconsumed digit as a leaf value
    Push,
    /// Pop two values, combine them, push the result
    Op(BinOp),
}

/// The closed set of binary combination operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Decimal concatenation `x * 10 + y`, used only to fuse freshly
    /// pushed digits into one multi-digit leaf
    Concat,
}

/// Arithmetic operators in the fixed order the search tries them.
pub const BINARY_OPS: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

/// Precedence assigned to a rendered leaf; higher than any operator.
pub const LEAF_PRECEDENCE: u8 = 4;

impl BinOp {
    /// Symbol printed between the two operands. Concatenation never
    /// surfaces as a symbol: fused digits render as one bare number.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Concat => "",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Concat => 3,
        }
    }

    /// Subtraction and division are not associative: a right operand of
    /// equal precedence must stay parenthesized.
    pub fn guards_right_operand(self) -> bool {
        matches!(self, BinOp::Sub | BinOp::Div)
    }
}
