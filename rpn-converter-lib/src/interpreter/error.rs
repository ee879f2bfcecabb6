use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// The broad category an [`RpnError`] belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input text was empty or consisted only of whitespace.
    Argument,
    /// A fragment was neither an operator nor a number.
    Lexical,
    /// The tokens did not form exactly one postfix expression.
    Structural,
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
    /// A pipeline invariant was broken. Never caused by user input.
    Internal,
}

/// Everything that can go wrong while tokenizing, parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpnError {
    #[error("expression must not be empty")]
    EmptyInput,
    #[error("unrecognized fragment `{0}`")]
    UnrecognizedFragment(String),
    #[error("`{0}` looks like a number but could not be parsed")]
    MalformedNumber(String),
    #[error("empty expression")]
    EmptyExpression,
    #[error("not enough operands for `{operator}`: need 2 operands, have {available}")]
    InsufficientOperands {
        operator: BinaryOperator,
        available: usize,
    },
    #[error("malformed expression: {remaining} items left on the stack instead of 1")]
    UnbalancedExpression { remaining: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("internal error: {0}")]
    Internal(String),
}

impl RpnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RpnError::EmptyInput => ErrorKind::Argument,
            RpnError::UnrecognizedFragment(_) | RpnError::MalformedNumber(_) => ErrorKind::Lexical,
            RpnError::EmptyExpression
            | RpnError::InsufficientOperands { .. }
            | RpnError::UnbalancedExpression { .. } => ErrorKind::Structural,
            RpnError::DivisionByZero => ErrorKind::DivisionByZero,
            RpnError::Internal(_) => ErrorKind::Internal,
        }
    }
}
