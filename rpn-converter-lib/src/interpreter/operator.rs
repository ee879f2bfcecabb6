use crate::interpreter::error::RpnError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

pub static SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

impl BinaryOperator {
    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    /// Applies the operator with `a` as the left operand and `b` as the right one.
    ///
    /// Division fails when `b` is exactly zero (positive or negative).
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, RpnError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide => {
                if b == 0.0 {
                    return Err(RpnError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = RpnError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(BinaryOperator::Add),
            '-' => Ok(BinaryOperator::Subtract),
            '*' => Ok(BinaryOperator::Multiply),
            '/' => Ok(BinaryOperator::Divide),
            other => Err(RpnError::Internal(format!(
                "no operator is defined for symbol '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::ErrorKind;
    use parameterized_macro::parameterized;

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    },
    expected = {
    9.0,
    3.0,
    18.0,
    2.0,
    }
    )]
    fn operator_applies_left_operand_first(operator: BinaryOperator, expected: f64) {
        let result = operator.evaluate(6.0, 3.0).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn division_by_zero_fails() {
        let error = BinaryOperator::Divide.evaluate(5.0, 0.0).unwrap_err();
        assert_eq!(error, RpnError::DivisionByZero);
    }

    #[test]
    fn division_by_negative_zero_fails() {
        let error = BinaryOperator::Divide.evaluate(5.0, -0.0).unwrap_err();
        assert_eq!(error, RpnError::DivisionByZero);
    }

    #[test]
    fn division_by_tiny_value_succeeds() {
        let result = BinaryOperator::Divide.evaluate(1.0, f64::MIN_POSITIVE).unwrap();
        assert!(result.is_infinite() || result > 0.0);
    }

    #[test]
    fn every_symbol_maps_back_to_its_operator() {
        for symbol in SYMBOLS {
            let operator = BinaryOperator::try_from(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol);
        }
    }

    #[test]
    fn unknown_symbol_is_internal_error() {
        let error = BinaryOperator::try_from('^').unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Internal);
    }
}
