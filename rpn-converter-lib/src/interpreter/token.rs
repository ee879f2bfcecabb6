use crate::interpreter::error::RpnError;
use crate::interpreter::operator::{BinaryOperator, SYMBOLS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Optional minus, digits, and an optional fractional part. `\d` matches any Unicode decimal digit.
pub const NUMBER_PATTERN: &str = r"^-?\d+(\.\d+)?$";

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NUMBER_PATTERN).expect("Number pattern must compile"));

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// A number, along with the exact text it was written as.
    Operand { text: String, value: f64 },
    Operator(BinaryOperator),
}

impl Token {
    pub fn new_operand(text: impl Into<String>, value: f64) -> Token {
        Token::Operand {
            text: text.into(),
            value,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand { text, .. } => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = RpnError;

    /// Classifies a single whitespace-free fragment.
    fn from_str(fragment: &str) -> Result<Token, Self::Err> {
        let mut chars = fragment.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next()) {
            if SYMBOLS.contains(&symbol) {
                return Ok(Token::Operator(BinaryOperator::try_from(symbol)?));
            }
        }

        if NUMBER_REGEX.is_match(fragment) {
            return match fragment.parse::<f64>() {
                Ok(value) => Ok(Token::new_operand(fragment, value)),
                Err(_) => Err(RpnError::MalformedNumber(fragment.to_string())),
            };
        }

        Err(RpnError::UnrecognizedFragment(fragment.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::ErrorKind;
    use parameterized_macro::parameterized;

    #[parameterized(
    fragment = {
    "0",
    "42",
    "-3",
    "3.14",
    "-0.5",
    "007",
    },
    expected_value = {
    0.0,
    42.0,
    -3.0,
    3.14,
    -0.5,
    7.0,
    }
    )]
    fn number_fragment_becomes_operand(fragment: &str, expected_value: f64) {
        let token: Token = fragment.parse().unwrap();
        assert_eq!(token, Token::new_operand(fragment, expected_value));
    }

    #[test]
    fn operand_keeps_original_text() {
        let token: Token = "3.10".parse().unwrap();
        assert_eq!(token.to_string(), "3.10");
    }

    #[parameterized(
    fragment = { "+", "-", "*", "/" },
    expected = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    }
    )]
    fn single_symbol_becomes_operator(fragment: &str, expected: BinaryOperator) {
        let token: Token = fragment.parse().unwrap();
        assert_eq!(token, Token::Operator(expected));
    }

    #[parameterized(
    fragment = {
    "++",
    "-+",
    "1e5",
    "+3",
    ".5",
    "5.",
    "1,000",
    "x",
    "^",
    "--3",
    "3-",
    }
    )]
    fn invalid_fragment_is_unrecognized(fragment: &str) {
        let error = fragment.parse::<Token>().unwrap_err();
        assert_eq!(error, RpnError::UnrecognizedFragment(fragment.to_string()));
    }

    #[test]
    fn non_ascii_digits_match_pattern_but_fail_to_parse() {
        let fragment = "\u{0663}\u{0664}";

        let error = fragment.parse::<Token>().unwrap_err();

        assert_eq!(error, RpnError::MalformedNumber(fragment.to_string()));
        assert_eq!(error.kind(), ErrorKind::Lexical);
    }
}
