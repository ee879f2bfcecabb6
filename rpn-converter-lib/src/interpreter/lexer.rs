use crate::interpreter::error::RpnError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::trace;

/// Characters that separate fragments. Newlines are not among them.
pub static SEPARATORS: [char; 2] = [' ', '\t'];

/// Splits the expression on runs of spaces and tabs and classifies every fragment.
///
/// # Arguments
///
/// * `expression`: A postfix expression, e.g. `3 4 +`.
///
/// returns: The tokens in the same order as they appear in the text.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("3 4 +")?;
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, RpnError> {
    let tokens: Vec<Token> = fragments(expression)
        .map(str::parse::<Token>)
        .collect::<Result<_, _>>()?;
    trace!("tokenized `{}` into [{}]", expression, tokens.iter().join(", "));
    Ok(tokens)
}

fn fragments(expression: &str) -> impl Iterator<Item = &str> {
    expression
        .split(&SEPARATORS[..])
        .filter(|fragment| !fragment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    #[test]
    fn correct_expression_returns_tokens() {
        let tokens = tokenize("3 4.5 +").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_operand("3", 3.0),
                Token::new_operand("4.5", 4.5),
                Token::Operator(BinaryOperator::Add),
            ]
        );
    }

    #[test]
    fn runs_of_spaces_and_tabs_are_one_separator() {
        let tokens = tokenize("  3 \t\t 4   *\t").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_operand("3", 3.0),
                Token::new_operand("4", 4.0),
                Token::Operator(BinaryOperator::Multiply),
            ]
        );
    }

    #[test]
    fn blank_expression_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t ").unwrap().is_empty());
    }

    #[test]
    fn newline_does_not_separate_fragments() {
        let error = tokenize("3\n4 +").unwrap_err();
        assert_eq!(error, RpnError::UnrecognizedFragment("3\n4".to_string()));
    }

    #[test]
    fn first_bad_fragment_is_reported() {
        let error = tokenize("3 x y +").unwrap_err();
        assert_eq!(error, RpnError::UnrecognizedFragment("x".to_string()));
    }

    #[test]
    fn fragment_glued_to_operator_is_not_split() {
        let error = tokenize("3 4+").unwrap_err();
        assert_eq!(error, RpnError::UnrecognizedFragment("4+".to_string()));
    }
}
