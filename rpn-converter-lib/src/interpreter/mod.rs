pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::RpnError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;
use syntax::expression_tree::Node;

/// Checks whether the given text is a single well-formed postfix expression.
///
/// Only the syntax and structure are checked. An expression that divides by zero is still valid.
///
/// # Arguments
///
/// * `expression`: A text expression in postfix format.
///
/// returns: `true` if the expression can be converted and evaluated, `false` otherwise.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::is_valid_rpn;
///
/// assert!(is_valid_rpn("3 4 +"));
/// assert!(!is_valid_rpn("3 +"));
/// assert!(!is_valid_rpn("   "));
/// ```
pub fn is_valid_rpn(expression: &str) -> bool {
    match convert(expression) {
        Ok(_) => true,
        Err(error) => {
            debug!("`{}` is not valid: {}", expression, error);
            false
        }
    }
}

/// Converts the given postfix expression into a fully parenthesized infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in postfix format.
///
/// returns: The infix expression, with every operation wrapped in parentheses.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::convert_to_infix;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let infix = convert_to_infix("3 4 + 2 *")?;
/// assert_eq!(infix, "((3 + 4) * 2)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert_to_infix(expression: &str) -> Result<String, RpnError> {
    let expression_tree = convert(expression)?;
    let infix = expression_tree.to_infix()?;
    debug!("`{}` converted to `{}`", expression, infix);
    Ok(infix)
}

/// Calculates the value of the given postfix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in postfix format.
///
/// returns: The numeric result.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let result = evaluate("15 7 1 1 + - / 3 * 2 1 1 + + -")?;
/// assert_eq!(result, 5.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<f64, RpnError> {
    let expression_tree = convert(expression)?;
    let result = expression_tree.evaluate()?;
    debug!("`{}` evaluated to {}", expression, result);
    Ok(result)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the postfix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("3 4 +")?;
/// print!("{}", tree);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node, RpnError> {
    if expression.trim().is_empty() {
        return Err(RpnError::EmptyInput);
    }
    let tokens = lexer::tokenize(expression)?;
    let expression_tree = parser::parse(tokens)?;
    debug!(
        "built tree for `{}`",
        tokens_to_string(&expression_tree.to_postfix())
    );
    Ok(expression_tree)
}

/// Joins the given tokens with single spaces.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert(" 3\t4   + ")?;
/// assert_eq!(tokens_to_string(&tree.to_postfix()), "3 4 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
