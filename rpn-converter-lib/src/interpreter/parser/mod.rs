use crate::interpreter::error::RpnError;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::trace;

/// Generates an expression tree based off of the given postfix tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_converter::interpreter::parser::parse;
/// use rpn_converter::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::new_operand("3", 3.0),
///     Token::new_operand("4", 4.0),
///     "+".parse::<Token>()?,
/// ];
/// let tree = parse(postfix_tokens)?;
/// assert_eq!(tree.to_infix()?, "(3 + 4)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(postfix_tokens: Vec<Token>) -> Result<Node, RpnError> {
    if postfix_tokens.is_empty() {
        return Err(RpnError::EmptyExpression);
    }

    let mut operands: Vec<Node> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Operand { text, value } => operands.push(Node::new_operand(value, text)),
            Token::Operator(operator) => {
                if operands.len() < 2 {
                    return Err(RpnError::InsufficientOperands {
                        operator,
                        available: operands.len(),
                    });
                }
                // The operand closest to the operator is the right-hand side.
                let (right_operand, left_operand) = match (operands.pop(), operands.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => {
                        return Err(RpnError::Internal(
                            "operand stack shrank below its checked depth".into(),
                        ))
                    }
                };
                trace!("applying {} with {} nodes left on the stack", operator, operands.len());
                operands.push(Node::new_binary_operation(
                    operator,
                    left_operand,
                    right_operand,
                ));
            }
        }
    }

    if operands.len() != 1 {
        return Err(RpnError::UnbalancedExpression {
            remaining: operands.len(),
        });
    }
    operands.pop().ok_or(RpnError::UnbalancedExpression { remaining: 0 })
}
