use crate::interpreter::error::RpnError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{walk, SyntaxVisitor};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::mem;
use string_builder::Builder;

/// Trees nested deeper than this are summarized instead of drawn by `Display`.
pub const MAX_DRAWN_DEPTH: usize = 256;

/// A node of a strictly binary expression tree. Every operation owns both of its operands.
///
/// All traversals, including drop and comparison, use explicit stacks, so the depth of a
/// tree is only limited by memory.
pub enum Node {
    // Terminal symbols (leaves)
    Operand {
        value: f64,
        text: String,
    },
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_operand(value: f64, text: impl Into<String>) -> Node {
        Node::Operand {
            value,
            text: text.into(),
        }
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    /// Calls the visitor for every node of the tree.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        walk(visitor, self)
    }

    /// Renders the tree in infix notation, wrapping every operation in parentheses.
    ///
    /// Operands are written exactly as they appeared in the input, so `3.10` stays `3.10`.
    pub fn to_infix(&self) -> Result<String, RpnError> {
        let mut visitor = InfixVisitor {
            builder: Builder::default(),
        };
        self.accept(&mut visitor);
        visitor
            .builder
            .string()
            .map_err(|error| RpnError::Internal(format!("infix text is not UTF-8: {}", error)))
    }

    /// Computes the numeric value of the tree.
    ///
    /// Operations are applied in post-order, so the first failing division is the one reported.
    pub fn evaluate(&self) -> Result<f64, RpnError> {
        let mut visitor = EvaluationVisitor {
            values: Vec::new(),
            error: None,
        };
        self.accept(&mut visitor);

        if let Some(error) = visitor.error {
            return Err(error);
        }
        match (visitor.values.pop(), visitor.values.is_empty()) {
            (Some(result), true) => Ok(result),
            _ => Err(RpnError::Internal(
                "evaluation did not end with a single value".into(),
            )),
        }
    }

    /// Regenerates the postfix token stream the tree was built from.
    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: vec![] };
        self.accept(&mut visitor);
        visitor.tokens
    }

    /// The number of nodes on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        let mut visitor = DepthVisitor {
            current: 0,
            deepest: 0,
        };
        self.accept(&mut visitor);
        visitor.deepest
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let depth = self.depth();
        if depth > MAX_DRAWN_DEPTH {
            return writeln!(f, "expression\n└─ ({} levels deep, too deep to draw)", depth);
        }

        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }

    /// Moves both children out, leaving empty leaves behind.
    fn take_children(&mut self, pending: &mut Vec<Node>) {
        if let Node::BinaryOperation {
            left_operand,
            right_operand,
            ..
        } = self
        {
            pending.push(mem::replace(&mut **left_operand, Node::new_operand(0.0, "")));
            pending.push(mem::replace(&mut **right_operand, Node::new_operand(0.0, "")));
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];

        while let Some(pair) = pairs.pop() {
            match pair {
                (
                    Node::Operand {
                        value: value1,
                        text: text1,
                    },
                    Node::Operand {
                        value: value2,
                        text: text2,
                    },
                ) => {
                    if value1 != value2 || text1 != text2 {
                        return false;
                    }
                }
                (
                    Node::BinaryOperation {
                        operator: operator1,
                        left_operand: left_operand1,
                        right_operand: right_operand1,
                    },
                    Node::BinaryOperation {
                        operator: operator2,
                        left_operand: left_operand2,
                        right_operand: right_operand2,
                    },
                ) => {
                    if operator1 != operator2 {
                        return false;
                    }
                    pairs.push((right_operand1.as_ref(), right_operand2.as_ref()));
                    pairs.push((left_operand1.as_ref(), left_operand2.as_ref()));
                }
                _ => return false, // different variants
            }
        }
        true
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_postfix()).finish()
    }
}

struct InfixVisitor {
    builder: Builder,
}

impl SyntaxVisitor for InfixVisitor {
    fn visit_operand(&mut self, _value: f64, text: &str) {
        self.builder.append(text);
    }
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.builder.append('(');
    }
    fn between_operands(&mut self, operator: &BinaryOperator) {
        self.builder.append(' ');
        self.builder.append(operator.symbol());
        self.builder.append(' ');
    }
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.builder.append(')');
    }
}

struct EvaluationVisitor {
    values: Vec<f64>,
    error: Option<RpnError>,
}

impl SyntaxVisitor for EvaluationVisitor {
    fn visit_operand(&mut self, value: f64, _text: &str) {
        self.values.push(value);
    }
    fn leave_binary_operation(&mut self, operator: &BinaryOperator) {
        if self.error.is_some() {
            return;
        }
        let result = match (self.values.pop(), self.values.pop()) {
            (Some(right), Some(left)) => operator.evaluate(left, right),
            _ => Err(RpnError::Internal(format!(
                "`{}` is missing an evaluated operand",
                operator
            ))),
        };
        match result {
            Ok(value) => self.values.push(value),
            Err(error) => self.error = Some(error),
        }
    }
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_operand(&mut self, value: f64, text: &str) {
        self.tokens.push(Token::new_operand(text, value));
    }
    fn leave_binary_operation(&mut self, operator: &BinaryOperator) {
        self.tokens.push(operator.token());
    }
}

struct DepthVisitor {
    current: usize,
    deepest: usize,
}

impl SyntaxVisitor for DepthVisitor {
    fn visit_operand(&mut self, _value: f64, _text: &str) {
        self.deepest = self.deepest.max(self.current + 1);
    }
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.current += 1;
        self.deepest = self.deepest.max(self.current);
    }
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.current -= 1;
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_operand(&mut self, _value: f64, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        self.builder.begin_child(format!("{}", operator));
    }
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.builder.end_child();
    }
}
