use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;

/// Receives the nodes of a tree in pre-order. An operation is also reported between its two
/// operands and once more after both have been visited. Methods that are not implemented do
/// nothing.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_operand(&mut self, _value: f64, _text: &str) {}
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {}
    fn between_operands(&mut self, _operator: &BinaryOperator) {}
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {}
}

enum Step<'a> {
    Enter(&'a Node),
    Between(&'a BinaryOperator),
    Leave(&'a BinaryOperator),
}

/// Walks the tree with an explicit stack, so arbitrarily deep trees can be visited.
pub(crate) fn walk(visitor: &mut impl SyntaxVisitor, root: &Node) {
    let mut steps = vec![Step::Enter(root)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(Node::Operand { value, text }) => visitor.visit_operand(*value, text),
            Step::Enter(Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            }) => {
                visitor.enter_binary_operation(operator);
                steps.push(Step::Leave(operator));
                steps.push(Step::Enter(right_operand));
                steps.push(Step::Between(operator));
                steps.push(Step::Enter(left_operand));
            }
            Step::Between(operator) => visitor.between_operands(operator),
            Step::Leave(operator) => visitor.leave_binary_operation(operator),
        }
    }
}
