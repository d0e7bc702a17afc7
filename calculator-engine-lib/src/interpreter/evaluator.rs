use crate::error::CalculatorError;
use crate::interpreter::parser;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Evaluates the given expression tree using double-precision arithmetic.
///
/// Operands are evaluated left to right, so the first failing division decides the error.
///
/// # Arguments
///
/// * `node`: The root of the expression tree.
///
/// returns: The value of the expression, `DivisionByZero` if a divisor evaluates to 0,
/// or `NonFiniteResult` if the value overflows.
pub fn evaluate(node: &Node) -> Result<f64, CalculatorError> {
    let value = evaluate_node(node)?;
    if !value.is_finite() {
        return Err(CalculatorError::NonFiniteResult);
    }
    Ok(value)
}

fn evaluate_node(node: &Node) -> Result<f64, CalculatorError> {
    match node {
        Node::Literal(value) => Ok(*value),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left = evaluate_node(left_operand)?;
            let right = evaluate_node(right_operand)?;
            operator.evaluate(left, right)
        }
        Node::UnaryOperation { operator, operand } => {
            Ok(operator.evaluate(evaluate_node(operand)?))
        }
    }
}

/// Parses and evaluates the given tokens.
pub fn evaluate_tokens(tokens: Vec<Token>) -> Result<f64, CalculatorError> {
    let tree = parser::parse(tokens)?;
    evaluate(&tree)
}
