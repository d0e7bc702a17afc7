use crate::interpreter::formatter::format_number;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::token::{Token, TokenKind};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

#[derive(Clone)]
pub enum Node {
    // Terminal symbols (leaves)
    Literal(f64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal(value: f64) -> Node {
        Node::Literal(value)
    }

    pub fn new_binary(operator: BinaryOperator, left_operand: Node, right_operand: Node) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary(UnaryOperator::Negate, operand)
    }

    pub fn new_percent(operand: Node) -> Node {
        Self::new_unary(UnaryOperator::Percent, operand)
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Literal(value) => visitor.visit_literal(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }

    /// Regenerates the infix tokens of this tree, only adding the parentheses
    /// needed to parse back into the same tree.
    pub fn to_infix(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.build_expression(&mut tokens);
        tokens
    }

    fn build_expression(&self, tokens: &mut Vec<Token>) {
        match self {
            // Shortest text that reads back as the same value, never in exponent form.
            Node::Literal(value) => tokens.push(Token::number(value.to_string())),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                parenthesize_if(tokens, left_operand.needs_parentheses(self, false), |tokens| {
                    left_operand.build_expression(tokens)
                });
                tokens.push(operator.token());
                parenthesize_if(tokens, right_operand.needs_parentheses(self, true), |tokens| {
                    right_operand.build_expression(tokens)
                });
            }
            Node::UnaryOperation { operator, operand } => {
                let parenthesize = operand.needs_parentheses(self, !operator.is_postfix());
                if !operator.is_postfix() {
                    tokens.push(operator.token());
                }
                parenthesize_if(tokens, parenthesize, |tokens| operand.build_expression(tokens));
                if operator.is_postfix() {
                    tokens.push(operator.token());
                }
            }
        }
    }

    /// Whether this node must be wrapped in parentheses when written as an operand of `parent`.
    ///
    /// `is_right` is true when this node is written after the parent's operator.
    fn needs_parentheses(&self, parent: &Node, is_right: bool) -> bool {
        match (self, parent) {
            (Node::Literal(value), Node::UnaryOperation { .. }) => *value < 0.0,
            (Node::Literal(_), _) => false,
            (
                Node::BinaryOperation { operator, .. },
                Node::BinaryOperation {
                    operator: parent_operator,
                    ..
                },
            ) => {
                // When a child operator has lower precedence, it and its operands needs
                // to be wrapped in parentheses. Operators are left-associative, so a right
                // child of equal precedence needs them as well.
                parent_operator.precedence_gt(operator)
                    || (is_right && parent_operator.precedence_eq(operator))
            }
            (Node::BinaryOperation { .. }, _) => true,
            (
                Node::UnaryOperation { operator, .. },
                Node::UnaryOperation {
                    operator: parent_operator,
                    ..
                },
            ) => {
                // "--x" does not parse, so a double negation keeps its parentheses.
                parent_operator.precedence() > operator.precedence()
                    || (*operator == UnaryOperator::Negate
                        && *parent_operator == UnaryOperator::Negate)
            }
            (Node::UnaryOperation { .. }, _) => false,
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
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
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{:?}", value),
            Node::BinaryOperation { operator, .. } => write!(f, "{:?}", operator),
            Node::UnaryOperation { operator, .. } => write!(f, "{:?}", operator),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}

fn node_eq(node1: &Node, node2: &Node) -> bool {
    match (node1, node2) {
        (Node::Literal(value1), Node::Literal(value2)) => value1 == value2,
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

            node_eq(left_operand1, left_operand2) && node_eq(right_operand1, right_operand2)
        }
        (
            Node::UnaryOperation {
                operator: operator1,
                operand: operand1,
            },
            Node::UnaryOperation {
                operator: operator2,
                operand: operand2,
            },
        ) => operator1 == operator2 && node_eq(operand1, operand2),
        _ => false, // node1 and node2 are different variants
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, value: f64) {
        self.builder.add_empty_child(format_number(value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        let name = match operator {
            UnaryOperator::Negate => "neg".to_string(),
            UnaryOperator::Percent => format!("{}", operator),
        };
        self.builder.begin_child(name);
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: bool,
    build_interior: impl FnOnce(&mut Vec<Token>),
) {
    if predicate {
        tokens.push(Token::symbol(TokenKind::LeftParentheses));
    }

    build_interior(tokens);

    if predicate {
        tokens.push(Token::symbol(TokenKind::RightParentheses));
    }
}
