use crate::error::CalculatorError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};
use std::iter::Peekable;
use std::vec::IntoIter;

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate than the original tokens.
///
/// The grammar, from loosest to tightest binding:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := ['-'] postfix
/// postfix    := atom '%'*
/// atom       := number | '(' expression ')'
/// ```
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use calculator_engine::interpreter::parser::parse;
/// use calculator_engine::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::number("2"),
///     "+".parse().unwrap(),
///     Token::number("3"),
/// ];
/// let tree = parse(infix_tokens)?;
/// let regenerated_tokens = tree.to_infix();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Node, CalculatorError> {
    let mut parser = Parser {
        tokens: infix_tokens.into_iter().peekable(),
        depth: 0,
    };
    let root = parser.parse_expression()?;
    match parser.tokens.next() {
        None => Ok(root.node),
        Some(token) if token.is(TokenKind::RightParentheses) => {
            Err(CalculatorError::malformed("unmatched ')'"))
        }
        Some(token) => Err(CalculatorError::malformed(format!(
            "unexpected '{}' after a complete expression",
            token
        ))),
    }
}

/// How deeply parentheses may nest.
pub const MAX_NESTING_DEPTH: usize = 64;

/// How many levels of operators an expression tree may have.
///
/// Evaluating and dropping a tree recurse once per level.
pub const MAX_TREE_HEIGHT: usize = 512;

struct Parsed {
    node: Node,
    height: usize,
}

impl Parsed {
    fn leaf(node: Node) -> Parsed {
        Parsed { node, height: 1 }
    }

    fn binary(
        operator: BinaryOperator,
        left: Parsed,
        right: Parsed,
    ) -> Result<Parsed, CalculatorError> {
        Ok(Parsed {
            height: grown_height(left.height.max(right.height))?,
            node: Node::new_binary(operator, left.node, right.node),
        })
    }

    fn unary(self, build: fn(Node) -> Node) -> Result<Parsed, CalculatorError> {
        Ok(Parsed {
            height: grown_height(self.height)?,
            node: build(self.node),
        })
    }
}

fn grown_height(operand_height: usize) -> Result<usize, CalculatorError> {
    let height = operand_height + 1;
    if height > MAX_TREE_HEIGHT {
        return Err(CalculatorError::malformed("expression is nested too deeply"));
    }
    Ok(height)
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    depth: usize,
}

impl Parser {
    fn parse_expression(&mut self) -> Result<Parsed, CalculatorError> {
        self.parse_binary_level(0)
    }

    /// Parses a left-associative chain of operators with the given precedence,
    /// whose operands are at the next tighter level.
    fn parse_binary_level(&mut self, precedence: u8) -> Result<Parsed, CalculatorError> {
        let mut left_operand = self.parse_operand(precedence)?;

        while let Some(operator) = self.next_operator_with(precedence) {
            self.tokens.next();
            let right_operand = self.parse_operand(precedence)?;
            left_operand = Parsed::binary(operator, left_operand, right_operand)?;
        }

        Ok(left_operand)
    }

    fn parse_operand(&mut self, precedence: u8) -> Result<Parsed, CalculatorError> {
        if precedence == 0 {
            self.parse_binary_level(1)
        } else {
            self.parse_factor()
        }
    }

    fn next_operator_with(&mut self, precedence: u8) -> Option<BinaryOperator> {
        self.tokens
            .peek()
            .and_then(BinaryOperator::from_token)
            .filter(|operator| operator.precedence() == precedence)
    }

    fn parse_factor(&mut self) -> Result<Parsed, CalculatorError> {
        if self.next_is(TokenKind::Dash) {
            self.tokens.next();
            return self.parse_postfix()?.unary(Node::new_negation);
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Parsed, CalculatorError> {
        let mut parsed = self.parse_atom()?;
        while self.next_is(TokenKind::Percent) {
            self.tokens.next();
            parsed = parsed.unary(Node::new_percent)?;
        }
        Ok(parsed)
    }

    fn parse_atom(&mut self) -> Result<Parsed, CalculatorError> {
        let token = match self.tokens.next() {
            Some(token) => token,
            None => {
                return Err(CalculatorError::malformed(
                    "expected a number or '(' but the expression ended",
                ))
            }
        };

        match token.kind {
            TokenKind::Number => parse_literal(&token).map(Parsed::leaf),
            TokenKind::LeftParentheses => {
                if self.next_is(TokenKind::RightParentheses) {
                    return Err(CalculatorError::malformed("empty parentheses"));
                }
                if self.depth == MAX_NESTING_DEPTH {
                    return Err(CalculatorError::malformed("expression is nested too deeply"));
                }
                self.depth += 1;
                let inner = self.parse_expression()?;
                self.depth -= 1;
                match self.tokens.next() {
                    Some(closing) if closing.is(TokenKind::RightParentheses) => Ok(inner),
                    Some(other) => Err(CalculatorError::malformed(format!(
                        "expected ')' but found '{}'",
                        other
                    ))),
                    None => Err(CalculatorError::malformed("unmatched '('")),
                }
            }
            _ => Err(CalculatorError::malformed(format!(
                "expected a number or '(' but found '{}'",
                token
            ))),
        }
    }

    fn next_is(&mut self, kind: TokenKind) -> bool {
        matches!(self.tokens.peek(), Some(token) if token.is(kind))
    }
}

fn parse_literal(token: &Token) -> Result<Node, CalculatorError> {
    token
        .text
        .parse::<f64>()
        .map(Node::new_literal)
        .map_err(|_| CalculatorError::malformed_number(&token.text))
}
