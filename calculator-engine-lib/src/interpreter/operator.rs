use crate::error::CalculatorError;
use crate::interpreter::token::{Token, TokenKind};
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// An unary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Prefix `-`.
    Negate,
    /// Postfix `%`, dividing its operand by 100.
    Percent,
}

impl UnaryOperator {
    pub fn token(&self) -> Token {
        match self {
            UnaryOperator::Negate => Token::symbol(TokenKind::Dash),
            UnaryOperator::Percent => Token::symbol(TokenKind::Percent),
        }
    }

    pub fn is_postfix(&self) -> bool {
        matches!(self, UnaryOperator::Percent)
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            UnaryOperator::Negate => 2,
            UnaryOperator::Percent => 3,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -x,
            UnaryOperator::Percent => x / 100.0,
        }
    }
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::symbol(TokenKind::Plus),
            BinaryOperator::Subtract => Token::symbol(TokenKind::Dash),
            BinaryOperator::Multiply => Token::symbol(TokenKind::Asterisk),
            BinaryOperator::Divide => Token::symbol(TokenKind::ForwardSlash),
        }
    }

    /// The binary operator a token stands for, if any.
    pub fn from_token(token: &Token) -> Option<BinaryOperator> {
        match token.kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Asterisk => Some(BinaryOperator::Multiply),
            TokenKind::ForwardSlash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(CalculatorError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Multiply;
        let lesser = BinaryOperator::Add;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn percent_binds_tighter_than_negation() {
        assert!(UnaryOperator::Percent.precedence() > UnaryOperator::Negate.precedence());
        assert!(UnaryOperator::Negate.precedence() > BinaryOperator::Divide.precedence());
    }

    #[parameterized(
        operator = {
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        },
        expected = { 12.5, 7.5, 25.0, 4.0 }
    )]
    fn binary_operator_evaluates_operands(operator: BinaryOperator, expected: f64) {
        assert_eq!(operator.evaluate(10.0, 2.5).unwrap(), expected)
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(1.0, 0.0),
            Err(CalculatorError::DivisionByZero)
        );
        assert_eq!(
            BinaryOperator::Divide.evaluate(1.0, -0.0),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn token_maps_back_to_operator() {
        let token = BinaryOperator::Subtract.token();
        assert_eq!(BinaryOperator::from_token(&token), Some(BinaryOperator::Subtract));
        assert_eq!(UnaryOperator::Negate.token(), token);
    }

    #[test]
    fn percent_divides_by_one_hundred() {
        assert_eq!(UnaryOperator::Percent.evaluate(50.0), 0.5);
        assert!(UnaryOperator::Percent.is_postfix());
        assert!(!UnaryOperator::Negate.is_postfix());
    }
}
