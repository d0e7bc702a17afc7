use thiserror::Error;

/// Everything that can go wrong while turning an expression buffer into a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The tokenizer met a character outside the accepted set, or a malformed number literal.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
    /// The tokens do not form an expression: unmatched parentheses, a dangling operator, etc.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    #[error("division by zero")]
    DivisionByZero,
    /// The arithmetic overflowed to infinity or produced NaN.
    #[error("result is not a finite number")]
    NonFiniteResult,
    #[error("nothing to evaluate")]
    EmptyExpression,
}

impl CalculatorError {
    pub(crate) fn unexpected_character(character: char) -> CalculatorError {
        CalculatorError::InvalidExpression(format!("unexpected character '{}'", character))
    }

    pub(crate) fn malformed_number(literal: &str) -> CalculatorError {
        CalculatorError::InvalidExpression(format!("malformed number literal '{}'", literal))
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> CalculatorError {
        CalculatorError::MalformedExpression(reason.into())
    }

    /// The short message a front end shows in place of the result.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalculatorError::DivisionByZero => "Division by zero!",
            _ => "Invalid input!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_has_its_own_user_message() {
        assert_eq!(
            CalculatorError::DivisionByZero.user_message(),
            "Division by zero!"
        );
    }

    #[test]
    fn other_errors_share_generic_user_message() {
        let errors = [
            CalculatorError::unexpected_character('x'),
            CalculatorError::malformed_number("1..2"),
            CalculatorError::malformed("dangling operator"),
            CalculatorError::NonFiniteResult,
        ];
        for error in errors {
            assert_eq!(error.user_message(), "Invalid input!");
        }
    }

    #[test]
    fn display_includes_the_offending_text() {
        let error = CalculatorError::unexpected_character('#');
        assert_eq!(error.to_string(), "invalid expression: unexpected character '#'");
    }
}
