pub mod evaluator;
pub mod formatter;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::dump;
use crate::error::CalculatorError;
use crate::interpreter::formatter::format_number;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{Context, Result};
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Calculates the value of the given expression and formats it for display.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format. `×` and `÷` may be used
///   in place of `*` and `/`.
///
/// returns: The formatted result, in text.
///
/// # Examples
///
/// ```
/// use calculator_engine::interpreter::calculate;
///
/// let expression = "7×3";
/// let result = calculate(expression.to_string()).unwrap();
/// assert_eq!(result, "21");
/// ```
pub fn calculate(expression: String) -> Result<String> {
    if expression.trim().is_empty() {
        return Err(CalculatorError::EmptyExpression.into());
    }
    let expression_tree = convert(expression.clone())?;
    dump!(&expression_tree);
    let value = evaluator::evaluate(&expression_tree)
        .with_context(|| format!("could not evaluate '{}'", expression))?;
    Ok(format_number(value))
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use calculator_engine::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = "2 * (3 + 4)";
/// let tree = convert(expression.into())?;
/// let regenerated_tokens = tree.to_infix();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: String) -> Result<Node> {
    let tokens = lexer::tokenize(&expression)
        .with_context(|| format!("could not tokenize '{}'", expression))?;
    let expression_tree = parser::parse(tokens)
        .with_context(|| format!("could not parse '{}'", expression))?;
    Ok(expression_tree)
}

/// Runs the whole pipeline on an expression, keeping the typed error.
pub(crate) fn evaluate_expression(expression: &str) -> Result<String, CalculatorError> {
    let tokens = lexer::tokenize(expression)?;
    let value = evaluator::evaluate_tokens(tokens)?;
    Ok(format_number(value))
}

/// Best-effort result of an expression that is still being typed.
///
/// Partial input is expected to be invalid most of the time, so any failure
/// gives an empty preview instead of an error.
///
/// # Examples
///
/// ```
/// use calculator_engine::interpreter::preview;
///
/// assert_eq!(preview("2+3"), "5");
/// assert_eq!(preview("2+"), "");
/// assert_eq!(preview("1÷0"), "");
/// ```
pub fn preview(expression: &str) -> String {
    evaluate_expression(expression).unwrap_or_default()
}

/// Pretty-prints the given vector of tokens with added whitespace.
///
/// Binary operators are surrounded by spaces, while a `-` that negates
/// its operand is kept next to it.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use calculator_engine::interpreter::tokens_to_string;
/// use calculator_engine::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::number("2"),
///     "*".parse().unwrap(),
///     "-".parse().unwrap(),
///     Token::number("3"),
/// ];
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(pretty_printed_tokens, "2 * -3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        match token.kind {
            TokenKind::Dash if !ends_operand(previous) => builder.append(token.to_string()),
            TokenKind::Plus | TokenKind::Dash | TokenKind::Asterisk | TokenKind::ForwardSlash => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
        previous = Some(token.kind);
    }

    builder.string().context("Failed to build token string")
}

/// Whether a token of this kind can be the last token of an operand.
fn ends_operand(kind: Option<TokenKind>) -> bool {
    matches!(
        kind,
        Some(TokenKind::Number | TokenKind::RightParentheses | TokenKind::Percent)
    )
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! dump {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! dump {
    ($( $args:expr ),*) => {()}
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn simple_expression_regenerates_to_itself() {
        let expression = "2 + 3";

        let tree = convert(expression.into()).unwrap();
        let regenerated_tokens = tree.to_infix();
        let regenerated_expression = tokens_to_string(regenerated_tokens).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn complex_expression_regenerates_to_itself() {
        let expression = "1 + 2 * (3 - 4) / -5%";

        let tree = convert(expression.into()).unwrap();
        let regenerated_tokens = tree.to_infix();
        let regenerated_expression = tokens_to_string(regenerated_tokens).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn redundant_parentheses_are_stripped_when_regenerating() {
        let redundant_expression = "1 + ((2) * ((3 - 4)) / (5%))";
        let expected_expression = "1 + 2 * (3 - 4) / 5%";

        let tree = convert(redundant_expression.into()).unwrap();
        let regenerated_tokens = tree.to_infix();
        let regenerated_expression = tokens_to_string(regenerated_tokens).unwrap();

        assert_eq!(regenerated_expression, expected_expression)
    }

    #[parameterized(
        expression = {
            "2+3",
            "10÷4",
            "7×3",
            "50%",
            "0.1+0.2",
            "1÷3",
            "-2-3",
            "1000000×1000000000",
            " 4 ",
        },
        expected_result = {
            "5",
            "2.5",
            "21",
            "0.5",
            "0.3",
            "0.3333333333",
            "-5",
            "1e+15",
            "4",
        }
    )]
    fn calculate_expression_returns_formatted_result(expression: &str, expected_result: &str) {
        let actual_result = calculate(expression.to_string()).unwrap();
        assert_eq!(actual_result, expected_result);
    }

    #[parameterized(
        expression = { "", "   ", "10÷0", "3+(", "2a", "1..2" },
        expected_error = {
            CalculatorError::EmptyExpression,
            CalculatorError::EmptyExpression,
            CalculatorError::DivisionByZero,
            CalculatorError::malformed("expected a number or '(' but the expression ended"),
            CalculatorError::unexpected_character('a'),
            CalculatorError::malformed_number("1..2"),
        }
    )]
    fn calculate_failure_keeps_typed_error(expression: &str, expected_error: CalculatorError) {
        let error = calculate(expression.to_string()).unwrap_err();

        assert_eq!(error.downcast_ref::<CalculatorError>(), Some(&expected_error));
    }

    #[test]
    fn calculate_failure_names_the_expression() {
        let error = calculate("10÷0".to_string()).unwrap_err();

        assert_eq!(error.to_string(), "could not evaluate '10÷0'");
        assert_eq!(error.root_cause().to_string(), "division by zero");
    }

    #[test]
    fn calculate_rejects_overflowing_result() {
        let overflowing_product = format!("{}×10", "9".repeat(308));

        let error = calculate(overflowing_product).unwrap_err();

        assert_eq!(
            error.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::NonFiniteResult)
        );
    }

    #[test]
    fn literals_keep_full_precision_when_regenerating() {
        for expression in ["0.12345678901", "100000000000000000000", "1 + 0.000001"] {
            let tree = convert(expression.into()).unwrap();
            let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

            assert_eq!(regenerated_expression, expression);
            assert_eq!(convert(regenerated_expression).unwrap(), tree);
        }
    }

    #[test]
    fn preview_swallows_every_error() {
        for expression in ["", "(", "2+", "1÷0", "x", "1..2"] {
            assert_eq!(preview(expression), "", "preview of {:?}", expression);
        }
    }

    #[test]
    fn preview_formats_like_evaluation() {
        assert_eq!(preview("1÷3"), "0.3333333333");
        assert_eq!(preview("(2+3)×4"), "20");
    }
}
