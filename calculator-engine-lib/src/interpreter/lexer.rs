use crate::error::CalculatorError;
use crate::interpreter::token::{is_number_character, Token, TokenKind};
use itertools::Itertools;

/// Splits an expression into tokens.
///
/// The display glyphs `×` and `÷` are accepted and read as `*` and `/`.
/// Whitespace separates tokens but produces none.
///
/// # Arguments
///
/// * `expression`: The raw expression, as typed.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use calculator_engine::interpreter::lexer::tokenize;
/// use calculator_engine::interpreter::token::TokenKind;
///
/// let tokens = tokenize("12 × 3").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Asterisk, TokenKind::Number]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalculatorError> {
    let normalized = normalize(expression);
    let mut characters = normalized.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
            continue;
        }

        if is_number_character(character) {
            let literal: String = characters
                .peeking_take_while(|next| is_number_character(*next))
                .collect();
            tokens.push(scan_number(literal)?);
            continue;
        }

        characters.next();
        let kind = TokenKind::from_symbol(character)
            .ok_or_else(|| CalculatorError::unexpected_character(character))?;
        tokens.push(Token::symbol(kind));
    }

    Ok(tokens)
}

/// Maps the display glyphs onto the operators they stand for.
fn normalize(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

/// A number is a run of digits with at most one decimal point, and at least one digit.
fn scan_number(literal: String) -> Result<Token, CalculatorError> {
    let decimal_points = literal.chars().filter(|character| *character == '.').count();
    let has_digit = literal.chars().any(|character| character.is_ascii_digit());
    if decimal_points > 1 || !has_digit {
        return Err(CalculatorError::malformed_number(&literal));
    }
    Ok(Token::number(literal))
}
