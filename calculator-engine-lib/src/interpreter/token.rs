use std::fmt;
use std::fmt::Formatter;
use std::str;

/// The category of a token, independent of its text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Percent,
    LeftParentheses,
    RightParentheses,
}

impl TokenKind {
    const SYMBOLS: [TokenKind; 7] = [
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Asterisk,
        TokenKind::ForwardSlash,
        TokenKind::Percent,
        TokenKind::LeftParentheses,
        TokenKind::RightParentheses,
    ];

    /// The character this kind is written as, or `None` for numbers.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::Number => None,
            TokenKind::Plus => Some('+'),
            TokenKind::Dash => Some('-'),
            TokenKind::Asterisk => Some('*'),
            TokenKind::ForwardSlash => Some('/'),
            TokenKind::Percent => Some('%'),
            TokenKind::LeftParentheses => Some('('),
            TokenKind::RightParentheses => Some(')'),
        }
    }

    pub fn from_symbol(character: char) -> Option<TokenKind> {
        TokenKind::SYMBOLS
            .into_iter()
            .find(|kind| kind.symbol() == Some(character))
    }
}

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn number(text: impl Into<String>) -> Token {
        Token {
            kind: TokenKind::Number,
            text: text.into(),
        }
    }

    /// Creates a token for a single-character symbol, e.g. an operator or a parenthesis.
    pub fn symbol(kind: TokenKind) -> Token {
        let text = kind.symbol().map(String::from).unwrap_or_default();
        Token { kind, text }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        if let (Some(character), None) = (characters.next(), characters.next()) {
            if let Some(kind) = TokenKind::from_symbol(character) {
                return Ok(Token::symbol(kind));
            }
        }
        if !input.is_empty() && input.chars().all(is_number_character) {
            Ok(Token::number(input))
        } else {
            Err(())
        }
    }
}

pub(crate) fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}
