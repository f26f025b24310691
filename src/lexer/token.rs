use serde::{Deserialize, Serialize};

/// Single-character operators and punctuation recognized by the language
pub const SYMBOLS: [char; 4] = [';', '+', '-', '='];

/// Check whether a character is one of the fixed [`SYMBOLS`]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Check whether a character is an ASCII decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// A single token from the source code
///
/// End of input is not a token; scanners report it as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// One of the fixed single-character symbols (`;`, `+`, `-`, `=`)
    Symbol(char),
    /// Numeric literal
    Number(f64),
    /// Identifier or keyword
    Name(String),
    /// Contents of a double-quoted string, quotes excluded
    Str(String),
}

impl Token {
    /// Creates a symbol token
    pub fn symbol(c: char) -> Self {
        Token::Symbol(c)
    }

    /// Creates a number token
    pub fn number(value: f64) -> Self {
        Token::Number(value)
    }

    /// Creates a name token
    pub fn name(name: impl Into<String>) -> Self {
        Token::Name(name.into())
    }

    /// Creates a string token
    pub fn string(content: impl Into<String>) -> Self {
        Token::Str(content.into())
    }

    /// Lowercase name of the token kind, used in logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Symbol(_) => "symbol",
            Token::Number(_) => "number",
            Token::Name(_) => "name",
            Token::Str(_) => "string",
        }
    }

    /// Check if this token is the given symbol
    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, Token::Symbol(s) if *s == c)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Number(n) => write!(f, "{}", n),
            Token::Name(name) => write!(f, "{}", name),
            Token::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}
