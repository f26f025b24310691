//! Lexical analysis for Mathlang
//!
//! Converts source text into a stream of tokens, one token per call.

mod math_scanner;
mod options;
mod token;

pub use math_scanner::MathScanner;
pub use options::{NumericMode, ScanOptions};
pub use token::{is_digit, is_symbol, Token, SYMBOLS};

use crate::error::Result;

/// Source of tokens for a parser
///
/// Implementors return `Ok(None)` once the input is exhausted.
pub trait TokenReader {
    /// Returns the next token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<Token>>;
}
