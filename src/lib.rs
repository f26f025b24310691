//! # Mathlang Scanner
//!
//! A lexical scanner for Mathlang, a small language of statements such as
//! `x = 5;` and `print "total";`.
//!
//! The scanner is pull-based: a parser asks for one token at a time and stops
//! when the scanner reports end of input.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathlang_scanner::{Scanner, Token};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scanner = Scanner::new("a + b;");
//!
//! assert_eq!(scanner.next_token()?, Some(Token::name("a")));
//! assert_eq!(scanner.next_token()?, Some(Token::Symbol('+')));
//! assert_eq!(scanner.next_token()?, Some(Token::name("b")));
//! assert_eq!(scanner.next_token()?, Some(Token::Symbol(';')));
//! assert_eq!(scanner.next_token()?, None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tokens
//!
//! - **Symbols**: `;` `+` `-` `=`, always one character
//! - **Numbers**: a single digit by default (`42` is `4` then `2`); see [`NumericMode`]
//! - **Names**: everything else up to the next symbol, digit or whitespace
//! - **Strings**: text between double quotes, with no escape sequences
//!
//! Classification looks only at the first character of the next
//! whitespace-delimited run:
//!
//! ```rust
//! use mathlang_scanner::{Scanner, Token};
//!
//! let tokens = Scanner::new("x=5;").scan_tokens().unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::name("x"),
//!         Token::Symbol('='),
//!         Token::Number(5.0),
//!         Token::Symbol(';'),
//!     ]
//! );
//! ```
//!
//! ## Multi-digit numbers
//!
//! ```rust
//! use mathlang_scanner::{NumericMode, ScanOptions, Scanner, Token};
//!
//! let options = ScanOptions::default().with_numeric_mode(NumericMode::Extended);
//! let tokens = Scanner::with_options("n = 42;", options).scan_tokens().unwrap();
//! assert_eq!(tokens[2], Token::Number(42.0));
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use mathlang_scanner::{Error, Scanner};
//!
//! let mut scanner = Scanner::new("\"no closing quote");
//! match scanner.next_token() {
//!     Err(Error::UnterminatedString { offset }) => assert_eq!(offset, 0),
//!     other => panic!("expected an error, got {:?}", other),
//! }
//! ```

/// Version of the Mathlang scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{MathScanner, NumericMode, ScanOptions, Token, TokenReader, SYMBOLS};

/// Type alias for the Mathlang scanner.
/// Converts raw source text into tokens for the parser.
pub type Scanner = MathScanner;
