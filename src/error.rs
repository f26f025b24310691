//! Error types for the Mathlang scanner

use thiserror::Error;

/// Mathlang scanning errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Quoted-string scan started on something other than `"`
    ///
    /// **Triggered by:** Calling the string scanner when the cursor is not on an opening quote.
    /// Unreachable through [`crate::MathScanner::next_token`], which checks first.
    #[error("Strings must start with opening quotes (offset {offset})")]
    MalformedString {
        /// Byte offset where the quote was expected
        offset: usize,
    },

    /// String literal with no closing quote before end of input
    ///
    /// **Triggered by:** `"hello` (missing closing quote)
    /// **Prevention:** Close every string; there is no escape for `"` inside a string
    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// Numeral that could not be parsed as a number
    #[error("Invalid number: {lexeme}")]
    InvalidNumber {
        /// Offending text
        lexeme: String,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Input error the caller can report and move past
    Recoverable,
}

impl Error {
    /// Classify error severity
    ///
    /// Bad input is recoverable by the caller; the other variants mean the scanner broke its own invariants.
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::UnterminatedString { .. } => ErrorSeverity::Recoverable,
            Error::MalformedString { .. } => ErrorSeverity::Fatal,
            Error::InvalidNumber { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Byte offset into the source where the error was detected, if known
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::MalformedString { offset } | Error::UnterminatedString { offset } => {
                Some(*offset)
            }
            Error::InvalidNumber { .. } => None,
        }
    }
}

/// Result type for Mathlang scanning operations
pub type Result<T> = std::result::Result<T, Error>;
