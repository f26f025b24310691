use super::options::{NumericMode, ScanOptions};
use super::token::{is_digit, is_symbol, Token};
use super::TokenReader;
use crate::error::{Error, Result};

/// Pull-based scanner for Mathlang source
///
/// Produces one token per call to [`MathScanner::next_token`] until end of input.
/// The cursor is a byte offset into the owned source and only ever lands on
/// character boundaries.
#[derive(Debug, Clone)]
pub struct MathScanner {
    /// Full program text
    source: String,
    /// Current byte position in source
    current: usize,
    options: ScanOptions,
}

impl MathScanner {
    /// Creates a scanner over `source` with default options
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Creates a scanner over `source` with the given options
    pub fn with_options(source: impl Into<String>, options: ScanOptions) -> Self {
        MathScanner {
            source: source.into(),
            current: 0,
            options,
        }
    }

    /// Scans the next token, or returns `None` once the input is exhausted
    ///
    /// On error the cursor is moved to the end of the source, so every later
    /// call returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();

        let Some(first) = self.peek() else {
            tracing::debug!("end of input at offset {}", self.current);
            return Ok(None);
        };

        let start = self.current;
        let result = if first == '"' {
            self.scan_string()
        } else {
            self.scan_bare(first)
        };

        match result {
            Ok(token) => {
                tracing::trace!(
                    "scanned {} token {} at offset {}",
                    token.kind_name(),
                    token,
                    start
                );
                Ok(Some(token))
            }
            Err(err) => {
                tracing::debug!("scan failed at offset {}: {}", start, err);
                Err(err)
            }
        }
    }

    /// Scans all remaining tokens and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.by_ref().collect()
    }

    /// Current byte position in the source
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.source.len() - self.current
    }

    /// Check whether the cursor has reached the end of the source
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// The source being scanned
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Options this scanner was created with
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.current += c.len_utf8();
        }
    }

    /// Scans a `"`-delimited string. There are no escape sequences.
    fn scan_string(&mut self) -> Result<Token> {
        let start = self.current;
        if self.advance() != Some('"') {
            return Err(self.fail(Error::MalformedString { offset: start }));
        }

        let content_start = self.current;
        match self.source[content_start..].find('"') {
            Some(len) => {
                let content = self.source[content_start..content_start + len].to_string();
                self.current = content_start + len + 1; // closing "
                Ok(Token::Str(content))
            }
            None => Err(self.fail(Error::UnterminatedString { offset: start })),
        }
    }

    /// Classifies the whitespace-delimited run at the cursor by its first character.
    ///
    /// Only the leading lexeme of the run is consumed; the rest is rescanned on
    /// later calls.
    fn scan_bare(&mut self, first: char) -> Result<Token> {
        let start = self.current;
        let mut end = self.source[start..]
            .find(char::is_whitespace)
            .map_or(self.source.len(), |len| start + len);
        self.current = end;

        // A trailing ';' is never part of the preceding lexeme
        if end - start > 1 && self.source[..end].ends_with(';') {
            end -= 1;
            self.current -= 1;
        }

        if is_symbol(first) {
            self.current = start + first.len_utf8();
            return Ok(Token::Symbol(first));
        }

        if is_digit(first) {
            return self.scan_number(start, end);
        }

        let run = &self.source[start..end];
        let len = run
            .find(|c: char| is_symbol(c) || is_digit(c))
            .unwrap_or(run.len());
        let name = run[..len].to_string();
        self.current = start + len;
        Ok(Token::Name(name))
    }

    fn scan_number(&mut self, start: usize, end: usize) -> Result<Token> {
        let len = match self.options.numeric_mode {
            NumericMode::Legacy => 1,
            NumericMode::Extended => numeral_len(&self.source[start..end]),
        };

        let lexeme = &self.source[start..start + len];
        match lexeme.parse::<f64>() {
            Ok(value) => {
                self.current = start + len;
                Ok(Token::Number(value))
            }
            Err(_) => {
                let lexeme = lexeme.to_string();
                Err(self.fail(Error::InvalidNumber { lexeme }))
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Abandons the rest of the input and hands back `err`
    fn fail(&mut self, err: Error) -> Error {
        self.current = self.source.len();
        err
    }
}

/// Length of the leading `digits[.digits]` numeral in `run`
fn numeral_len(run: &str) -> usize {
    let bytes = run.as_bytes();
    let mut len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    if bytes.get(len) == Some(&b'.') && matches!(bytes.get(len + 1), Some(b) if b.is_ascii_digit())
    {
        len += 1;
        len += bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    }

    len
}

impl TokenReader for MathScanner {
    fn next_token(&mut self) -> Result<Option<Token>> {
        MathScanner::next_token(self)
    }
}

impl Iterator for MathScanner {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<Token> {
        MathScanner::new(source).scan_tokens().unwrap()
    }

    fn scan_extended(source: &str) -> Vec<Token> {
        let options = ScanOptions::default().with_numeric_mode(NumericMode::Extended);
        MathScanner::with_options(source, options)
            .scan_tokens()
            .unwrap()
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            scan("a + b;"),
            vec![
                Token::name("a"),
                Token::Symbol('+'),
                Token::name("b"),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_no_spaces() {
        assert_eq!(
            scan("x=5;"),
            vec![
                Token::name("x"),
                Token::Symbol('='),
                Token::Number(5.0),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_semicolon_detached_from_name() {
        let mut scanner = MathScanner::new("abc;");
        assert_eq!(scanner.next_token().unwrap(), Some(Token::name("abc")));
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.next_token().unwrap(), Some(Token::Symbol(';')));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn test_repeated_semicolons() {
        assert_eq!(
            scan("x;;"),
            vec![Token::name("x"), Token::Symbol(';'), Token::Symbol(';')]
        );
    }

    #[test]
    fn test_lone_semicolon() {
        assert_eq!(scan(";"), vec![Token::Symbol(';')]);
    }

    #[test]
    fn test_legacy_numbers_are_single_digit() {
        assert_eq!(scan("42"), vec![Token::Number(4.0), Token::Number(2.0)]);
    }

    #[test]
    fn test_legacy_decimal_point() {
        // '.' is neither a symbol nor a digit, so it scans as a name
        assert_eq!(
            scan("3.5"),
            vec![Token::Number(3.0), Token::name("."), Token::Number(5.0)]
        );
    }

    #[test]
    fn test_extended_numbers() {
        assert_eq!(scan_extended("42"), vec![Token::Number(42.0)]);
        assert_eq!(
            scan_extended("x=3.25;"),
            vec![
                Token::name("x"),
                Token::Symbol('='),
                Token::Number(3.25),
                Token::Symbol(';'),
            ]
        );
        assert_eq!(
            scan_extended("1.x"),
            vec![Token::Number(1.0), Token::name(".x")]
        );
    }

    #[test]
    fn test_name_split_on_digits_and_symbols() {
        assert_eq!(
            scan("ab12cd"),
            vec![
                Token::name("ab"),
                Token::Number(1.0),
                Token::Number(2.0),
                Token::name("cd"),
            ]
        );
        assert_eq!(
            scan("a-b"),
            vec![Token::name("a"), Token::Symbol('-'), Token::name("b")]
        );
    }

    #[test]
    fn test_symbol_consumes_one_char() {
        assert_eq!(
            scan("-5"),
            vec![Token::Symbol('-'), Token::Number(5.0)]
        );
        assert_eq!(
            scan("+=x"),
            vec![Token::Symbol('+'), Token::Symbol('='), Token::name("x")]
        );
    }

    #[test]
    fn test_string() {
        let mut scanner = MathScanner::new("\"hello world\"");
        assert_eq!(
            scanner.next_token().unwrap(),
            Some(Token::string("hello world"))
        );
        assert!(scanner.is_at_end());
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn test_empty_string_and_adjacent_name() {
        assert_eq!(
            scan("\"\"\"a\"b"),
            vec![Token::string(""), Token::string("a"), Token::name("b")]
        );
    }

    #[test]
    fn test_string_keeps_inner_whitespace() {
        assert_eq!(
            scan("print \"  a;\n b \";"),
            vec![
                Token::name("print"),
                Token::string("  a;\n b "),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_quote_inside_run_is_part_of_name() {
        assert_eq!(scan("a\"b\""), vec![Token::name("a\"b\"")]);
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = MathScanner::new("x \"abc");
        assert_eq!(scanner.next_token().unwrap(), Some(Token::name("x")));
        assert_eq!(
            scanner.next_token(),
            Err(Error::UnterminatedString { offset: 2 })
        );
        assert!(scanner.is_at_end());
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn test_malformed_string_is_reported() {
        let mut scanner = MathScanner::new("abc");
        assert_eq!(
            scanner.scan_string(),
            Err(Error::MalformedString { offset: 0 })
        );
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_whitespace_only() {
        for source in ["", " ", "\t\n\r  ", "\u{3000}"] {
            assert_eq!(MathScanner::new(source).next_token().unwrap(), None);
        }
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(
            scan("größe=1;"),
            vec![
                Token::name("größe"),
                Token::Symbol('='),
                Token::Number(1.0),
                Token::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let results: Vec<_> = MathScanner::new("a \"b").collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], Ok(Token::name("a")));
        assert!(results[1].is_err());
    }

    #[test]
    fn test_numeral_len() {
        assert_eq!(numeral_len("123abc"), 3);
        assert_eq!(numeral_len("1.5"), 3);
        assert_eq!(numeral_len("1."), 1);
        assert_eq!(numeral_len("1.2.3"), 3);
    }
}
