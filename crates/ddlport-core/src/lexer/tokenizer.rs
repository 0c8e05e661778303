//! MySQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes MySQL DDL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the full input this lexer reads from.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the character `n` positions ahead without advancing.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    ///
    /// Returns false if a block comment was left unterminated.
    fn skip_whitespace_and_comments(&mut self) -> bool {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // MySQL needs whitespace after `--` for it to open a comment.
            let dash_comment = self.peek() == Some('-')
                && self.peek_next() == Some('-')
                && self.peek_nth(2).is_none_or(char::is_whitespace);
            if dash_comment || self.peek() == Some('#') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // Block comments, including `/*! ... */` version comments.
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => return false,
                        _ => {}
                    }
                }
                continue;
            }

            return true;
        }
    }

    /// Creates a span from start to current position.
    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        // Charset introducer, e.g. _utf8mb4'abc'.
        let introducer = text.len() > 1 && text.starts_with('_');
        if let Some(quote @ ('\'' | '"')) = self.peek() {
            if introducer {
                self.start = self.pos;
                return self.scan_string(quote);
            }
        }
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(text.to_string())),
        }
    }

    /// Scans a backtick-quoted identifier.
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance();
        let mut name = String::new();

        loop {
            match self.advance() {
                Some('`') if self.peek() == Some('`') => {
                    name.push('`');
                    self.advance();
                }
                Some('`') => break,
                Some(c) => name.push(c),
                None => return self.error("Unterminated quoted identifier"),
            }
        }

        self.make_token(TokenKind::QuotedIdentifier(name))
    }

    /// Scans a number: integer, fixed-point decimal or float with exponent.
    fn scan_number(&mut self) -> Token {
        let mut is_decimal = false;
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_decimal = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let signed = self.peek_next().is_some_and(|c| c == '+' || c == '-');
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                for _ in 0..digit_at {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        let text = &self.input[self.start..self.pos];

        if is_float {
            return match text.parse::<f64>() {
                Ok(f) => self.make_token(TokenKind::Float(f)),
                Err(e) => self.error(format!("Invalid float: {e}")),
            };
        }
        if is_decimal {
            return self.make_token(TokenKind::Decimal(text.to_string()));
        }
        if let Ok(i) = text.parse::<i64>() {
            return self.make_token(TokenKind::Integer(i));
        }
        match text.parse::<u64>() {
            Ok(u) => self.make_token(TokenKind::Unsigned(u)),
            Err(_) => self.make_token(TokenKind::Decimal(text.to_string())),
        }
    }

    /// Scans a hexadecimal number (0x1F). An odd digit count is left-padded.
    fn scan_hex_number(&mut self) -> Token {
        self.advance();
        self.advance();
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
        }

        let digits = &self.input[digits_start..self.pos];
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_string()
        };
        let bytes = (0..padded.len())
            .step_by(2)
            .filter_map(|i| u8::from_str_radix(&padded[i..i + 2], 16).ok())
            .collect();
        self.make_token(TokenKind::HexString(bytes))
    }

    /// Scans a binary number (0b101).
    fn scan_bit_number(&mut self) -> Token {
        self.advance();
        self.advance();
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c == '0' || c == '1') {
            self.advance();
        }
        let digits = self.input[digits_start..self.pos].to_string();
        self.make_token(TokenKind::BitString(digits))
    }

    /// Scans a string literal delimited by `quote`, resolving MySQL escapes.
    fn scan_string(&mut self, quote: char) -> Token {
        self.advance();
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some('\\') => match self.advance() {
                    Some('0') => value.push('\0'),
                    Some('b') => value.push('\u{8}'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some('Z') => value.push('\u{1A}'),
                    // Pattern escapes keep their backslash.
                    Some(c @ ('%' | '_')) => {
                        value.push('\\');
                        value.push(c);
                    }
                    Some(c) => value.push(c),
                    None => return self.error("Unterminated string literal"),
                },
                Some(c) => value.push(c),
                None => return self.error("Unterminated string literal"),
            }
        }

        self.make_token(TokenKind::String(value))
    }

    /// Scans a hex literal (X'...' or x'...').
    fn scan_hex(&mut self) -> Token {
        self.advance();
        self.advance();

        let mut bytes = Vec::new();
        let mut pending: Option<char> = None;

        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => match pending.take() {
                    Some(high) => {
                        let pair = format!("{high}{c}");
                        if let Ok(byte) = u8::from_str_radix(&pair, 16) {
                            bytes.push(byte);
                        }
                    }
                    None => pending = Some(c),
                },
                Some(_) => return self.error("Invalid character in hex literal"),
                None => return self.error("Unterminated hex literal"),
            }
        }

        if pending.is_some() {
            return self.error("Odd number of hex digits in hex literal");
        }
        self.make_token(TokenKind::HexString(bytes))
    }

    /// Scans a bit literal (B'...' or b'...').
    fn scan_bits(&mut self) -> Token {
        self.advance();
        self.advance();

        let mut digits = String::new();
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c @ ('0' | '1')) => digits.push(c),
                Some(_) => return self.error("Invalid character in bit literal"),
                None => return self.error("Unterminated bit literal"),
            }
        }
        self.make_token(TokenKind::BitString(digits))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        let terminated = self.skip_whitespace_and_comments();
        self.start = self.pos;
        if !terminated {
            return self.error("Unterminated block comment");
        }

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '\'' | '"' => return self.scan_string(c),
            '`' => return self.scan_quoted_identifier(),
            'X' | 'x' if self.peek_next() == Some('\'') => return self.scan_hex(),
            'B' | 'b' if self.peek_next() == Some('\'') => return self.scan_bits(),
            '0' if matches!(self.peek_next(), Some('x' | 'X'))
                && self.peek_nth(2).is_some_and(|n| n.is_ascii_hexdigit()) =>
            {
                return self.scan_hex_number();
            }
            '0' if matches!(self.peek_next(), Some('b' | 'B'))
                && self.peek_nth(2).is_some_and(|n| n == '0' || n == '1') =>
            {
                return self.scan_bit_number();
            }
            c if c.is_ascii_digit() => return self.scan_number(),
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => {
                return self.scan_number();
            }
            c if c.is_alphabetic() || c == '_' || c == '$' => return self.scan_identifier(),
            _ => {}
        }

        self.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '=' => TokenKind::Eq,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            other => TokenKind::Symbol(other),
        };
        self.make_token(kind)
    }

    /// Tokenizes the entire input and returns all tokens, ending with EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds(""), vec![TokenKind::Eof]);
        assert_eq!(token_kinds("  \n\t "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            token_kinds("CREATE -- note\n# hash note\n/* block */ /*!40101 SET x */ TABLE"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_double_dash_needs_whitespace() {
        assert_eq!(
            token_kinds("1--2"),
            vec![
                TokenKind::Integer(1),
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Integer(2),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let kinds = token_kinds("CREATE /* never closed");
        assert!(matches!(kinds[1], TokenKind::Error(_)));
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            token_kinds("create Table users auto_increment"),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Identifier(String::from("users")),
                TokenKind::Keyword(Keyword::AutoIncrement),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_backtick_identifiers() {
        assert_eq!(
            token_kinds("`order` `we``ird`"),
            vec![
                TokenKind::QuotedIdentifier(String::from("order")),
                TokenKind::QuotedIdentifier(String::from("we`ird")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 -7 18446744073709551615 3.50 .5 1e3"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Minus,
                TokenKind::Integer(7),
                TokenKind::Unsigned(u64::MAX),
                TokenKind::Decimal(String::from("3.50")),
                TokenKind::Decimal(String::from(".5")),
                TokenKind::Float(1000.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings_with_escapes() {
        assert_eq!(
            token_kinds(r#"'it''s' "say \"hi\"" 'a\nb' 'back\\slash'"#),
            vec![
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::from("say \"hi\"")),
                TokenKind::String(String::from("a\nb")),
                TokenKind::String(String::from("back\\slash")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let kinds = token_kinds("'abc");
        assert_eq!(
            kinds[0],
            TokenKind::Error(String::from("Unterminated string literal"))
        );
    }

    #[test]
    fn test_hex_and_bit_literals() {
        assert_eq!(
            token_kinds("X'0aFF' b'101'"),
            vec![
                TokenKind::HexString(vec![0x0A, 0xFF]),
                TokenKind::BitString(String::from("101")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_mysql_number_forms() {
        assert_eq!(
            token_kinds("0x1F 0xABC 0b101 99999999999999999999999 0 0.5"),
            vec![
                TokenKind::HexString(vec![0x1F]),
                TokenKind::HexString(vec![0x0A, 0xBC]),
                TokenKind::BitString(String::from("101")),
                TokenKind::Decimal(String::from("99999999999999999999999")),
                TokenKind::Integer(0),
                TokenKind::Decimal(String::from("0.5")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_charset_introducer() {
        assert_eq!(
            token_kinds("_utf8mb4'abc' _binary\"x\" _private"),
            vec![
                TokenKind::String(String::from("abc")),
                TokenKind::String(String::from("x")),
                TokenKind::Identifier(String::from("_private")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation_and_symbols() {
        assert_eq!(
            token_kinds("( ) , ; . = + @"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Eq,
                TokenKind::Plus,
                TokenKind::Symbol('@'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("CREATE TABLE `t`");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 12));
        assert_eq!(tokens[2].span, Span::new(13, 16));
    }
}
