//! Positional cursor over a finite token sequence.
//!
//! All clause parsers are built from these primitives. The position is
//! a plain index that can be saved and restored, which is how the one
//! speculative path in the grammar backtracks.

use super::error::ParseError;
use crate::ast::TokenSpan;
use crate::lexer::{Keyword, Span, Token, TokenKind};

/// A cursor over a tokenized statement.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Creates a cursor over the given tokens. The sequence is expected
    /// to end with an EOF token; one is appended if missing so `peek`
    /// always has something to return.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        }
        Self { tokens, pos: 0 }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    #[must_use]
    pub fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Consumes and returns the current token. At EOF the cursor stays put.
    pub fn advance(&mut self) -> &Token {
        let at = self.pos.min(self.tokens.len() - 1);
        if !self.tokens[at].is_eof() {
            self.pos += 1;
        }
        &self.tokens[at]
    }

    /// Returns the most recently consumed token.
    #[must_use]
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Returns the current position, suitable for [`Cursor::rewind`].
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Restores a previously saved position.
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos, "rewind only moves backwards");
        self.pos = pos;
    }

    /// Builds the token span from a saved start position through the
    /// last consumed token.
    #[must_use]
    pub const fn span_from(&self, start: usize) -> TokenSpan {
        TokenSpan::new(start, self.pos - 1)
    }

    /// Returns true if the cursor is at the EOF token.
    #[must_use]
    pub fn at_eof(&self) -> bool {
        self.peek().is_eof()
    }

    /// Checks the current token against a kind without consuming.
    /// Payload-carrying kinds compare by discriminant only.
    #[must_use]
    pub fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(self.peek_kind()) == core::mem::discriminant(kind)
    }

    /// Checks whether the current token is the given keyword.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.peek_kind(), TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Consumes the current token if it matches the kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is the given keyword.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is any of the given keywords,
    /// returning which one matched.
    pub fn eat_any_keyword(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        let kw = self.peek().as_keyword()?;
        if keywords.contains(&kw) {
            self.advance();
            Some(kw)
        } else {
            None
        }
    }

    /// Consumes a token of the given kind or fails with an
    /// expected-token error naming `expected`.
    pub fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected_token(expected, self.peek()))
        }
    }

    /// Consumes the given keyword or fails with an expected-token error.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<&Token, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected_token(keyword.as_str(), self.peek()))
        }
    }

    /// Consumes an identifier and returns its name, or fails with an
    /// expected-token error naming `expected`.
    pub fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        match self.peek_kind() {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(ParseError::expected_token(expected, self.peek())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn cursor(sql: &str) -> Cursor {
        Cursor::new(Lexer::new(sql).tokenize())
    }

    #[test]
    fn test_peek_and_advance() {
        let mut c = cursor("SELECT a");
        assert!(c.check_keyword(Keyword::Select));
        c.advance();
        assert!(matches!(c.peek_kind(), TokenKind::Identifier(n) if n == "a"));
        c.advance();
        assert!(c.at_eof());
    }

    #[test]
    fn test_advance_is_saturating_at_eof() {
        let mut c = cursor("a");
        c.advance();
        let pos = c.pos();
        c.advance();
        assert_eq!(c.pos(), pos);
        assert!(c.at_eof());
    }

    #[test]
    fn test_rewind_restores_exact_position() {
        let mut c = cursor("a . b");
        let save = c.pos();
        c.advance();
        c.advance();
        c.rewind(save);
        assert!(matches!(c.peek_kind(), TokenKind::Identifier(n) if n == "a"));
    }

    #[test]
    fn test_eat_consumes_only_on_match() {
        let mut c = cursor(", x");
        assert!(!c.eat(&TokenKind::Dot));
        assert!(c.eat(&TokenKind::Comma));
        assert!(matches!(c.peek_kind(), TokenKind::Identifier(_)));
    }

    #[test]
    fn test_eat_any_keyword() {
        let mut c = cursor("REPLACE");
        let modes = [Keyword::Rollback, Keyword::Abort, Keyword::Replace];
        assert_eq!(c.eat_any_keyword(&modes), Some(Keyword::Replace));
        assert_eq!(c.eat_any_keyword(&modes), None);
    }

    #[test]
    fn test_expect_reports_offending_token() {
        let mut c = cursor("WHERE");
        let err = c.expect_keyword(Keyword::From).unwrap_err();
        assert!(matches!(err, ParseError::ExpectedToken { .. }));
        assert_eq!(err.span(), Span::new(0, 5));
    }

    #[test]
    fn test_span_from_covers_consumed_tokens() {
        let mut c = cursor("a . b");
        let start = c.pos();
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.span_from(start), TokenSpan::new(0, 2));
    }
}
