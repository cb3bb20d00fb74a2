//! Token types for the SQL lexer.

use super::Span;

/// SQL keywords recognized by the statement grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // SELECT core
    Select,
    Distinct,
    All,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Limit,
    Offset,

    // Joins
    Join,
    Natural,
    Left,
    Inner,
    Cross,
    Outer,
    On,
    Using,

    // DML
    Delete,
    Update,
    Set,

    // Conflict resolution (UPDATE OR <mode>)
    Rollback,
    Abort,
    Replace,
    Fail,
    Ignore,

    // Expression operators
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Is,
    Null,

    // Aliasing
    As,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "JOIN" => Some(Self::Join),
            "NATURAL" => Some(Self::Natural),
            "LEFT" => Some(Self::Left),
            "INNER" => Some(Self::Inner),
            "CROSS" => Some(Self::Cross),
            "OUTER" => Some(Self::Outer),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "DELETE" => Some(Self::Delete),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "ROLLBACK" => Some(Self::Rollback),
            "ABORT" => Some(Self::Abort),
            "REPLACE" => Some(Self::Replace),
            "FAIL" => Some(Self::Fail),
            "IGNORE" => Some(Self::Ignore),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "AS" => Some(Self::As),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Join => "JOIN",
            Self::Natural => "NATURAL",
            Self::Left => "LEFT",
            Self::Inner => "INNER",
            Self::Cross => "CROSS",
            Self::Outer => "OUTER",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Delete => "DELETE",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Rollback => "ROLLBACK",
            Self::Abort => "ABORT",
            Self::Replace => "REPLACE",
            Self::Fail => "FAIL",
            Self::Ignore => "IGNORE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::As => "AS",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Float literal (e.g., 3.14)
    Float(f64),
    /// String literal (e.g., 'hello')
    String(String),

    // Identifiers and keywords
    /// Identifier (e.g., column_name)
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("NaTuRaL"), Some(Keyword::Natural));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_as_str_round_trip() {
        for kw in [
            Keyword::Select,
            Keyword::Natural,
            Keyword::Outer,
            Keyword::Rollback,
            Keyword::Between,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
    }
}
