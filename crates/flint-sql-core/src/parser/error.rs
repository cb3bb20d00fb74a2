//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, Token, TokenKind};

/// A parse error.
///
/// Every failure aborts the enclosing statement parse immediately; no
/// recovery or partial ASTs. The span is the byte range of the offending
/// token so callers can render a precise diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A required keyword, symbol, or identifier was absent.
    #[error("expected {expected}, found {found:?} at {span}")]
    ExpectedToken {
        /// What the grammar required here.
        expected: String,
        /// The token actually found.
        found: TokenKind,
        /// Byte span of the offending token.
        span: Span,
    },

    /// A higher-level construct could not be formed at all.
    #[error("expected {construct}, found {found:?} at {span}")]
    ExpectedConstruct {
        /// The construct the grammar required here.
        construct: String,
        /// The token actually found.
        found: TokenKind,
        /// Byte span of the offending token.
        span: Span,
    },
}

impl ParseError {
    /// Creates an expected-token error at the given token.
    #[must_use]
    pub fn expected_token(expected: impl Into<String>, found: &Token) -> Self {
        Self::ExpectedToken {
            expected: expected.into(),
            found: found.kind.clone(),
            span: found.span,
        }
    }

    /// Creates an expected-construct error at the given token.
    #[must_use]
    pub fn expected_construct(construct: impl Into<String>, found: &Token) -> Self {
        Self::ExpectedConstruct {
            construct: construct.into(),
            found: found.kind.clone(),
            span: found.span,
        }
    }

    /// Returns the byte span of the offending token.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::ExpectedToken { span, .. } | Self::ExpectedConstruct { span, .. } => *span,
        }
    }
}
