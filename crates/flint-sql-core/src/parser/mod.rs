//! SQL statement parser
//!
//! A hand-written recursive descent parser with Pratt expression
//! parsing. The grammar routines are grouped by concern: result
//! columns, FROM sources and joins, trailing clauses, and statement
//! assembly, all driving a single token [`Cursor`].

mod clause;
mod columns;
mod cursor;
mod error;
mod expr;
mod pratt;
mod source;
mod statement;

pub use cursor::Cursor;
pub use error::ParseError;

use crate::lexer::{Lexer, Token};

/// SQL statement parser.
///
/// The parser owns the cursor position exclusively; nested parse calls
/// receive and may rewind the same position. A parse either completes
/// or fails synchronously with a [`ParseError`].
pub struct Parser {
    pub(crate) cursor: Cursor,
}

impl Parser {
    /// Creates a parser for the given SQL text, tokenizing it first.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::from_tokens(Lexer::new(input).tokenize())
    }

    /// Creates a parser over a pre-tokenized sequence.
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }
}
