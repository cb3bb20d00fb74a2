//! # flint-sql-core
//!
//! The statement-grammar layer of a SQL front end: a hand-written
//! recursive descent parser that turns a token stream into a typed AST
//! for the data-manipulation statements SELECT, DELETE, and UPDATE.
//!
//! Every AST node carries a token span covering exactly the tokens it
//! was built from, so downstream tooling can render precise
//! diagnostics. Parsing is purely sequential and side-effect-free
//! except for error signaling: a parse either completes or fails
//! synchronously, with no recovery and no partial ASTs.
//!
//! ```rust
//! use flint_sql_core::ast::{JoinOperator, Queryable, Statement};
//! use flint_sql_core::Parser;
//!
//! let stmt = Parser::new("SELECT a FROM x LEFT OUTER JOIN y USING (id)")
//!     .parse_statement()
//!     .unwrap();
//!
//! let Statement::Select(select) = stmt else { unreachable!() };
//! let Queryable::Join(chain) = &select.from[0] else { unreachable!() };
//! assert_eq!(chain.joins[0].operator, JoinOperator::LeftOuter);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Statement, TokenSpan};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};
