//! MySQL DDL parser.
//!
//! A hand-written recursive descent parser over the token stream of
//! [`crate::lexer::Lexer`].

mod error;
mod parser;

pub use error::ParseError;
pub use parser::Parser;
