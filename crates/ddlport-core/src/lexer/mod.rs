//! MySQL lexer.
//!
//! A hand-written lexer for MySQL DDL that produces a stream of tokens.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
