//! # ddlport-core
//!
//! Translates MySQL schema definitions into PostgreSQL DDL.
//!
//! The pipeline has three stages:
//! - [`parser`]: a hand-written lexer and recursive descent parser that turn
//!   MySQL text into a statement tree
//! - [`builder`]: walks the statements and produces a dialect-neutral
//!   [`SchemaModel`] with mapped types and normalized options
//! - [`dialect`]: serializes the model for the selected [`Target`]
//!
//! ```rust
//! use ddlport_core::{Target, translate};
//!
//! let sql = translate("CREATE TABLE t (id INT NOT NULL);", Target::Postgres).unwrap();
//! assert_eq!(sql, "CREATE TABLE \"t\"(\n\t\"id\"\tint\tNOT NULL\n);");
//! ```
//!
//! Translation is all-or-nothing: the first unsupported construct aborts
//! with a [`TranslateError`] and no output.

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod schema;

pub use builder::{SchemaBuilder, build};
pub use dialect::{DdlEmitter, PostgresEmitter, emit, emitter_for};
pub use error::{Result, TranslateError};
pub use parser::{ParseError, Parser};
pub use schema::{PgVersion, SchemaModel, Target};

use tracing::{debug, warn};

/// Parses MySQL DDL and builds the schema model without emitting it.
///
/// # Errors
///
/// Returns the first parse or translation error.
pub fn translate_model(sql: &str, target: Target) -> Result<SchemaModel> {
    let statements = Parser::new(sql).parse_statements()?;
    debug!(statements = statements.len(), %target, "parsed input");
    build(&statements, target)
}

/// Translates MySQL DDL into a script for the given target.
///
/// # Errors
///
/// Returns `UnsupportedTarget` before parsing if the target has no emitter,
/// otherwise the first parse or translation error.
pub fn translate(sql: &str, target: Target) -> Result<String> {
    let emitter = emitter_for(target)?;
    let model = translate_model(sql, target)?;
    if !model.alter_tables.is_empty() {
        warn!(
            statements = model.alter_tables.len(),
            "ALTER TABLE changes were collected but are not emitted"
        );
    }
    Ok(emitter.emit(&model))
}
