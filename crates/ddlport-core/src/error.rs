//! Error types for schema translation.

use crate::parser::ParseError;

/// Errors that abort a translation. No output is produced when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The input failed to lex or parse.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A column type has no target equivalent.
    #[error("Column {table}.{column} has type {type_name}, which has no PostgreSQL equivalent")]
    UnsupportedType {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Source type as written.
        type_name: String,
    },

    /// A DEFAULT expression cannot be carried over.
    #[error("Column {table}.{column}: option {index} has a default expression PostgreSQL cannot use")]
    UnsupportedDefaultExpression {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Position of the DEFAULT in the column's option list.
        index: usize,
    },

    /// An ALTER TABLE specification outside the supported column changes.
    #[error("ALTER TABLE {table}: {spec} is not supported")]
    UnsupportedAlterSpec {
        /// Table name.
        table: String,
        /// Specification kind, e.g. `RENAME TABLE`.
        spec: String,
    },

    /// The selected target dialect has no emitter.
    #[error("Target '{0}' is not supported")]
    UnsupportedTarget(String),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;
