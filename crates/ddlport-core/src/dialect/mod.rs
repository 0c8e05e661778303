//! Dialect-specific DDL emission.
//!
//! An emitter serializes a finished [`SchemaModel`] into a script for one
//! target dialect. Each step returns an owned fragment; [`DdlEmitter::emit`]
//! joins the fragments with blank lines.

mod postgres;

pub use postgres::PostgresEmitter;

use crate::error::{Result, TranslateError};
use crate::schema::{Column, Constraint, SchemaModel, Table, Target};

/// Trait for dialect-specific DDL generation.
pub trait DdlEmitter {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Quotes a string literal.
    fn quote_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// Generates the body line for a column, without the trailing comma.
    fn column_definition(&self, column: &Column) -> String;

    /// Generates the body line for a constraint, or `None` if the constraint
    /// is not emitted inline.
    fn constraint_definition(&self, constraint: &Constraint) -> Option<String>;

    /// Generates the statements that follow a CREATE TABLE, such as comments.
    fn table_epilogue(&self, table: &Table) -> Vec<String>;

    /// Generates CREATE TABLE and its epilogue.
    fn create_table(&self, table: &Table) -> String {
        let mut sql = String::from("CREATE TABLE ");
        if table.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.quote_identifier(&table.name));
        sql.push_str("(\n");

        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();
        lines.extend(self.implied_primary_key(table));
        lines.extend(
            table
                .constraints
                .iter()
                .filter_map(|c| self.constraint_definition(c)),
        );
        if !lines.is_empty() {
            sql.push_str(&lines.join(",\n"));
            sql.push('\n');
        }
        sql.push_str(");");

        for statement in self.table_epilogue(table) {
            sql.push('\n');
            sql.push_str(&statement);
        }
        sql
    }

    /// Generates a PRIMARY KEY line for column-level keys when the table has
    /// no table-level PRIMARY KEY.
    fn implied_primary_key(&self, table: &Table) -> Option<String> {
        if table.has_primary_key_constraint() {
            return None;
        }
        let keys: Vec<String> = table
            .primary_key_columns()
            .map(|c| self.quote_identifier(&c.name))
            .collect();
        if keys.is_empty() {
            return None;
        }
        Some(format!("\tPRIMARY KEY ({})", keys.join(", ")))
    }

    /// Generates the section that attaches sequences to auto-increment keys.
    fn auto_increment_section(&self, model: &SchemaModel) -> Option<String>;

    /// Generates the section that creates plain indexes.
    fn index_section(&self, model: &SchemaModel) -> Option<String>;

    /// Generates the full script for a model.
    fn emit(&self, model: &SchemaModel) -> String {
        let mut sections: Vec<String> = model
            .create_tables
            .iter()
            .map(|t| self.create_table(t))
            .collect();
        sections.extend(self.auto_increment_section(model));
        sections.extend(self.index_section(model));
        sections.join("\n\n").trim().to_string()
    }
}

/// Returns the emitter for a target.
///
/// # Errors
///
/// Returns `UnsupportedTarget` for targets without an emitter.
pub fn emitter_for(target: Target) -> Result<Box<dyn DdlEmitter>> {
    match target.pg_version() {
        Some(version) => Ok(Box::new(PostgresEmitter::new(version))),
        None => Err(TranslateError::UnsupportedTarget(target.name().to_string())),
    }
}

/// Emits the script for a model using the emitter of its target.
///
/// # Errors
///
/// Returns `UnsupportedTarget` if the model's target has no emitter.
pub fn emit(model: &SchemaModel) -> Result<String> {
    let emitter = emitter_for(model.target)?;
    Ok(emitter.emit(model))
}
