//! Schema model construction.
//!
//! Walks parsed statements and accumulates a [`SchemaModel`]: each column
//! type goes through [`map_type`], each option list through
//! [`resolve_options`] and each table constraint through [`classify`].

mod constraints;
mod options;
mod typemap;

pub use constraints::{classify, propagate_primary_key};
pub use options::{ResolvedOptions, resolve_options};
pub use typemap::map_type;

use tracing::{debug, trace};

use crate::ast::{AlterSpec, AlterTableStatement, ColumnDef, CreateTableStatement, Statement};
use crate::error::{Result, TranslateError};
use crate::schema::{AlterTable, Column, ColumnChange, SchemaModel, Table, Target};

/// Accumulates statements into a schema model.
#[derive(Debug)]
pub struct SchemaBuilder {
    model: SchemaModel,
}

impl SchemaBuilder {
    /// Creates a builder for the given target.
    #[must_use]
    pub const fn new(target: Target) -> Self {
        Self {
            model: SchemaModel::new(target),
        }
    }

    /// Adds one statement to the model.
    ///
    /// # Errors
    ///
    /// Returns the first unsupported type, default expression or ALTER TABLE
    /// specification found in the statement.
    pub fn add_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::CreateTable(create) => {
                let table = build_table(create)?;
                debug!(
                    table = %table.name,
                    columns = table.columns.len(),
                    constraints = table.constraints.len(),
                    "built table"
                );
                self.model.create_tables.push(table);
            }
            Statement::AlterTable(alter) => {
                let alter = build_alter_table(alter)?;
                debug!(table = %alter.table, changes = alter.changes.len(), "collected ALTER TABLE");
                self.model.alter_tables.push(alter);
            }
            Statement::Other { keyword } => {
                debug!(%keyword, "skipping statement");
            }
        }
        Ok(())
    }

    /// Returns the finished model.
    #[must_use]
    pub fn finish(self) -> SchemaModel {
        self.model
    }
}

/// Builds a schema model from parsed statements.
///
/// # Errors
///
/// Returns the first error raised by any statement; nothing is kept.
pub fn build(statements: &[Statement], target: Target) -> Result<SchemaModel> {
    let mut builder = SchemaBuilder::new(target);
    for statement in statements {
        builder.add_statement(statement)?;
    }
    Ok(builder.finish())
}

fn build_table(create: &CreateTableStatement) -> Result<Table> {
    let mut table = Table::new(create.name.clone());
    table.if_not_exists = create.if_not_exists;
    table.comment = create.comment().map(String::from);

    for def in &create.columns {
        table.columns.push(build_column(&create.name, def)?);
    }

    for raw in &create.constraints {
        let constraint = classify(raw);
        propagate_primary_key(&mut table.columns, &constraint);
        table.constraints.push(constraint);
    }

    Ok(table)
}

fn build_column(table: &str, def: &ColumnDef) -> Result<Column> {
    let data_type =
        map_type(&def.field_type).ok_or_else(|| TranslateError::UnsupportedType {
            table: table.to_string(),
            column: def.name.clone(),
            type_name: def.field_type.to_string(),
        })?;
    let options = resolve_options(table, def)?;
    trace!(table, column = %def.name, %data_type, "mapped column");

    Ok(Column {
        name: def.name.clone(),
        data_type,
        default: options.default,
        not_null: options.not_null,
        primary_key: options.primary_key,
        auto_increment: options.auto_increment,
        comment: options.comment,
    })
}

fn build_alter_table(alter: &AlterTableStatement) -> Result<AlterTable> {
    let table = alter.name.as_str();
    let mut changes = vec![];

    for spec in &alter.specs {
        match spec {
            AlterSpec::AddColumns { columns, .. } => {
                for def in columns {
                    changes.push(ColumnChange::Add {
                        column: build_column(table, def)?,
                    });
                }
            }
            AlterSpec::ModifyColumn { column, .. } => changes.push(ColumnChange::Modify {
                column: build_column(table, column)?,
            }),
            AlterSpec::ChangeColumn {
                old_name, column, ..
            } => changes.push(ColumnChange::Change {
                old_name: old_name.clone(),
                column: build_column(table, column)?,
            }),
            AlterSpec::DropColumn(name) => changes.push(ColumnChange::Drop { name: name.clone() }),
            other => {
                return Err(TranslateError::UnsupportedAlterSpec {
                    table: table.to_string(),
                    spec: other.kind_name().to_string(),
                });
            }
        }
    }

    Ok(AlterTable {
        table: table.to_string(),
        changes,
    })
}
