//! Statement tree produced by the MySQL DDL parser.

mod expression;
mod statement;
mod types;

pub use expression::{Expr, Literal};
pub use statement::{
    AlterSpec, AlterTableStatement, ColumnDef, ColumnOption, ColumnPosition, ConstraintType,
    CreateTableStatement, KeyPart, Statement, TableConstraint, TableOption,
};
pub use types::{FieldType, TypeKind};
