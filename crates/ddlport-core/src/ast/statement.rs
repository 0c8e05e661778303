//! DDL statement types.

use super::expression::Expr;
use super::types::FieldType;

/// A parsed top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// CREATE TABLE.
    CreateTable(CreateTableStatement),
    /// ALTER TABLE.
    AlterTable(AlterTableStatement),
    /// Any other statement, skipped by the parser.
    Other {
        /// The leading word of the statement, uppercased.
        keyword: String,
    },
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    /// Table name, without any schema qualifier.
    pub name: String,
    /// TEMPORARY table.
    pub temporary: bool,
    /// IF NOT EXISTS clause.
    pub if_not_exists: bool,
    /// Column definitions in declaration order.
    pub columns: Vec<ColumnDef>,
    /// Table-level constraints and indexes in declaration order.
    pub constraints: Vec<TableConstraint>,
    /// Table options following the closing parenthesis.
    pub options: Vec<TableOption>,
}

impl CreateTableStatement {
    /// Returns the table COMMENT option, if any. The last one wins.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.options.iter().rev().find_map(|opt| match opt {
            TableOption::Comment(text) => Some(text.as_str()),
            TableOption::Other { .. } => None,
        })
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Declared type.
    pub field_type: FieldType,
    /// Column options in source order.
    pub options: Vec<ColumnOption>,
}

/// A column-level option.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnOption {
    /// NOT NULL.
    NotNull,
    /// NULL.
    Null,
    /// DEFAULT expr.
    Default(Expr),
    /// AUTO_INCREMENT.
    AutoIncrement,
    /// PRIMARY KEY, or a bare KEY at column level.
    PrimaryKey,
    /// UNIQUE [KEY].
    UniqueKey,
    /// COMMENT expr.
    Comment(Expr),
    /// ON UPDATE expr.
    OnUpdate(Expr),
    /// COLLATE name.
    Collate(String),
    /// CHECK (expr), as source text.
    Check(String),
    /// REFERENCES table (columns).
    References {
        /// Referenced table.
        table: String,
        /// Referenced columns.
        columns: Vec<String>,
    },
    /// [GENERATED ALWAYS] AS (expr) [VIRTUAL | STORED].
    Generated {
        /// Generation expression, as source text.
        expr: String,
        /// STORED rather than VIRTUAL.
        stored: bool,
    },
}

/// One column of an index or key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPart {
    /// Column name.
    pub column: String,
    /// Prefix length.
    pub length: Option<u32>,
    /// DESC ordering.
    pub descending: bool,
}

impl KeyPart {
    /// Creates a key part over a whole column.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            length: None,
            descending: false,
        }
    }
}

/// The kind of a table-level constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintType {
    /// PRIMARY KEY.
    PrimaryKey,
    /// UNIQUE [INDEX | KEY].
    Unique,
    /// INDEX or KEY.
    Index,
    /// FULLTEXT [INDEX | KEY].
    Fulltext,
    /// SPATIAL [INDEX | KEY].
    Spatial,
    /// FOREIGN KEY ... REFERENCES.
    ForeignKey {
        /// Referenced table.
        table: String,
        /// Referenced columns.
        columns: Vec<String>,
    },
    /// CHECK (expr), as source text.
    Check(String),
}

/// A table-level constraint or index definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    /// Index name, falling back to the CONSTRAINT symbol.
    pub name: Option<String>,
    /// Constraint kind.
    pub kind: ConstraintType,
    /// Key columns in declaration order.
    pub keys: Vec<KeyPart>,
}

/// A table option such as `ENGINE=InnoDB` or `COMMENT='...'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOption {
    /// COMMENT [=] 'text'.
    Comment(String),
    /// Any other option, with its value as written.
    Other {
        /// Option name, uppercased.
        name: String,
        /// Option value.
        value: String,
    },
}

/// Where an added or redefined column is placed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnPosition {
    /// No position clause.
    #[default]
    Unspecified,
    /// FIRST.
    First,
    /// AFTER column.
    After(String),
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableStatement {
    /// Table name, without any schema qualifier.
    pub name: String,
    /// Alter specifications in source order.
    pub specs: Vec<AlterSpec>,
}

/// One comma-separated ALTER TABLE specification.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterSpec {
    /// ADD [COLUMN] def or ADD [COLUMN] (def, ...).
    AddColumns {
        /// The added columns.
        columns: Vec<ColumnDef>,
        /// Position clause.
        position: ColumnPosition,
    },
    /// ADD constraint.
    AddConstraint(TableConstraint),
    /// MODIFY [COLUMN] def.
    ModifyColumn {
        /// The new definition.
        column: ColumnDef,
        /// Position clause.
        position: ColumnPosition,
    },
    /// CHANGE [COLUMN] old def.
    ChangeColumn {
        /// Name before the change.
        old_name: String,
        /// The new definition.
        column: ColumnDef,
        /// Position clause.
        position: ColumnPosition,
    },
    /// DROP [COLUMN] name.
    DropColumn(String),
    /// DROP INDEX|KEY name.
    DropIndex(String),
    /// DROP PRIMARY KEY.
    DropPrimaryKey,
    /// DROP FOREIGN KEY name.
    DropForeignKey(String),
    /// RENAME [TO | AS] name.
    RenameTable(String),
    /// RENAME COLUMN old TO new.
    RenameColumn {
        /// Current name.
        old_name: String,
        /// New name.
        new_name: String,
    },
    /// ALTER [COLUMN] name SET DEFAULT expr | DROP DEFAULT.
    AlterColumnDefault {
        /// Column name.
        name: String,
        /// New default, `None` for DROP DEFAULT.
        default: Option<Expr>,
    },
    /// Table options.
    Options(Vec<TableOption>),
}

impl AlterSpec {
    /// Returns the SQL keywords that introduce this specification.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::AddColumns { .. } => "ADD COLUMN",
            Self::AddConstraint(_) => "ADD CONSTRAINT",
            Self::ModifyColumn { .. } => "MODIFY COLUMN",
            Self::ChangeColumn { .. } => "CHANGE COLUMN",
            Self::DropColumn(_) => "DROP COLUMN",
            Self::DropIndex(_) => "DROP INDEX",
            Self::DropPrimaryKey => "DROP PRIMARY KEY",
            Self::DropForeignKey(_) => "DROP FOREIGN KEY",
            Self::RenameTable(_) => "RENAME TABLE",
            Self::RenameColumn { .. } => "RENAME COLUMN",
            Self::AlterColumnDefault { .. } => "ALTER COLUMN",
            Self::Options(_) => "TABLE OPTIONS",
        }
    }
}
