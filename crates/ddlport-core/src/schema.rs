//! Schema model types.
//!
//! The model is the dialect-neutral result of walking the parsed statements:
//! tables with resolved target types, normalized column flags and classified
//! constraints. It is built once per input and handed to an emitter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Output dialect selected for a translation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// PostgreSQL before 9.5: every conditional creation is guarded.
    #[serde(rename = "postgresql-compatible")]
    PostgresCompatible,
    /// PostgreSQL 9.5 and later.
    #[serde(rename = "postgresql")]
    Postgres,
    /// Declared but not implemented.
    Oracle,
}

impl Target {
    /// Returns the selector name of the target.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PostgresCompatible => "postgresql-compatible",
            Self::Postgres => "postgresql",
            Self::Oracle => "oracle",
        }
    }

    /// Returns the PostgreSQL version whose idioms this target emits.
    #[must_use]
    pub const fn pg_version(&self) -> Option<PgVersion> {
        match self {
            Self::PostgresCompatible => Some(PgVersion::V9_4),
            Self::Postgres => Some(PgVersion::V9_5),
            Self::Oracle => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// PostgreSQL versions with distinct DDL idioms, in release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PgVersion {
    /// 9.4: no `CREATE INDEX IF NOT EXISTS`.
    V9_4,
    /// 9.5: `CREATE INDEX IF NOT EXISTS` available.
    V9_5,
}

impl PgVersion {
    /// Returns true if `CREATE INDEX IF NOT EXISTS` is available.
    #[must_use]
    pub fn has_create_index_if_not_exists(self) -> bool {
        self >= Self::V9_5
    }
}

impl fmt::Display for PgVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V9_4 => f.write_str("9.4"),
            Self::V9_5 => f.write_str("9.5"),
        }
    }
}

/// The kind of a normalized constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// PRIMARY KEY.
    PrimaryKey,
    /// UNIQUE.
    Unique,
    /// Plain INDEX or KEY.
    Index,
    /// FULLTEXT, SPATIAL, FOREIGN KEY and CHECK.
    Other,
}

/// A normalized table constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint or index name; empty when anonymous.
    pub name: String,
    /// Constraint kind.
    pub kind: ConstraintKind,
    /// Key column names in key order.
    pub keys: Vec<String>,
}

/// A column with its resolved target type and options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Target type, e.g. `varchar(20)`.
    pub data_type: String,
    /// Default value in target syntax, or a function name.
    pub default: Option<String>,
    /// NOT NULL.
    pub not_null: bool,
    /// Member of the primary key, from the column option or the table key.
    pub primary_key: bool,
    /// AUTO_INCREMENT.
    pub auto_increment: bool,
    /// Column comment.
    pub comment: Option<String>,
}

impl Column {
    /// Creates a nullable column with no options.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            default: None,
            not_null: false,
            primary_key: false,
            auto_increment: false,
            comment: None,
        }
    }

    /// Returns true if the column needs a sequence-backed default.
    #[must_use]
    pub const fn is_serial(&self) -> bool {
        self.primary_key && self.auto_increment
    }
}

/// A created table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Columns in declaration order.
    pub columns: Vec<Column>,
    /// Constraints in declaration order.
    pub constraints: Vec<Constraint>,
    /// Table comment.
    pub comment: Option<String>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_not_exists: false,
            columns: Vec::new(),
            constraints: Vec::new(),
            comment: None,
        }
    }

    /// Returns true if a table-level PRIMARY KEY constraint exists.
    #[must_use]
    pub fn has_primary_key_constraint(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| c.kind == ConstraintKind::PrimaryKey)
    }

    /// Returns the constraints of the given kind.
    pub fn constraints_of(&self, kind: ConstraintKind) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.kind == kind)
    }

    /// Returns the columns flagged as primary key members, in column order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }
}

/// A collected change to one column from ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ColumnChange {
    /// ADD COLUMN.
    Add {
        /// The added column.
        column: Column,
    },
    /// MODIFY COLUMN.
    Modify {
        /// The new definition.
        column: Column,
    },
    /// CHANGE COLUMN.
    Change {
        /// Name before the change.
        old_name: String,
        /// The new definition.
        column: Column,
    },
    /// DROP COLUMN.
    Drop {
        /// The dropped column.
        name: String,
    },
}

/// Column changes collected from one ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterTable {
    /// Altered table.
    pub table: String,
    /// Changes in source order.
    pub changes: Vec<ColumnChange>,
}

/// The translated schema of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Output dialect.
    pub target: Target,
    /// Created tables in statement order.
    pub create_tables: Vec<Table>,
    /// Collected ALTER TABLE changes in statement order.
    pub alter_tables: Vec<AlterTable>,
}

impl SchemaModel {
    /// Creates an empty model for the given target.
    #[must_use]
    pub const fn new(target: Target) -> Self {
        Self {
            target,
            create_tables: Vec::new(),
            alter_tables: Vec::new(),
        }
    }

    /// Returns every (table, column) pair that needs a sequence.
    pub fn serial_columns(&self) -> impl Iterator<Item = (&Table, &Column)> {
        self.create_tables.iter().flat_map(|table| {
            table
                .columns
                .iter()
                .filter(|c| c.is_serial())
                .map(move |c| (table, c))
        })
    }

    /// Returns every (table, index) pair, in table then declaration order.
    pub fn indexes(&self) -> impl Iterator<Item = (&Table, &Constraint)> {
        self.create_tables.iter().flat_map(|table| {
            table
                .constraints_of(ConstraintKind::Index)
                .map(move |c| (table, c))
        })
    }
}
