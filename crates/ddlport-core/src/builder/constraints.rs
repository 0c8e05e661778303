//! Table constraint classification.

use crate::ast::{ConstraintType, TableConstraint};
use crate::schema::{Column, Constraint, ConstraintKind};

/// Normalizes a parsed table constraint.
#[must_use]
pub fn classify(constraint: &TableConstraint) -> Constraint {
    let kind = match constraint.kind {
        ConstraintType::PrimaryKey => ConstraintKind::PrimaryKey,
        ConstraintType::Unique => ConstraintKind::Unique,
        ConstraintType::Index => ConstraintKind::Index,
        ConstraintType::Fulltext
        | ConstraintType::Spatial
        | ConstraintType::ForeignKey { .. }
        | ConstraintType::Check(_) => ConstraintKind::Other,
    };
    Constraint {
        name: constraint.name.clone().unwrap_or_default(),
        kind,
        keys: constraint.keys.iter().map(|k| k.column.clone()).collect(),
    }
}

/// Marks primary key membership from a table-level PRIMARY KEY.
///
/// Only the first column, in column order, that matches any key is marked;
/// the scan stops there.
pub fn propagate_primary_key(columns: &mut [Column], constraint: &Constraint) {
    if constraint.kind != ConstraintKind::PrimaryKey {
        return;
    }
    if let Some(column) = columns
        .iter_mut()
        .find(|c| constraint.keys.iter().any(|k| *k == c.name))
    {
        column.primary_key = true;
    }
}
