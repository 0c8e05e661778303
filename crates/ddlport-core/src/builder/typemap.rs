//! MySQL to PostgreSQL column type mapping.

use crate::ast::{FieldType, TypeKind};

/// Maps a MySQL column type to its PostgreSQL spelling.
///
/// Returns `None` for types with no equivalent (TIME, YEAR, BIT, ENUM, SET
/// and the geometry family).
#[must_use]
pub fn map_type(field_type: &FieldType) -> Option<String> {
    let mapped = match field_type.kind {
        TypeKind::Tiny | TypeKind::Short => String::from("smallint"),
        TypeKind::Long => String::from("int"),
        TypeKind::Int24 | TypeKind::LongLong => String::from("bigint"),
        TypeKind::Float => String::from("real"),
        TypeKind::Double => String::from("double precision"),
        TypeKind::NewDecimal => match (field_type.length, field_type.decimals) {
            (None, _) => String::from("decimal"),
            (Some(precision), scale) => format!("decimal({precision},{})", scale.unwrap_or(0)),
        },
        TypeKind::String => format!("char({})", field_type.length.unwrap_or(1)),
        TypeKind::Varchar => match field_type.length {
            Some(length) => format!("varchar({length})"),
            None => String::from("varchar"),
        },
        TypeKind::Json => String::from("json"),
        TypeKind::TinyBlob | TypeKind::Blob | TypeKind::MediumBlob | TypeKind::LongBlob => {
            if field_type.binary {
                String::from("bytea")
            } else {
                String::from("text")
            }
        }
        TypeKind::VarString => String::from("text"),
        TypeKind::Timestamp | TypeKind::Datetime => String::from("timestamp(0)"),
        TypeKind::Date => String::from("date"),
        TypeKind::Duration
        | TypeKind::Year
        | TypeKind::Bit
        | TypeKind::Enum
        | TypeKind::Set
        | TypeKind::Geometry => return None,
    };
    Some(mapped)
}
