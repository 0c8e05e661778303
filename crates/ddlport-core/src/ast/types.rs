//! MySQL column type descriptors.

use core::fmt;

/// Storage class of a MySQL column type.
///
/// Several source spellings collapse to one kind: `INT` and `INTEGER` are
/// both [`TypeKind::Long`], `TEXT` and `BLOB` are both [`TypeKind::Blob`]
/// and differ only by the binary flag on [`FieldType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    // Integers
    /// TINYINT, BOOL, BOOLEAN.
    Tiny,
    /// SMALLINT.
    Short,
    /// MEDIUMINT.
    Int24,
    /// INT, INTEGER.
    Long,
    /// BIGINT.
    LongLong,

    // Approximate and fixed-point numbers
    /// FLOAT.
    Float,
    /// DOUBLE, DOUBLE PRECISION, REAL.
    Double,
    /// DECIMAL, NUMERIC, DEC, FIXED.
    NewDecimal,

    // Strings
    /// CHAR, BINARY.
    String,
    /// VARCHAR, VARBINARY.
    Varchar,
    /// Legacy variable-length string.
    VarString,
    /// JSON.
    Json,
    /// TINYTEXT, TINYBLOB.
    TinyBlob,
    /// TEXT, BLOB.
    Blob,
    /// MEDIUMTEXT, MEDIUMBLOB.
    MediumBlob,
    /// LONGTEXT, LONGBLOB.
    LongBlob,

    // Temporal
    /// TIMESTAMP.
    Timestamp,
    /// DATETIME.
    Datetime,
    /// DATE.
    Date,
    /// TIME.
    Duration,
    /// YEAR.
    Year,

    // Other
    /// BIT.
    Bit,
    /// ENUM.
    Enum,
    /// SET.
    Set,
    /// GEOMETRY, POINT, LINESTRING, POLYGON and the multi/collection forms.
    Geometry,
}

impl TypeKind {
    /// Returns true for TIMESTAMP and DATETIME.
    #[must_use]
    pub const fn is_timestamp_like(&self) -> bool {
        matches!(self, Self::Timestamp | Self::Datetime)
    }
}

/// A column type as written in MySQL, after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    /// The storage class.
    pub kind: TypeKind,
    /// Display width, character length or decimal precision.
    pub length: Option<u32>,
    /// Decimal scale or fractional seconds precision.
    pub decimals: Option<u32>,
    /// Set for BINARY, VARBINARY and the BLOB family.
    pub binary: bool,
    /// UNSIGNED attribute.
    pub unsigned: bool,
    /// ZEROFILL attribute.
    pub zerofill: bool,
    /// CHARACTER SET attribute.
    pub charset: Option<String>,
    /// COLLATE attribute.
    pub collate: Option<String>,
    /// ENUM or SET members.
    pub elements: Vec<String>,
}

impl FieldType {
    /// Creates a type of the given kind with no attributes.
    #[must_use]
    pub const fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            length: None,
            decimals: None,
            binary: false,
            unsigned: false,
            zerofill: false,
            charset: None,
            collate: None,
            elements: Vec::new(),
        }
    }

    /// Sets the length.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the decimals.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Marks the type as binary.
    #[must_use]
    pub const fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    /// Returns the MySQL name of the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match (self.kind, self.binary) {
            (TypeKind::Tiny, _) => "TINYINT",
            (TypeKind::Short, _) => "SMALLINT",
            (TypeKind::Int24, _) => "MEDIUMINT",
            (TypeKind::Long, _) => "INT",
            (TypeKind::LongLong, _) => "BIGINT",
            (TypeKind::Float, _) => "FLOAT",
            (TypeKind::Double, _) => "DOUBLE",
            (TypeKind::NewDecimal, _) => "DECIMAL",
            (TypeKind::String, false) => "CHAR",
            (TypeKind::String, true) => "BINARY",
            (TypeKind::Varchar, false) => "VARCHAR",
            (TypeKind::Varchar, true) => "VARBINARY",
            (TypeKind::VarString, _) => "VAR_STRING",
            (TypeKind::Json, _) => "JSON",
            (TypeKind::TinyBlob, false) => "TINYTEXT",
            (TypeKind::TinyBlob, true) => "TINYBLOB",
            (TypeKind::Blob, false) => "TEXT",
            (TypeKind::Blob, true) => "BLOB",
            (TypeKind::MediumBlob, false) => "MEDIUMTEXT",
            (TypeKind::MediumBlob, true) => "MEDIUMBLOB",
            (TypeKind::LongBlob, false) => "LONGTEXT",
            (TypeKind::LongBlob, true) => "LONGBLOB",
            (TypeKind::Timestamp, _) => "TIMESTAMP",
            (TypeKind::Datetime, _) => "DATETIME",
            (TypeKind::Date, _) => "DATE",
            (TypeKind::Duration, _) => "TIME",
            (TypeKind::Year, _) => "YEAR",
            (TypeKind::Bit, _) => "BIT",
            (TypeKind::Enum, _) => "ENUM",
            (TypeKind::Set, _) => "SET",
            (TypeKind::Geometry, _) => "GEOMETRY",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if !self.elements.is_empty() {
            let members: Vec<String> = self.elements.iter().map(|e| format!("'{e}'")).collect();
            return write!(f, "({})", members.join(","));
        }
        match (self.length, self.decimals) {
            (Some(len), Some(dec)) => write!(f, "({len},{dec})")?,
            (Some(len), None) => write!(f, "({len})")?,
            (None, Some(dec)) if self.kind.is_timestamp_like() => write!(f, "({dec})")?,
            _ => {}
        }
        if self.unsigned {
            f.write_str(" UNSIGNED")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        assert_eq!(FieldType::new(TypeKind::Long).to_string(), "INT");
        assert_eq!(FieldType::new(TypeKind::Blob).binary().to_string(), "BLOB");
        assert_eq!(FieldType::new(TypeKind::Blob).to_string(), "TEXT");
    }

    #[test]
    fn test_display_with_modifiers() {
        let dec = FieldType::new(TypeKind::NewDecimal)
            .with_length(10)
            .with_decimals(2);
        assert_eq!(dec.to_string(), "DECIMAL(10,2)");

        let mut big = FieldType::new(TypeKind::LongLong).with_length(20);
        big.unsigned = true;
        assert_eq!(big.to_string(), "BIGINT(20) UNSIGNED");

        let mut e = FieldType::new(TypeKind::Enum);
        e.elements = vec![String::from("a"), String::from("b")];
        assert_eq!(e.to_string(), "ENUM('a','b')");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TypeKind::Datetime.is_timestamp_like());
        assert!(!TypeKind::Date.is_timestamp_like());
    }
}
