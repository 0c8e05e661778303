//! Expression types used by column defaults and options.

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal in the signed 64-bit range.
    Integer(i64),
    /// Integer literal above `i64::MAX`.
    Unsigned(u64),
    /// Fixed-point literal, kept as written.
    Decimal(String),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    String(String),
    /// NULL literal.
    Null,
    /// Hex literal.
    Hex(Vec<u8>),
    /// Bit literal digits.
    Bit(String),
}

/// An expression appearing in a column definition.
///
/// Only the shapes MySQL allows in DDL are modelled; anything richer is
/// kept as its source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A function call such as `CURRENT_TIMESTAMP` or `uuid()`.
    Function {
        /// Function name as written, NOW-family names normalized.
        name: String,
        /// Call arguments.
        args: Vec<Expr>,
    },
    /// A bare column or keyword reference.
    Identifier(String),
    /// Any other expression, as source text.
    Raw(String),
}

impl Expr {
    /// Returns the string value if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Literal(Literal::String(s)) => Some(s),
            _ => None,
        }
    }
}
