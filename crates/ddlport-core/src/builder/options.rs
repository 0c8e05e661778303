//! Column option resolution.

use crate::ast::{ColumnDef, ColumnOption, Expr, Literal};
use crate::error::{Result, TranslateError};

/// The normalized options of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// NOT NULL was given.
    pub not_null: bool,
    /// PRIMARY KEY or KEY was given at column level.
    ///
    /// MySQL reads a bare column-level `KEY` as `PRIMARY KEY`, not as an index.
    pub primary_key: bool,
    /// AUTO_INCREMENT was given.
    pub auto_increment: bool,
    /// Default in target syntax, or a function name.
    pub default: Option<String>,
    /// Literal COMMENT text.
    pub comment: Option<String>,
}

/// Resolves a column's options in source order; later options overwrite
/// earlier ones.
///
/// # Errors
///
/// Returns `UnsupportedDefaultExpression` for a function default on a column
/// that is not TIMESTAMP or DATETIME, and for any non-literal, non-function
/// default expression.
pub fn resolve_options(table: &str, column: &ColumnDef) -> Result<ResolvedOptions> {
    let mut resolved = ResolvedOptions::default();

    for (index, option) in column.options.iter().enumerate() {
        match option {
            ColumnOption::NotNull => resolved.not_null = true,
            ColumnOption::PrimaryKey => resolved.primary_key = true,
            ColumnOption::AutoIncrement => resolved.auto_increment = true,
            ColumnOption::Comment(expr) => {
                if let Some(text) = expr.as_str() {
                    resolved.comment = Some(text.to_string());
                }
            }
            ColumnOption::Default(Expr::Literal(literal)) => {
                if let Some(rendered) = render_literal(literal) {
                    resolved.default = Some(rendered);
                }
            }
            ColumnOption::Default(Expr::Function { name, .. })
                if column.field_type.kind.is_timestamp_like() =>
            {
                resolved.default = Some(name.clone());
            }
            ColumnOption::Default(_) => {
                return Err(TranslateError::UnsupportedDefaultExpression {
                    table: table.to_string(),
                    column: column.name.clone(),
                    index,
                });
            }
            ColumnOption::Null
            | ColumnOption::UniqueKey
            | ColumnOption::OnUpdate(_)
            | ColumnOption::Collate(_)
            | ColumnOption::Check(_)
            | ColumnOption::References { .. }
            | ColumnOption::Generated { .. } => {}
        }
    }

    Ok(resolved)
}

/// Renders a DEFAULT literal, or `None` for kinds that are not carried over.
///
/// Strings are quoted without escaping embedded quotes.
fn render_literal(literal: &Literal) -> Option<String> {
    match literal {
        Literal::Integer(i) => Some(i.to_string()),
        Literal::Unsigned(u) => Some(u.to_string()),
        Literal::Decimal(text) => Some(canonical_decimal(text)),
        Literal::String(s) => Some(format!("'{s}'")),
        Literal::Null | Literal::Float(_) | Literal::Hex(_) | Literal::Bit(_) => None,
    }
}

/// Normalizes a fixed-point literal: no redundant leading zeros, a zero
/// before a bare fraction, no sign on zero. Fractional digits are kept.
fn canonical_decimal(text: &str) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let is_zero = int_part == "0" && frac_part.chars().all(|c| c == '0');

    let mut out = String::new();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
