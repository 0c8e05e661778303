//! Token types for the MySQL lexer.

use super::Span;

/// Keywords that carry structure in MySQL DDL.
///
/// Data type names, engine names and other contextual words are lexed as
/// plain identifiers and matched by text in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Statements
    Create,
    Alter,
    Table,
    Temporary,
    If,
    Not,
    Exists,
    Like,
    As,

    // Column options
    Null,
    Default,
    AutoIncrement,
    Comment,
    On,
    Update,
    Delete,
    Collate,
    Character,
    Charset,
    Set,
    Generated,
    Always,
    True,
    False,

    // Keys and constraints
    Primary,
    Key,
    Index,
    Unique,
    Constraint,
    Foreign,
    References,
    Check,
    Fulltext,
    Spatial,
    Using,

    // ALTER TABLE
    Add,
    Modify,
    Change,
    Drop,
    Column,
    Rename,
    To,
    First,
    After,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Some(Self::Create),
            "ALTER" => Some(Self::Alter),
            "TABLE" => Some(Self::Table),
            "TEMPORARY" => Some(Self::Temporary),
            "IF" => Some(Self::If),
            "NOT" => Some(Self::Not),
            "EXISTS" => Some(Self::Exists),
            "LIKE" => Some(Self::Like),
            "AS" => Some(Self::As),
            "NULL" => Some(Self::Null),
            "DEFAULT" => Some(Self::Default),
            "AUTO_INCREMENT" => Some(Self::AutoIncrement),
            "COMMENT" => Some(Self::Comment),
            "ON" => Some(Self::On),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "COLLATE" => Some(Self::Collate),
            "CHARACTER" => Some(Self::Character),
            "CHARSET" => Some(Self::Charset),
            "SET" => Some(Self::Set),
            "GENERATED" => Some(Self::Generated),
            "ALWAYS" => Some(Self::Always),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "INDEX" => Some(Self::Index),
            "UNIQUE" => Some(Self::Unique),
            "CONSTRAINT" => Some(Self::Constraint),
            "FOREIGN" => Some(Self::Foreign),
            "REFERENCES" => Some(Self::References),
            "CHECK" => Some(Self::Check),
            "FULLTEXT" => Some(Self::Fulltext),
            "SPATIAL" => Some(Self::Spatial),
            "USING" => Some(Self::Using),
            "ADD" => Some(Self::Add),
            "MODIFY" => Some(Self::Modify),
            "CHANGE" => Some(Self::Change),
            "DROP" => Some(Self::Drop),
            "COLUMN" => Some(Self::Column),
            "RENAME" => Some(Self::Rename),
            "TO" => Some(Self::To),
            "FIRST" => Some(Self::First),
            "AFTER" => Some(Self::After),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::Table => "TABLE",
            Self::Temporary => "TEMPORARY",
            Self::If => "IF",
            Self::Not => "NOT",
            Self::Exists => "EXISTS",
            Self::Like => "LIKE",
            Self::As => "AS",
            Self::Null => "NULL",
            Self::Default => "DEFAULT",
            Self::AutoIncrement => "AUTO_INCREMENT",
            Self::Comment => "COMMENT",
            Self::On => "ON",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Collate => "COLLATE",
            Self::Character => "CHARACTER",
            Self::Charset => "CHARSET",
            Self::Set => "SET",
            Self::Generated => "GENERATED",
            Self::Always => "ALWAYS",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Index => "INDEX",
            Self::Unique => "UNIQUE",
            Self::Constraint => "CONSTRAINT",
            Self::Foreign => "FOREIGN",
            Self::References => "REFERENCES",
            Self::Check => "CHECK",
            Self::Fulltext => "FULLTEXT",
            Self::Spatial => "SPATIAL",
            Self::Using => "USING",
            Self::Add => "ADD",
            Self::Modify => "MODIFY",
            Self::Change => "CHANGE",
            Self::Drop => "DROP",
            Self::Column => "COLUMN",
            Self::Rename => "RENAME",
            Self::To => "TO",
            Self::First => "FIRST",
            Self::After => "AFTER",
        }
    }

    /// Returns true if MySQL refuses this keyword as an unquoted identifier.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Temporary
                | Self::Comment
                | Self::AutoIncrement
                | Self::Charset
                | Self::Always
                | Self::Modify
                | Self::First
                | Self::After
        )
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal in the signed 64-bit range (e.g., 42)
    Integer(i64),
    /// Integer literal above `i64::MAX` (e.g., 18446744073709551615)
    Unsigned(u64),
    /// Fixed-point literal, kept as written (e.g., 3.50)
    Decimal(String),
    /// Floating point literal with an exponent (e.g., 1e10)
    Float(f64),
    /// String literal, escapes resolved (e.g., 'hello' or "hello")
    String(String),
    /// Hex literal (e.g., X'0A1B')
    HexString(Vec<u8>),
    /// Bit literal digits (e.g., b'101')
    BitString(String),

    // Identifiers and keywords
    /// Bare identifier (e.g., column_name)
    Identifier(String),
    /// Backtick-quoted identifier (e.g., `order`)
    QuotedIdentifier(String),
    /// Structural keyword
    Keyword(Keyword),

    // Punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// =
    Eq,
    /// +
    Plus,
    /// -
    Minus,
    /// Any other single character, kept so skipped statements still lex
    Symbol(char),

    // Special
    /// End of input
    Eof,
    /// Lexing failure
    Error(String),
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
