//! MySQL DDL parser implementation.

use super::error::ParseError;
use crate::ast::{
    AlterSpec, AlterTableStatement, ColumnDef, ColumnOption, ColumnPosition, ConstraintType,
    CreateTableStatement, Expr, FieldType, KeyPart, Literal, Statement, TableConstraint,
    TableOption, TypeKind,
};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Functions MySQL accepts without parentheses in a DEFAULT clause.
const NILADIC_FUNCTIONS: &[&str] = &[
    "CURRENT_TIMESTAMP",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_USER",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "UTC_DATE",
    "UTC_TIME",
    "UTC_TIMESTAMP",
];

/// MySQL DDL parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    previous: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            previous: Token::new(TokenKind::Eof, Span::new(0, 0)),
        }
    }

    /// Parses every `;`-separated statement in the input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError`, with line and column resolved, for the first
    /// statement that fails to lex or parse.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let input = self.lexer.input();
        self.parse_all().map_err(|e| e.locate(input))
    }

    fn parse_all(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = vec![];
        loop {
            while self.check(&TokenKind::Semicolon) {
                self.advance();
            }
            if self.current.is_eof() {
                break;
            }
            statements.push(self.parse_statement()?);
            if !self.check(&TokenKind::Semicolon) && !self.current.is_eof() {
                return Err(self.unexpected("';'"));
            }
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if a CREATE TABLE or ALTER TABLE statement is
    /// malformed, or if any statement fails to lex.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match &self.current.kind {
            TokenKind::Keyword(Keyword::Create) => {
                self.advance();
                let temporary = self.check_keyword(Keyword::Temporary);
                if temporary {
                    self.advance();
                }
                if temporary || self.check_keyword(Keyword::Table) {
                    Ok(Statement::CreateTable(self.parse_create_table(temporary)?))
                } else {
                    self.skip_statement(String::from("CREATE"))
                }
            }
            TokenKind::Keyword(Keyword::Alter) => {
                self.advance();
                while self.check_word("ONLINE") || self.check_word("IGNORE") {
                    self.advance();
                }
                if self.check_keyword(Keyword::Table) {
                    Ok(Statement::AlterTable(self.parse_alter_table()?))
                } else {
                    self.skip_statement(String::from("ALTER"))
                }
            }
            TokenKind::Error(_) => Err(self.unexpected("statement")),
            _ => {
                let keyword = self.token_text(&self.current).to_ascii_uppercase();
                self.advance();
                self.skip_statement(keyword)
            }
        }
    }

    /// Skips to the terminating `;` of a statement the parser does not model.
    fn skip_statement(&mut self, keyword: String) -> Result<Statement, ParseError> {
        while !self.check(&TokenKind::Semicolon) && !self.current.is_eof() {
            if matches!(self.current.kind, TokenKind::Error(_)) {
                return Err(self.unexpected("';'"));
            }
            self.advance();
        }
        Ok(Statement::Other { keyword })
    }

    // ------------------------------------------------------------------
    // CREATE TABLE
    // ------------------------------------------------------------------

    fn parse_create_table(&mut self, temporary: bool) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Table)?;
        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_qualified_name()?;

        if self.check_keyword(Keyword::Like) {
            return Err(ParseError::new(
                "CREATE TABLE ... LIKE is not supported",
                self.current.span,
            ));
        }

        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![];
        let mut constraints = vec![];
        loop {
            if self.at_constraint_start() {
                constraints.push(self.parse_table_constraint()?);
            } else {
                columns.push(self.parse_column_def()?);
            }
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::RightParen)?;

        let options = self.parse_table_options(true)?;

        Ok(CreateTableStatement {
            name,
            temporary,
            if_not_exists,
            columns,
            constraints,
            options,
        })
    }

    fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
        if !self.check_keyword(Keyword::If) {
            return Ok(false);
        }
        self.advance();
        self.expect_keyword(Keyword::Not)?;
        self.expect_keyword(Keyword::Exists)?;
        Ok(true)
    }

    /// Returns true if the current token opens a table-level constraint.
    fn at_constraint_start(&self) -> bool {
        matches!(
            self.current.as_keyword(),
            Some(
                Keyword::Constraint
                    | Keyword::Primary
                    | Keyword::Unique
                    | Keyword::Index
                    | Keyword::Key
                    | Keyword::Fulltext
                    | Keyword::Spatial
                    | Keyword::Foreign
                    | Keyword::Check
            )
        )
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_name()?;
        let field_type = self.parse_field_type()?;
        let options = self.parse_column_options()?;
        Ok(ColumnDef {
            name,
            field_type,
            options,
        })
    }

    // ------------------------------------------------------------------
    // Data types
    // ------------------------------------------------------------------

    fn parse_field_type(&mut self) -> Result<FieldType, ParseError> {
        let span = self.current.span;
        let word = match &self.current.kind {
            TokenKind::Identifier(word) => word.to_ascii_uppercase(),
            TokenKind::Keyword(Keyword::Character) => String::from("CHAR"),
            TokenKind::Keyword(Keyword::Set) => String::from("SET"),
            _ => return Err(self.unexpected("data type")),
        };
        self.advance();

        let field_type = match word.as_str() {
            "TINYINT" | "INT1" => self.parse_integer_type(TypeKind::Tiny)?,
            "BOOL" | "BOOLEAN" => FieldType::new(TypeKind::Tiny).with_length(1),
            "SMALLINT" | "INT2" => self.parse_integer_type(TypeKind::Short)?,
            "MEDIUMINT" | "INT3" | "MIDDLEINT" => self.parse_integer_type(TypeKind::Int24)?,
            "INT" | "INTEGER" | "INT4" => self.parse_integer_type(TypeKind::Long)?,
            "BIGINT" | "INT8" => self.parse_integer_type(TypeKind::LongLong)?,

            "FLOAT" | "FLOAT4" => {
                let (precision, scale) = self.parse_precision_scale()?;
                let mut ft = match (precision, scale) {
                    // FLOAT(p) picks DOUBLE above 24 bits of precision.
                    (Some(p), None) if p > 24 => FieldType::new(TypeKind::Double),
                    (Some(_), None) => FieldType::new(TypeKind::Float),
                    (length, decimals) => FieldType {
                        length,
                        decimals,
                        ..FieldType::new(TypeKind::Float)
                    },
                };
                self.parse_numeric_attributes(&mut ft);
                ft
            }
            "DOUBLE" | "FLOAT8" | "REAL" => {
                if self.check_word("PRECISION") {
                    self.advance();
                }
                let (length, decimals) = self.parse_precision_scale()?;
                let mut ft = FieldType {
                    length,
                    decimals,
                    ..FieldType::new(TypeKind::Double)
                };
                self.parse_numeric_attributes(&mut ft);
                ft
            }
            "DECIMAL" | "NUMERIC" | "DEC" | "FIXED" => {
                let (length, decimals) = self.parse_precision_scale()?;
                let mut ft = FieldType {
                    length,
                    decimals,
                    ..FieldType::new(TypeKind::NewDecimal)
                };
                self.parse_numeric_attributes(&mut ft);
                ft
            }

            "CHAR" | "NCHAR" => {
                if self.check_word("VARYING") {
                    self.advance();
                    let length = self.parse_required_length()?;
                    self.parse_string_type(FieldType::new(TypeKind::Varchar).with_length(length))?
                } else {
                    let mut ft = FieldType::new(TypeKind::String);
                    ft.length = self.parse_optional_length()?;
                    self.parse_string_type(ft)?
                }
            }
            "VARCHAR" | "NVARCHAR" => {
                let length = self.parse_required_length()?;
                self.parse_string_type(FieldType::new(TypeKind::Varchar).with_length(length))?
            }
            "BINARY" => {
                let mut ft = FieldType::new(TypeKind::String).binary();
                ft.length = self.parse_optional_length()?;
                ft
            }
            "VARBINARY" => {
                let length = self.parse_required_length()?;
                FieldType::new(TypeKind::Varchar).binary().with_length(length)
            }
            "TINYTEXT" => self.parse_string_type(FieldType::new(TypeKind::TinyBlob))?,
            "TEXT" => {
                let mut ft = FieldType::new(TypeKind::Blob);
                ft.length = self.parse_optional_length()?;
                self.parse_string_type(ft)?
            }
            "MEDIUMTEXT" => self.parse_string_type(FieldType::new(TypeKind::MediumBlob))?,
            "LONGTEXT" => self.parse_string_type(FieldType::new(TypeKind::LongBlob))?,
            "LONG" => {
                if self.check_word("VARCHAR") {
                    self.advance();
                }
                self.parse_string_type(FieldType::new(TypeKind::MediumBlob))?
            }
            "TINYBLOB" => FieldType::new(TypeKind::TinyBlob).binary(),
            "BLOB" => {
                let mut ft = FieldType::new(TypeKind::Blob).binary();
                ft.length = self.parse_optional_length()?;
                ft
            }
            "MEDIUMBLOB" => FieldType::new(TypeKind::MediumBlob).binary(),
            "LONGBLOB" => FieldType::new(TypeKind::LongBlob).binary(),
            "JSON" => FieldType::new(TypeKind::Json),

            "DATE" => FieldType::new(TypeKind::Date),
            "DATETIME" => self.parse_temporal_type(TypeKind::Datetime)?,
            "TIMESTAMP" => self.parse_temporal_type(TypeKind::Timestamp)?,
            "TIME" => self.parse_temporal_type(TypeKind::Duration)?,
            "YEAR" => {
                let mut ft = FieldType::new(TypeKind::Year);
                ft.length = self.parse_optional_length()?;
                ft
            }

            "BIT" => {
                let mut ft = FieldType::new(TypeKind::Bit);
                ft.length = self.parse_optional_length()?;
                ft
            }
            "ENUM" => {
                let mut ft = FieldType::new(TypeKind::Enum);
                ft.elements = self.parse_string_list()?;
                self.parse_string_type(ft)?
            }
            "SET" => {
                let mut ft = FieldType::new(TypeKind::Set);
                ft.elements = self.parse_string_list()?;
                self.parse_string_type(ft)?
            }
            "GEOMETRY" | "POINT" | "LINESTRING" | "POLYGON" | "MULTIPOINT"
            | "MULTILINESTRING" | "MULTIPOLYGON" | "GEOMETRYCOLLECTION" => {
                FieldType::new(TypeKind::Geometry)
            }

            _ => return Err(ParseError::new(format!("Unknown data type {word}"), span)),
        };

        Ok(field_type)
    }

    fn parse_integer_type(&mut self, kind: TypeKind) -> Result<FieldType, ParseError> {
        let mut ft = FieldType::new(kind);
        ft.length = self.parse_optional_length()?;
        self.parse_numeric_attributes(&mut ft);
        Ok(ft)
    }

    fn parse_temporal_type(&mut self, kind: TypeKind) -> Result<FieldType, ParseError> {
        let mut ft = FieldType::new(kind);
        ft.decimals = self.parse_optional_length()?;
        Ok(ft)
    }

    /// Parses UNSIGNED, SIGNED and ZEROFILL in any order.
    fn parse_numeric_attributes(&mut self, ft: &mut FieldType) {
        loop {
            if self.check_word("UNSIGNED") {
                ft.unsigned = true;
            } else if self.check_word("SIGNED") {
                ft.unsigned = false;
            } else if self.check_word("ZEROFILL") {
                ft.zerofill = true;
                ft.unsigned = true;
            } else {
                break;
            }
            self.advance();
        }
    }

    /// Parses character set and collation attributes of a string type.
    fn parse_string_type(&mut self, mut ft: FieldType) -> Result<FieldType, ParseError> {
        loop {
            if self.check_keyword(Keyword::Character) {
                self.advance();
                self.expect_keyword(Keyword::Set)?;
                ft.charset = Some(self.parse_option_value()?);
            } else if self.check_keyword(Keyword::Charset) {
                self.advance();
                ft.charset = Some(self.parse_option_value()?);
            } else if self.check_keyword(Keyword::Collate) {
                self.advance();
                ft.collate = Some(self.parse_option_value()?);
            } else if self.check_word("BINARY")
                || self.check_word("ASCII")
                || self.check_word("UNICODE")
            {
                self.advance();
            } else {
                return Ok(ft);
            }
        }
    }

    fn parse_optional_length(&mut self) -> Result<Option<u32>, ParseError> {
        if !self.check(&TokenKind::LeftParen) {
            return Ok(None);
        }
        self.advance();
        let length = self.expect_u32()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Some(length))
    }

    fn parse_required_length(&mut self) -> Result<u32, ParseError> {
        match self.parse_optional_length()? {
            Some(length) => Ok(length),
            None => Err(self.unexpected("'(' length ')'")),
        }
    }

    fn parse_precision_scale(&mut self) -> Result<(Option<u32>, Option<u32>), ParseError> {
        if !self.check(&TokenKind::LeftParen) {
            return Ok((None, None));
        }
        self.advance();
        let precision = self.expect_u32()?;
        let scale = if self.check(&TokenKind::Comma) {
            self.advance();
            Some(self.expect_u32()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok((Some(precision), scale))
    }

    /// Parses the parenthesized member list of ENUM or SET.
    fn parse_string_list(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut members = vec![];
        loop {
            members.push(self.expect_string()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(members)
    }

    // ------------------------------------------------------------------
    // Column options
    // ------------------------------------------------------------------

    fn parse_column_options(&mut self) -> Result<Vec<ColumnOption>, ParseError> {
        let mut options = vec![];
        loop {
            let option = match self.current.as_keyword() {
                Some(Keyword::Not) => {
                    self.advance();
                    self.expect_keyword(Keyword::Null)?;
                    ColumnOption::NotNull
                }
                Some(Keyword::Null) => {
                    self.advance();
                    ColumnOption::Null
                }
                Some(Keyword::Default) => {
                    self.advance();
                    ColumnOption::Default(self.parse_default_value()?)
                }
                Some(Keyword::AutoIncrement) => {
                    self.advance();
                    ColumnOption::AutoIncrement
                }
                Some(Keyword::Primary) => {
                    self.advance();
                    self.expect_keyword(Keyword::Key)?;
                    ColumnOption::PrimaryKey
                }
                Some(Keyword::Key) => {
                    self.advance();
                    ColumnOption::PrimaryKey
                }
                Some(Keyword::Unique) => {
                    self.advance();
                    if self.check_keyword(Keyword::Key) {
                        self.advance();
                    }
                    ColumnOption::UniqueKey
                }
                Some(Keyword::Comment) => {
                    self.advance();
                    ColumnOption::Comment(self.parse_default_value()?)
                }
                Some(Keyword::On) => {
                    self.advance();
                    self.expect_keyword(Keyword::Update)?;
                    ColumnOption::OnUpdate(self.parse_default_value()?)
                }
                Some(Keyword::Collate) => {
                    self.advance();
                    ColumnOption::Collate(self.parse_option_value()?)
                }
                Some(Keyword::Constraint) => {
                    // A named column-level CHECK.
                    self.advance();
                    if !self.check_keyword(Keyword::Check) {
                        self.expect_name()?;
                    }
                    continue;
                }
                Some(Keyword::Check) => {
                    self.advance();
                    let expr = self.parse_parenthesized_raw()?;
                    self.parse_enforcement();
                    ColumnOption::Check(expr)
                }
                Some(Keyword::References) => {
                    let (table, columns) = self.parse_references()?;
                    ColumnOption::References { table, columns }
                }
                Some(Keyword::Generated) => {
                    self.advance();
                    self.expect_keyword(Keyword::Always)?;
                    self.parse_generated()?
                }
                Some(Keyword::As) => self.parse_generated()?,
                _ => {
                    if self.check_word("VISIBLE") || self.check_word("INVISIBLE") {
                        self.advance();
                        continue;
                    }
                    if self.check_word("COLUMN_FORMAT") || self.check_word("STORAGE") {
                        self.advance();
                        self.parse_option_value()?;
                        continue;
                    }
                    if self.check_word("SRID") {
                        self.advance();
                        self.expect_u32()?;
                        continue;
                    }
                    break;
                }
            };
            options.push(option);
        }
        Ok(options)
    }

    /// Parses `AS (expr) [VIRTUAL | STORED]`.
    fn parse_generated(&mut self) -> Result<ColumnOption, ParseError> {
        self.expect_keyword(Keyword::As)?;
        let expr = self.parse_parenthesized_raw()?;
        let stored = if self.check_word("STORED") {
            self.advance();
            true
        } else {
            if self.check_word("VIRTUAL") {
                self.advance();
            }
            false
        };
        Ok(ColumnOption::Generated { expr, stored })
    }

    /// Parses a DEFAULT, COMMENT or ON UPDATE value.
    fn parse_default_value(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            self.advance();
            let expr = self.parse_expression()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(expr);
        }
        self.parse_operand()
    }

    /// Parses a literal, a signed number, a function call or an identifier.
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let literal = match self.current.kind.clone() {
            TokenKind::Integer(i) => Literal::Integer(i),
            TokenKind::Unsigned(u) => Literal::Unsigned(u),
            TokenKind::Decimal(d) => Literal::Decimal(d),
            TokenKind::Float(f) => Literal::Float(f),
            TokenKind::String(s) => Literal::String(s),
            TokenKind::HexString(bytes) => Literal::Hex(bytes),
            TokenKind::BitString(bits) => Literal::Bit(bits),
            TokenKind::Keyword(Keyword::Null) => Literal::Null,
            TokenKind::Keyword(Keyword::True) => Literal::Integer(1),
            TokenKind::Keyword(Keyword::False) => Literal::Integer(0),
            TokenKind::Plus => {
                self.advance();
                return self.parse_signed_number(false);
            }
            TokenKind::Minus => {
                self.advance();
                return self.parse_signed_number(true);
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(expr);
            }
            TokenKind::Identifier(name) => {
                self.advance();
                return self.parse_function_or_identifier(name);
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.advance();
        Ok(Expr::Literal(literal))
    }

    fn parse_signed_number(&mut self, negative: bool) -> Result<Expr, ParseError> {
        let literal = match self.current.kind.clone() {
            TokenKind::Integer(i) if negative => Literal::Integer(-i),
            TokenKind::Integer(i) => Literal::Integer(i),
            TokenKind::Unsigned(u) if !negative => Literal::Unsigned(u),
            TokenKind::Unsigned(u) => match i64::try_from(u - 1) {
                Ok(below) => Literal::Integer(-below - 1),
                Err(_) => Literal::Decimal(format!("-{u}")),
            },
            TokenKind::Decimal(d) if negative => Literal::Decimal(format!("-{d}")),
            TokenKind::Decimal(d) => Literal::Decimal(d),
            TokenKind::Float(f) if negative => Literal::Float(-f),
            TokenKind::Float(f) => Literal::Float(f),
            _ => return Err(self.unexpected("number")),
        };
        self.advance();
        Ok(Expr::Literal(literal))
    }

    fn parse_function_or_identifier(&mut self, name: String) -> Result<Expr, ParseError> {
        let upper = name.to_ascii_uppercase();
        let name = match upper.as_str() {
            "NOW" | "CURRENT_TIMESTAMP" | "LOCALTIME" | "LOCALTIMESTAMP" => {
                String::from("CURRENT_TIMESTAMP")
            }
            _ => name,
        };

        if self.check(&TokenKind::LeftParen) {
            self.advance();
            let mut args = vec![];
            if !self.check(&TokenKind::RightParen) {
                loop {
                    args.push(self.parse_expression()?);
                    if !self.check(&TokenKind::Comma) {
                        break;
                    }
                    self.advance();
                }
            }
            self.expect(&TokenKind::RightParen)?;
            return Ok(Expr::Function { name, args });
        }

        if NILADIC_FUNCTIONS.contains(&upper.as_str()) {
            Ok(Expr::Function { name, args: vec![] })
        } else {
            Ok(Expr::Identifier(name))
        }
    }

    /// Parses an expression up to the next top-level `,` or `)`.
    ///
    /// Simple operands are modelled; anything else is kept as source text.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let start = self.current.span.start;
        let simple = matches!(
            self.current.kind,
            TokenKind::Integer(_)
                | TokenKind::Unsigned(_)
                | TokenKind::Decimal(_)
                | TokenKind::Float(_)
                | TokenKind::String(_)
                | TokenKind::HexString(_)
                | TokenKind::BitString(_)
                | TokenKind::Identifier(_)
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::LeftParen
                | TokenKind::Keyword(Keyword::Null | Keyword::True | Keyword::False)
        );
        if simple {
            let expr = self.parse_operand()?;
            if self.at_expression_end() {
                return Ok(expr);
            }
        }
        self.skip_balanced(true)?;
        if self.current.span.start == start {
            return Err(self.unexpected("expression"));
        }
        Ok(Expr::Raw(self.source_text(start, self.previous.span.end)))
    }

    fn at_expression_end(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Comma | TokenKind::RightParen | TokenKind::Semicolon | TokenKind::Eof
        )
    }

    /// Advances past tokens until an unbalanced `)`, or a top-level `,` when
    /// `stop_at_comma` is set.
    fn skip_balanced(&mut self, stop_at_comma: bool) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.current.kind {
                TokenKind::Eof | TokenKind::Semicolon | TokenKind::Error(_) => {
                    return Err(self.unexpected("')'"));
                }
                TokenKind::Comma if depth == 0 && stop_at_comma => return Ok(()),
                TokenKind::RightParen if depth == 0 => return Ok(()),
                TokenKind::RightParen => depth -= 1,
                TokenKind::LeftParen => depth += 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Parses `( ... )` and returns the text between the parentheses.
    fn parse_parenthesized_raw(&mut self) -> Result<String, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let start = self.current.span.start;
        self.skip_balanced(false)?;
        let end = if self.current.span.start == start {
            start
        } else {
            self.previous.span.end
        };
        let text = self.source_text(start, end);
        self.expect(&TokenKind::RightParen)?;
        Ok(text)
    }

    /// Skips `[NOT] ENFORCED` after a CHECK.
    fn parse_enforcement(&mut self) {
        if self.check_keyword(Keyword::Not) {
            self.advance();
        }
        if self.check_word("ENFORCED") {
            self.advance();
        }
    }

    /// Parses `REFERENCES table (columns)` and its referential actions.
    fn parse_references(&mut self) -> Result<(String, Vec<String>), ParseError> {
        self.expect_keyword(Keyword::References)?;
        let table = self.parse_qualified_name()?;
        let columns = self
            .parse_key_parts()?
            .into_iter()
            .map(|part| part.column)
            .collect();

        loop {
            if self.check_word("MATCH") {
                self.advance();
                self.advance();
            } else if self.check_keyword(Keyword::On) {
                self.advance();
                if self.check_keyword(Keyword::Delete) || self.check_keyword(Keyword::Update) {
                    self.advance();
                } else {
                    return Err(self.unexpected("DELETE or UPDATE"));
                }
                self.parse_reference_action()?;
            } else {
                break;
            }
        }
        Ok((table, columns))
    }

    fn parse_reference_action(&mut self) -> Result<(), ParseError> {
        if self.check_keyword(Keyword::Set) {
            self.advance();
            if self.check_keyword(Keyword::Null) || self.check_keyword(Keyword::Default) {
                self.advance();
                return Ok(());
            }
            return Err(self.unexpected("NULL or DEFAULT"));
        }
        if self.check_word("RESTRICT") || self.check_word("CASCADE") {
            self.advance();
            return Ok(());
        }
        if self.check_word("NO") {
            self.advance();
            return self.expect_word("ACTION");
        }
        Err(self.unexpected("referential action"))
    }

    // ------------------------------------------------------------------
    // Table constraints
    // ------------------------------------------------------------------

    fn parse_table_constraint(&mut self) -> Result<TableConstraint, ParseError> {
        let mut symbol = None;
        if self.check_keyword(Keyword::Constraint) {
            self.advance();
            if !matches!(
                self.current.as_keyword(),
                Some(Keyword::Primary | Keyword::Unique | Keyword::Foreign | Keyword::Check)
            ) {
                symbol = Some(self.expect_name()?);
            }
        }

        match self.current.as_keyword() {
            Some(Keyword::Primary) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                let keys = self.parse_index_body()?;
                Ok(TableConstraint {
                    name: symbol,
                    kind: ConstraintType::PrimaryKey,
                    keys,
                })
            }
            Some(Keyword::Unique) => {
                self.advance();
                if self.check_keyword(Keyword::Index) || self.check_keyword(Keyword::Key) {
                    self.advance();
                }
                let index_name = self.parse_optional_index_name()?;
                let keys = self.parse_index_body()?;
                Ok(TableConstraint {
                    name: index_name.or(symbol),
                    kind: ConstraintType::Unique,
                    keys,
                })
            }
            Some(Keyword::Index | Keyword::Key) => {
                self.advance();
                let index_name = self.parse_optional_index_name()?;
                let keys = self.parse_index_body()?;
                Ok(TableConstraint {
                    name: index_name.or(symbol),
                    kind: ConstraintType::Index,
                    keys,
                })
            }
            Some(kw @ (Keyword::Fulltext | Keyword::Spatial)) => {
                self.advance();
                if self.check_keyword(Keyword::Index) || self.check_keyword(Keyword::Key) {
                    self.advance();
                }
                let index_name = self.parse_optional_index_name()?;
                let keys = self.parse_index_body()?;
                let kind = if kw == Keyword::Fulltext {
                    ConstraintType::Fulltext
                } else {
                    ConstraintType::Spatial
                };
                Ok(TableConstraint {
                    name: index_name.or(symbol),
                    kind,
                    keys,
                })
            }
            Some(Keyword::Foreign) => {
                self.advance();
                self.expect_keyword(Keyword::Key)?;
                let index_name = self.parse_optional_index_name()?;
                let keys = self.parse_key_parts()?;
                let (table, columns) = self.parse_references()?;
                Ok(TableConstraint {
                    name: symbol.or(index_name),
                    kind: ConstraintType::ForeignKey { table, columns },
                    keys,
                })
            }
            Some(Keyword::Check) => {
                self.advance();
                let expr = self.parse_parenthesized_raw()?;
                self.parse_enforcement();
                Ok(TableConstraint {
                    name: symbol,
                    kind: ConstraintType::Check(expr),
                    keys: vec![],
                })
            }
            _ => Err(self.unexpected("PRIMARY KEY, UNIQUE, INDEX, FOREIGN KEY or CHECK")),
        }
    }

    fn parse_optional_index_name(&mut self) -> Result<Option<String>, ParseError> {
        if self.check(&TokenKind::LeftParen) || self.check_keyword(Keyword::Using) {
            return Ok(None);
        }
        Ok(Some(self.expect_name()?))
    }

    /// Parses `[USING type] (key_part, ...) [index_option ...]`.
    fn parse_index_body(&mut self) -> Result<Vec<KeyPart>, ParseError> {
        self.parse_index_options()?;
        let keys = self.parse_key_parts()?;
        self.parse_index_options()?;
        Ok(keys)
    }

    fn parse_key_parts(&mut self) -> Result<Vec<KeyPart>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut parts = vec![];
        loop {
            if self.check(&TokenKind::LeftParen) {
                return Err(ParseError::new(
                    "Functional key parts are not supported",
                    self.current.span,
                ));
            }
            let mut part = KeyPart::new(self.expect_name()?);
            part.length = self.parse_optional_length()?;
            if self.check_word("DESC") {
                part.descending = true;
                self.advance();
            } else if self.check_word("ASC") {
                self.advance();
            }
            parts.push(part);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(parts)
    }

    fn parse_index_options(&mut self) -> Result<(), ParseError> {
        loop {
            if self.check_keyword(Keyword::Using) {
                self.advance();
                self.expect_name()?;
            } else if self.check_keyword(Keyword::Comment) {
                self.advance();
                self.expect_string()?;
            } else if self.check_word("KEY_BLOCK_SIZE") {
                self.advance();
                if self.check(&TokenKind::Eq) {
                    self.advance();
                }
                self.expect_u32()?;
            } else if self.check_word("VISIBLE") || self.check_word("INVISIBLE") {
                self.advance();
            } else if self.check_word("WITH") {
                self.advance();
                self.expect_word("PARSER")?;
                self.expect_name()?;
            } else {
                return Ok(());
            }
        }
    }

    // ------------------------------------------------------------------
    // Table options
    // ------------------------------------------------------------------

    /// Parses table options up to the end of the statement.
    ///
    /// In CREATE TABLE options may be separated by commas; in ALTER TABLE a
    /// comma ends the current specification instead.
    fn parse_table_options(&mut self, create: bool) -> Result<Vec<TableOption>, ParseError> {
        let mut options = vec![];
        loop {
            if create && self.check(&TokenKind::Comma) {
                self.advance();
                continue;
            }
            if self.check(&TokenKind::Semicolon)
                || self.current.is_eof()
                || self.check(&TokenKind::Comma)
            {
                break;
            }
            if self.check_keyword(Keyword::As) || self.check_word("SELECT") {
                return Err(ParseError::new(
                    "CREATE TABLE ... AS SELECT is not supported",
                    self.current.span,
                ));
            }
            if self.check_word("PARTITION") {
                return Err(ParseError::new(
                    "Partitioned tables are not supported",
                    self.current.span,
                ));
            }
            options.push(self.parse_table_option()?);
        }
        Ok(options)
    }

    fn parse_table_option(&mut self) -> Result<TableOption, ParseError> {
        if self.check_keyword(Keyword::Default) {
            self.advance();
        }

        let name = match self.current.kind.clone() {
            TokenKind::Keyword(Keyword::Comment) => {
                self.advance();
                if self.check(&TokenKind::Eq) {
                    self.advance();
                }
                return Ok(TableOption::Comment(self.expect_string()?));
            }
            TokenKind::Keyword(Keyword::Character) => {
                self.advance();
                self.expect_keyword(Keyword::Set)?;
                String::from("CHARACTER SET")
            }
            TokenKind::Keyword(
                kw @ (Keyword::Charset | Keyword::Collate | Keyword::AutoIncrement),
            ) => {
                self.advance();
                String::from(kw.as_str())
            }
            TokenKind::Identifier(word) => {
                self.advance();
                word.to_ascii_uppercase()
            }
            _ => return Err(self.unexpected("table option")),
        };

        if self.check(&TokenKind::Eq) {
            self.advance();
        }
        let value = self.parse_option_value()?;
        Ok(TableOption::Other { name, value })
    }

    /// Parses a single option value: a word, a number or a string.
    fn parse_option_value(&mut self) -> Result<String, ParseError> {
        let value = match &self.current.kind {
            TokenKind::String(s) | TokenKind::Decimal(s) => s.clone(),
            TokenKind::Integer(i) => i.to_string(),
            TokenKind::Unsigned(u) => u.to_string(),
            TokenKind::Identifier(_)
            | TokenKind::QuotedIdentifier(_)
            | TokenKind::Keyword(Keyword::Default) => self.name_text(),
            TokenKind::Keyword(kw) if !kw.is_reserved() => self.name_text(),
            TokenKind::LeftParen => {
                let inner = self.parse_parenthesized_raw()?;
                return Ok(format!("({inner})"));
            }
            _ => return Err(self.unexpected("option value")),
        };
        self.advance();
        Ok(value)
    }

    // ------------------------------------------------------------------
    // ALTER TABLE
    // ------------------------------------------------------------------

    fn parse_alter_table(&mut self) -> Result<AlterTableStatement, ParseError> {
        self.expect_keyword(Keyword::Table)?;
        let name = self.parse_qualified_name()?;
        let mut specs = vec![];
        loop {
            specs.push(self.parse_alter_spec()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(AlterTableStatement { name, specs })
    }

    fn parse_alter_spec(&mut self) -> Result<AlterSpec, ParseError> {
        match self.current.as_keyword() {
            Some(Keyword::Add) => {
                self.advance();
                if self.check_keyword(Keyword::Column) {
                    self.advance();
                } else if self.at_constraint_start() {
                    return Ok(AlterSpec::AddConstraint(self.parse_table_constraint()?));
                }
                if self.check(&TokenKind::LeftParen) {
                    self.advance();
                    let mut columns = vec![];
                    loop {
                        columns.push(self.parse_column_def()?);
                        if !self.check(&TokenKind::Comma) {
                            break;
                        }
                        self.advance();
                    }
                    self.expect(&TokenKind::RightParen)?;
                    return Ok(AlterSpec::AddColumns {
                        columns,
                        position: ColumnPosition::Unspecified,
                    });
                }
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                Ok(AlterSpec::AddColumns {
                    columns: vec![column],
                    position,
                })
            }
            Some(Keyword::Modify) => {
                self.advance();
                self.skip_keyword(Keyword::Column);
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                Ok(AlterSpec::ModifyColumn { column, position })
            }
            Some(Keyword::Change) => {
                self.advance();
                self.skip_keyword(Keyword::Column);
                let old_name = self.expect_name()?;
                let column = self.parse_column_def()?;
                let position = self.parse_column_position()?;
                Ok(AlterSpec::ChangeColumn {
                    old_name,
                    column,
                    position,
                })
            }
            Some(Keyword::Drop) => {
                self.advance();
                match self.current.as_keyword() {
                    Some(Keyword::Index | Keyword::Key) => {
                        self.advance();
                        Ok(AlterSpec::DropIndex(self.expect_name()?))
                    }
                    Some(Keyword::Primary) => {
                        self.advance();
                        self.expect_keyword(Keyword::Key)?;
                        Ok(AlterSpec::DropPrimaryKey)
                    }
                    Some(Keyword::Foreign) => {
                        self.advance();
                        self.expect_keyword(Keyword::Key)?;
                        Ok(AlterSpec::DropForeignKey(self.expect_name()?))
                    }
                    _ => {
                        self.skip_keyword(Keyword::Column);
                        Ok(AlterSpec::DropColumn(self.expect_name()?))
                    }
                }
            }
            Some(Keyword::Rename) => {
                self.advance();
                if self.check_keyword(Keyword::Column) {
                    self.advance();
                    let old_name = self.expect_name()?;
                    self.expect_keyword(Keyword::To)?;
                    let new_name = self.expect_name()?;
                    return Ok(AlterSpec::RenameColumn { old_name, new_name });
                }
                if self.check_keyword(Keyword::To) || self.check_keyword(Keyword::As) {
                    self.advance();
                }
                Ok(AlterSpec::RenameTable(self.parse_qualified_name()?))
            }
            Some(Keyword::Alter) => {
                self.advance();
                self.skip_keyword(Keyword::Column);
                let name = self.expect_name()?;
                if self.check_keyword(Keyword::Set) {
                    self.advance();
                    self.expect_keyword(Keyword::Default)?;
                    let default = self.parse_default_value()?;
                    return Ok(AlterSpec::AlterColumnDefault {
                        name,
                        default: Some(default),
                    });
                }
                self.expect_keyword(Keyword::Drop)?;
                self.expect_keyword(Keyword::Default)?;
                Ok(AlterSpec::AlterColumnDefault {
                    name,
                    default: None,
                })
            }
            _ => {
                let options = self.parse_table_options(false)?;
                if options.is_empty() {
                    return Err(self.unexpected("ALTER TABLE specification"));
                }
                Ok(AlterSpec::Options(options))
            }
        }
    }

    fn parse_column_position(&mut self) -> Result<ColumnPosition, ParseError> {
        if self.check_keyword(Keyword::First) {
            self.advance();
            return Ok(ColumnPosition::First);
        }
        if self.check_keyword(Keyword::After) {
            self.advance();
            return Ok(ColumnPosition::After(self.expect_name()?));
        }
        Ok(ColumnPosition::Unspecified)
    }

    // ------------------------------------------------------------------
    // Names and helpers
    // ------------------------------------------------------------------

    /// Parses `[schema.]name` and keeps only the object name.
    fn parse_qualified_name(&mut self) -> Result<String, ParseError> {
        let mut name = self.expect_name()?;
        while self.check(&TokenKind::Dot) {
            self.advance();
            name = self.expect_name()?;
        }
        Ok(name)
    }

    /// Returns the source text of a token.
    fn token_text(&self, token: &Token) -> &'a str {
        let input = self.lexer.input();
        input.get(token.span.start..token.span.end).unwrap_or_default()
    }

    /// Returns the current token as a name, without backticks.
    fn name_text(&self) -> String {
        match &self.current.kind {
            TokenKind::QuotedIdentifier(name) | TokenKind::Identifier(name) => name.clone(),
            _ => self.token_text(&self.current).to_string(),
        }
    }

    fn source_text(&self, start: usize, end: usize) -> String {
        self.lexer
            .input()
            .get(start..end)
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Builds the error for an unexpected current token.
    fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current.kind {
            TokenKind::Error(message) => ParseError::new(message.clone(), self.current.span),
            TokenKind::Eof => ParseError::unexpected_eof(expected, self.current.span),
            found => ParseError::unexpected(expected, found.clone(), self.current.span),
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.previous = core::mem::replace(&mut self.current, self.lexer.next_token());
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.current.kind, TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Checks if the current token is the given contextual word.
    fn check_word(&self, word: &str) -> bool {
        matches!(&self.current.kind, TokenKind::Identifier(w) if w.eq_ignore_ascii_case(word))
    }

    fn skip_keyword(&mut self, keyword: Keyword) {
        if self.check_keyword(keyword) {
            self.advance();
        }
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("{kind:?}")))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.check_word(word) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(word))
        }
    }

    /// Expects and returns a name: an identifier, a backtick-quoted
    /// identifier or a non-reserved keyword.
    fn expect_name(&mut self) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier(_) => {}
            TokenKind::Keyword(kw) if !kw.is_reserved() => {}
            _ => return Err(self.unexpected("identifier")),
        }
        let name = self.name_text();
        self.advance();
        Ok(name)
    }

    fn expect_string(&mut self) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.unexpected("string literal")),
        }
    }

    fn expect_u32(&mut self) -> Result<u32, ParseError> {
        match &self.current.kind {
            TokenKind::Integer(i) => match u32::try_from(*i) {
                Ok(n) => {
                    self.advance();
                    Ok(n)
                }
                Err(_) => Err(ParseError::new(
                    format!("Length {i} is out of range"),
                    self.current.span,
                )),
            },
            _ => Err(self.unexpected("integer")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Result<Vec<Statement>, ParseError> {
        Parser::new(sql).parse_statements()
    }

    fn parse_create(sql: &str) -> CreateTableStatement {
        match parse(sql).unwrap().remove(0) {
            Statement::CreateTable(stmt) => stmt,
            other => panic!("Expected CREATE TABLE, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_create_table() {
        let stmt = parse_create("CREATE TABLE users (id INT, name VARCHAR(20))");
        assert_eq!(stmt.name, "users");
        assert!(!stmt.if_not_exists);
        assert_eq!(stmt.columns.len(), 2);
        assert_eq!(stmt.columns[0].field_type.kind, TypeKind::Long);
        assert_eq!(stmt.columns[1].field_type.kind, TypeKind::Varchar);
        assert_eq!(stmt.columns[1].field_type.length, Some(20));
    }

    #[test]
    fn test_if_not_exists_and_qualified_name() {
        let stmt = parse_create("CREATE TABLE IF NOT EXISTS `shop`.`orders` (id BIGINT)");
        assert!(stmt.if_not_exists);
        assert_eq!(stmt.name, "orders");
    }

    #[test]
    fn test_temporary_table() {
        let stmt = parse_create("CREATE TEMPORARY TABLE scratch (id INT)");
        assert!(stmt.temporary);
    }

    #[test]
    fn test_column_options_in_order() {
        let stmt = parse_create(
            "CREATE TABLE t (id INT NOT NULL AUTO_INCREMENT PRIMARY KEY COMMENT 'pk')",
        );
        assert_eq!(
            stmt.columns[0].options,
            vec![
                ColumnOption::NotNull,
                ColumnOption::AutoIncrement,
                ColumnOption::PrimaryKey,
                ColumnOption::Comment(Expr::Literal(Literal::String(String::from("pk")))),
            ]
        );
    }

    #[test]
    fn test_default_values() {
        let stmt = parse_create(
            "CREATE TABLE t (a INT DEFAULT -5, b DECIMAL(5,2) DEFAULT 1.50, \
             c VARCHAR(3) DEFAULT 'x', d INT DEFAULT NULL, e TINYINT DEFAULT TRUE)",
        );
        let defaults: Vec<&ColumnOption> =
            stmt.columns.iter().map(|c| &c.options[0]).collect();
        assert_eq!(
            defaults,
            vec![
                &ColumnOption::Default(Expr::Literal(Literal::Integer(-5))),
                &ColumnOption::Default(Expr::Literal(Literal::Decimal(String::from("1.50")))),
                &ColumnOption::Default(Expr::Literal(Literal::String(String::from("x")))),
                &ColumnOption::Default(Expr::Literal(Literal::Null)),
                &ColumnOption::Default(Expr::Literal(Literal::Integer(1))),
            ]
        );
    }

    #[test]
    fn test_hex_number_default() {
        let stmt = parse_create("CREATE TABLE t (a INT DEFAULT 0x1F)");
        assert_eq!(
            stmt.columns[0].options[0],
            ColumnOption::Default(Expr::Literal(Literal::Hex(vec![0x1F])))
        );
    }

    #[test]
    fn test_oversized_integer_default_is_decimal() {
        let stmt = parse_create("CREATE TABLE t (a DECIMAL(30,0) DEFAULT 99999999999999999999999)");
        assert_eq!(
            stmt.columns[0].options[0],
            ColumnOption::Default(Expr::Literal(Literal::Decimal(String::from(
                "99999999999999999999999"
            ))))
        );
    }

    #[test]
    fn test_charset_introduced_string_default() {
        let stmt = parse_create(
            "CREATE TABLE t (a VARCHAR(10) DEFAULT _utf8mb4'abc', b BINARY(2) DEFAULT _binary'ok')",
        );
        assert_eq!(
            stmt.columns[0].options[0],
            ColumnOption::Default(Expr::Literal(Literal::String(String::from("abc"))))
        );
        assert_eq!(
            stmt.columns[1].options[0],
            ColumnOption::Default(Expr::Literal(Literal::String(String::from("ok"))))
        );
    }

    #[test]
    fn test_now_family_normalized() {
        let stmt = parse_create(
            "CREATE TABLE t (a DATETIME DEFAULT NOW(), b TIMESTAMP(3) DEFAULT CURRENT_TIMESTAMP(3) \
             ON UPDATE current_timestamp, c DATETIME DEFAULT LOCALTIMESTAMP)",
        );
        for column in &stmt.columns {
            match &column.options[0] {
                ColumnOption::Default(Expr::Function { name, .. }) => {
                    assert_eq!(name, "CURRENT_TIMESTAMP");
                }
                other => panic!("Expected function default, got {other:?}"),
            }
        }
        assert!(matches!(
            &stmt.columns[1].options[1],
            ColumnOption::OnUpdate(Expr::Function { name, .. }) if name == "CURRENT_TIMESTAMP"
        ));
    }

    #[test]
    fn test_expression_default_kept_raw() {
        let stmt = parse_create("CREATE TABLE t (a INT DEFAULT (1 + 2), b CHAR(36) DEFAULT (uuid()))");
        assert_eq!(
            stmt.columns[0].options[0],
            ColumnOption::Default(Expr::Raw(String::from("1 + 2")))
        );
        assert_eq!(
            stmt.columns[1].options[0],
            ColumnOption::Default(Expr::Function {
                name: String::from("uuid"),
                args: vec![],
            })
        );
    }

    #[test]
    fn test_table_constraints() {
        let stmt = parse_create(
            "CREATE TABLE t (a INT, b INT, \
             PRIMARY KEY (a, b), \
             CONSTRAINT uq_a UNIQUE (a), \
             UNIQUE KEY uq_b (b), \
             INDEX (a, b), \
             KEY idx_b USING BTREE (b(10) DESC) COMMENT 'x', \
             FULLTEXT KEY ft (a), \
             CONSTRAINT fk FOREIGN KEY (b) REFERENCES other (id) ON DELETE SET NULL ON UPDATE CASCADE, \
             CHECK (a > 0))",
        );
        let kinds: Vec<&ConstraintType> = stmt.constraints.iter().map(|c| &c.kind).collect();
        assert_eq!(kinds[0], &ConstraintType::PrimaryKey);
        assert_eq!(kinds[1], &ConstraintType::Unique);
        assert_eq!(kinds[2], &ConstraintType::Unique);
        assert_eq!(kinds[3], &ConstraintType::Index);
        assert_eq!(kinds[4], &ConstraintType::Index);
        assert_eq!(kinds[5], &ConstraintType::Fulltext);
        assert!(matches!(kinds[6], ConstraintType::ForeignKey { table, .. } if table == "other"));
        assert_eq!(kinds[7], &ConstraintType::Check(String::from("a > 0")));

        assert_eq!(stmt.constraints[1].name.as_deref(), Some("uq_a"));
        assert_eq!(stmt.constraints[2].name.as_deref(), Some("uq_b"));
        assert_eq!(stmt.constraints[3].name, None);
        assert_eq!(stmt.constraints[6].name.as_deref(), Some("fk"));

        let idx_b = &stmt.constraints[4].keys[0];
        assert_eq!(idx_b.column, "b");
        assert_eq!(idx_b.length, Some(10));
        assert!(idx_b.descending);
    }

    #[test]
    fn test_table_options() {
        let stmt = parse_create(
            "CREATE TABLE t (id INT) ENGINE=InnoDB AUTO_INCREMENT=5 DEFAULT CHARSET=utf8mb4 \
             COLLATE=utf8mb4_bin, COMMENT='user table'",
        );
        assert_eq!(stmt.comment(), Some("user table"));
        assert_eq!(
            stmt.options[0],
            TableOption::Other {
                name: String::from("ENGINE"),
                value: String::from("InnoDB"),
            }
        );
        assert_eq!(stmt.options.len(), 5);
    }

    #[test]
    fn test_type_attributes() {
        let stmt = parse_create(
            "CREATE TABLE t (a INT(11) UNSIGNED ZEROFILL, b VARCHAR(10) CHARACTER SET utf8 \
             COLLATE utf8_bin, c ENUM('x','y'), d DOUBLE PRECISION, e FLOAT(30), f BLOB, g TEXT)",
        );
        let a = &stmt.columns[0].field_type;
        assert!(a.unsigned && a.zerofill);
        assert_eq!(a.length, Some(11));
        let b = &stmt.columns[1].field_type;
        assert_eq!(b.charset.as_deref(), Some("utf8"));
        assert_eq!(b.collate.as_deref(), Some("utf8_bin"));
        assert_eq!(stmt.columns[2].field_type.elements, vec!["x", "y"]);
        assert_eq!(stmt.columns[3].field_type.kind, TypeKind::Double);
        assert_eq!(stmt.columns[4].field_type.kind, TypeKind::Double);
        assert!(stmt.columns[5].field_type.binary);
        assert!(!stmt.columns[6].field_type.binary);
    }

    #[test]
    fn test_keyword_column_names() {
        let stmt = parse_create("CREATE TABLE t (comment TEXT, `key` INT, first INT)");
        let names: Vec<&str> = stmt.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["comment", "key", "first"]);
    }

    #[test]
    fn test_alter_table_specs() {
        let stmts = parse(
            "ALTER TABLE t ADD COLUMN c INT NOT NULL AFTER b, MODIFY d VARCHAR(5), \
             CHANGE old_e e BIGINT FIRST, DROP COLUMN f, DROP INDEX idx_g, \
             ADD INDEX idx_h (h), RENAME TO u",
        )
        .unwrap();
        let Statement::AlterTable(alter) = &stmts[0] else {
            panic!("Expected ALTER TABLE");
        };
        assert_eq!(alter.name, "t");
        let names: Vec<&str> = alter.specs.iter().map(AlterSpec::kind_name).collect();
        assert_eq!(
            names,
            vec![
                "ADD COLUMN",
                "MODIFY COLUMN",
                "CHANGE COLUMN",
                "DROP COLUMN",
                "DROP INDEX",
                "ADD CONSTRAINT",
                "RENAME TABLE",
            ]
        );
        assert!(matches!(
            &alter.specs[0],
            AlterSpec::AddColumns { position: ColumnPosition::After(after), .. } if after == "b"
        ));
        assert!(matches!(
            &alter.specs[2],
            AlterSpec::ChangeColumn { old_name, column, .. } if old_name == "old_e" && column.name == "e"
        ));
    }

    #[test]
    fn test_alter_table_options_and_defaults() {
        let stmts = parse(
            "ALTER TABLE t ENGINE=InnoDB, ALTER COLUMN a SET DEFAULT 3, ALTER b DROP DEFAULT",
        )
        .unwrap();
        let Statement::AlterTable(alter) = &stmts[0] else {
            panic!("Expected ALTER TABLE");
        };
        assert_eq!(alter.specs.len(), 3);
        assert!(matches!(&alter.specs[0], AlterSpec::Options(opts) if opts.len() == 1));
        assert!(matches!(
            &alter.specs[2],
            AlterSpec::AlterColumnDefault { default: None, .. }
        ));
    }

    #[test]
    fn test_other_statements_skipped() {
        let stmts = parse(
            "SET NAMES utf8mb4;\nDROP TABLE IF EXISTS t;\nCREATE INDEX i ON t (a);\n\
             CREATE TABLE t (id INT);\nINSERT INTO t VALUES (1, 'a;b');",
        )
        .unwrap();
        assert_eq!(stmts.len(), 5);
        assert_eq!(
            stmts[0],
            Statement::Other {
                keyword: String::from("SET")
            }
        );
        assert_eq!(
            stmts[2],
            Statement::Other {
                keyword: String::from("CREATE")
            }
        );
        assert!(matches!(stmts[3], Statement::CreateTable(_)));
        assert_eq!(
            stmts[4],
            Statement::Other {
                keyword: String::from("INSERT")
            }
        );
    }

    #[test]
    fn test_error_has_location() {
        let err = parse("CREATE TABLE t (\n  id INT,\n  bad ?\n)").unwrap_err();
        assert_eq!((err.line, err.column), (3, 7));
        assert_eq!(err.found, Some(TokenKind::Symbol('?')));
    }

    #[test]
    fn test_unknown_type_is_error() {
        let err = parse("CREATE TABLE t (a WIBBLE)").unwrap_err();
        assert_eq!(err.message, "Unknown data type WIBBLE");
    }

    #[test]
    fn test_create_like_and_select_rejected() {
        assert!(parse("CREATE TABLE t LIKE s").is_err());
        assert!(parse("CREATE TABLE t (id INT) AS SELECT 1").is_err());
    }

    #[test]
    fn test_lexer_error_surfaces() {
        let err = parse("CREATE TABLE t (a VARCHAR(3) DEFAULT 'oops)").unwrap_err();
        assert_eq!(err.message, "Unterminated string literal");
    }
}
