//! PostgreSQL emitter.

use tracing::debug;

use super::DdlEmitter;
use crate::schema::{Column, Constraint, ConstraintKind, PgVersion, SchemaModel, Table};

/// Indentation unit inside generated `DO` blocks.
const INDENT: &str = "    ";

/// PostgreSQL emitter for a given server version.
#[derive(Debug, Clone, Copy)]
pub struct PostgresEmitter {
    version: PgVersion,
}

impl PostgresEmitter {
    /// Creates a new PostgreSQL emitter.
    #[must_use]
    pub const fn new(version: PgVersion) -> Self {
        Self { version }
    }

    /// Returns the name of the sequence backing an auto-increment column.
    #[must_use]
    pub fn sequence_name(table: &str, column: &str) -> String {
        format!("{table}_{column}_seq")
    }

    /// Returns the deterministic name of a plain index.
    #[must_use]
    pub fn index_name(table: &str, keys: &[String]) -> String {
        let mut name = format!("idx_{table}");
        for key in keys {
            name.push('_');
            name.push_str(key);
        }
        name
    }

    fn create_index(&self, table: &Table, index: &Constraint, if_not_exists: bool) -> String {
        let keys: Vec<String> = index
            .keys
            .iter()
            .map(|k| self.quote_identifier(k))
            .collect();
        format!(
            "CREATE INDEX {}{} ON {} ({});",
            if if_not_exists { "IF NOT EXISTS " } else { "" },
            self.quote_identifier(&Self::index_name(&table.name, &index.keys)),
            self.quote_identifier(&table.name),
            keys.join(",")
        )
    }

    /// Wraps statements in a `DO` block, one inner block per guard.
    fn guarded_block(&self, guards: &[Guard]) -> String {
        let mut lines = vec![String::from("DO"), String::from("$BLOCK$"), indent(1, "BEGIN")];
        for guard in guards {
            lines.push(indent(2, "BEGIN"));
            lines.extend(guard.statements.iter().map(|s| indent(3, s)));
            lines.push(indent(2, "EXCEPTION"));
            lines.push(indent(3, &format!("WHEN {}", guard.condition)));
            lines.push(indent(
                4,
                &format!("THEN RAISE NOTICE {};", self.quote_literal(&guard.notice)),
            ));
            lines.push(indent(2, "END;"));
        }
        lines.push(indent(1, "END;"));
        lines.push(String::from("$BLOCK$;"));
        lines.join("\n")
    }
}

/// Statements run together inside a guarded inner block.
struct Guard {
    statements: Vec<String>,
    condition: &'static str,
    notice: String,
}

fn indent(level: usize, text: &str) -> String {
    format!("{}{text}", INDENT.repeat(level))
}

impl DdlEmitter for PostgresEmitter {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn column_definition(&self, column: &Column) -> String {
        let mut sql = format!(
            "\t{}\t{}",
            self.quote_identifier(&column.name),
            column.data_type
        );
        if column.not_null {
            sql.push_str("\tNOT NULL");
        }
        if let Some(ref default) = column.default {
            sql.push_str("\tDEFAULT ");
            sql.push_str(default);
        }
        sql
    }

    fn constraint_definition(&self, constraint: &Constraint) -> Option<String> {
        let keys: Vec<String> = constraint
            .keys
            .iter()
            .map(|k| self.quote_identifier(k))
            .collect();
        let keys = keys.join(", ");
        match constraint.kind {
            ConstraintKind::PrimaryKey => Some(format!("\tPRIMARY KEY ({keys})")),
            ConstraintKind::Unique if constraint.name.is_empty() => {
                Some(format!("\tUNIQUE ({keys})"))
            }
            ConstraintKind::Unique => Some(format!(
                "\tCONSTRAINT {} UNIQUE ({keys})",
                constraint.name
            )),
            ConstraintKind::Index | ConstraintKind::Other => None,
        }
    }

    fn table_epilogue(&self, table: &Table) -> Vec<String> {
        let table_name = self.quote_identifier(&table.name);
        let mut statements = vec![];
        if let Some(ref comment) = table.comment {
            statements.push(format!(
                "COMMENT ON TABLE {table_name} IS {};",
                self.quote_literal(comment)
            ));
        }
        for column in &table.columns {
            if let Some(ref comment) = column.comment {
                statements.push(format!(
                    "COMMENT ON COLUMN {table_name}.{} IS {};",
                    self.quote_identifier(&column.name),
                    self.quote_literal(comment)
                ));
            }
        }
        statements
    }

    fn auto_increment_section(&self, model: &SchemaModel) -> Option<String> {
        let guards: Vec<Guard> = model
            .serial_columns()
            .map(|(table, column)| {
                let sequence = Self::sequence_name(&table.name, &column.name);
                let quoted_sequence = self.quote_identifier(&sequence);
                let quoted_table = self.quote_identifier(&table.name);
                let quoted_column = self.quote_identifier(&column.name);
                Guard {
                    statements: vec![
                        format!(
                            "CREATE SEQUENCE {quoted_sequence} INCREMENT 1 MINVALUE 1 \
                             MAXVALUE 9223372036854775807 START WITH 1 CACHE 1;"
                        ),
                        format!(
                            "ALTER SEQUENCE {quoted_sequence} OWNED BY {quoted_table}.{quoted_column};"
                        ),
                        format!(
                            "ALTER TABLE {quoted_table} ALTER COLUMN {quoted_column} SET DEFAULT nextval({});",
                            self.quote_literal(&quoted_sequence)
                        ),
                    ],
                    condition: "OTHERS",
                    notice: format!("create {sequence} sequence err"),
                }
            })
            .collect();
        if guards.is_empty() {
            return None;
        }
        debug!(sequences = guards.len(), "emitting auto-increment block");
        Some(self.guarded_block(&guards))
    }

    fn index_section(&self, model: &SchemaModel) -> Option<String> {
        let indexes: Vec<(&Table, &Constraint)> = model.indexes().collect();
        if indexes.is_empty() {
            return None;
        }
        debug!(indexes = indexes.len(), version = %self.version, "emitting indexes");

        if self.version.has_create_index_if_not_exists() {
            let statements: Vec<String> = indexes
                .iter()
                .map(|(table, index)| self.create_index(table, index, true))
                .collect();
            return Some(statements.join("\n"));
        }

        let guards: Vec<Guard> = indexes
            .iter()
            .map(|(table, index)| Guard {
                statements: vec![self.create_index(table, index, false)],
                condition: "duplicate_table",
                notice: format!(
                    "index '{}' on {} already exists, skipping",
                    Self::index_name(&table.name, &index.keys),
                    table.name
                ),
            })
            .collect();
        Some(self.guarded_block(&guards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Target;
    use pretty_assertions::assert_eq;

    fn column(name: &str, data_type: &str) -> Column {
        Column::new(name, data_type)
    }

    fn index(keys: &[&str]) -> Constraint {
        Constraint {
            name: String::new(),
            kind: ConstraintKind::Index,
            keys: keys.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    #[test]
    fn test_column_definition() {
        let emitter = PostgresEmitter::new(PgVersion::V9_5);
        let mut name = column("name", "varchar(20)");
        assert_eq!(emitter.column_definition(&name), "\t\"name\"\tvarchar(20)");
        name.not_null = true;
        name.default = Some(String::from("'x'"));
        assert_eq!(
            emitter.column_definition(&name),
            "\t\"name\"\tvarchar(20)\tNOT NULL\tDEFAULT 'x'"
        );
    }

    #[test]
    fn test_constraint_definitions() {
        let emitter = PostgresEmitter::new(PgVersion::V9_5);
        let pk = Constraint {
            name: String::new(),
            kind: ConstraintKind::PrimaryKey,
            keys: vec![String::from("a"), String::from("b")],
        };
        assert_eq!(
            emitter.constraint_definition(&pk).as_deref(),
            Some("\tPRIMARY KEY (\"a\", \"b\")")
        );

        let named = Constraint {
            name: String::from("uq_a"),
            kind: ConstraintKind::Unique,
            keys: vec![String::from("a")],
        };
        assert_eq!(
            emitter.constraint_definition(&named).as_deref(),
            Some("\tCONSTRAINT uq_a UNIQUE (\"a\")")
        );

        let anonymous = Constraint {
            name: String::new(),
            ..named
        };
        assert_eq!(
            emitter.constraint_definition(&anonymous).as_deref(),
            Some("\tUNIQUE (\"a\")")
        );

        assert_eq!(emitter.constraint_definition(&index(&["a"])), None);
    }

    #[test]
    fn test_create_table_without_constraints_has_no_dangling_comma() {
        let emitter = PostgresEmitter::new(PgVersion::V9_5);
        let mut table = Table::new("t");
        table.columns = vec![column("a", "int"), column("b", "text")];
        assert_eq!(
            emitter.create_table(&table),
            "CREATE TABLE \"t\"(\n\t\"a\"\tint,\n\t\"b\"\ttext\n);"
        );
    }

    #[test]
    fn test_create_table_with_comments() {
        let emitter = PostgresEmitter::new(PgVersion::V9_5);
        let mut table = Table::new("t");
        table.if_not_exists = true;
        table.comment = Some(String::from("owner's table"));
        let mut a = column("a", "int");
        a.comment = Some(String::from("the a"));
        table.columns = vec![a];
        assert_eq!(
            emitter.create_table(&table),
            "CREATE TABLE IF NOT EXISTS \"t\"(\n\t\"a\"\tint\n);\n\
             COMMENT ON TABLE \"t\" IS 'owner''s table';\n\
             COMMENT ON COLUMN \"t\".\"a\" IS 'the a';"
        );
    }

    #[test]
    fn test_auto_increment_block() {
        let emitter = PostgresEmitter::new(PgVersion::V9_4);
        let mut id = column("id", "int");
        id.primary_key = true;
        id.auto_increment = true;
        let mut table = Table::new("t");
        table.columns = vec![id];
        let mut model = SchemaModel::new(Target::PostgresCompatible);
        model.create_tables.push(table);

        let expected = "\
DO
$BLOCK$
    BEGIN
        BEGIN
            CREATE SEQUENCE \"t_id_seq\" INCREMENT 1 MINVALUE 1 MAXVALUE 9223372036854775807 START WITH 1 CACHE 1;
            ALTER SEQUENCE \"t_id_seq\" OWNED BY \"t\".\"id\";
            ALTER TABLE \"t\" ALTER COLUMN \"id\" SET DEFAULT nextval('\"t_id_seq\"');
        EXCEPTION
            WHEN OTHERS
                THEN RAISE NOTICE 'create t_id_seq sequence err';
        END;
    END;
$BLOCK$;";
        assert_eq!(emitter.auto_increment_section(&model).as_deref(), Some(expected));
    }

    #[test]
    fn test_auto_increment_without_primary_key_is_skipped() {
        let emitter = PostgresEmitter::new(PgVersion::V9_5);
        let mut counter = column("counter", "int");
        counter.auto_increment = true;
        let mut table = Table::new("t");
        table.columns = vec![counter];
        let mut model = SchemaModel::new(Target::Postgres);
        model.create_tables.push(table);
        assert_eq!(emitter.auto_increment_section(&model), None);
    }

    #[test]
    fn test_index_section_by_version() {
        let mut table = Table::new("t");
        table.columns = vec![column("a", "int"), column("b", "int")];
        table.constraints = vec![index(&["a", "b"])];
        let mut model = SchemaModel::new(Target::Postgres);
        model.create_tables.push(table);

        let modern = PostgresEmitter::new(PgVersion::V9_5);
        assert_eq!(
            modern.index_section(&model).as_deref(),
            Some("CREATE INDEX IF NOT EXISTS \"idx_t_a_b\" ON \"t\" (\"a\",\"b\");")
        );

        let compatible = PostgresEmitter::new(PgVersion::V9_4);
        let expected = "\
DO
$BLOCK$
    BEGIN
        BEGIN
            CREATE INDEX \"idx_t_a_b\" ON \"t\" (\"a\",\"b\");
        EXCEPTION
            WHEN duplicate_table
                THEN RAISE NOTICE 'index ''idx_t_a_b'' on t already exists, skipping';
        END;
    END;
$BLOCK$;";
        assert_eq!(compatible.index_section(&model).as_deref(), Some(expected));
    }

    #[test]
    fn test_names() {
        assert_eq!(PostgresEmitter::sequence_name("users", "uid"), "users_uid_seq");
        assert_eq!(
            PostgresEmitter::index_name("t", &[String::from("b"), String::from("a")]),
            "idx_t_b_a"
        );
    }
}
