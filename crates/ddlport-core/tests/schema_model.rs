//! Parsing and model-building tests over realistic dump input.

mod common;
use common::*;

use ddlport_core::ast::{ColumnOption, Statement, TypeKind};
use ddlport_core::schema::{ColumnChange, ConstraintKind};
use pretty_assertions::assert_eq;

const BLOG_DUMP: &str = "\
-- Host: localhost    Database: blog
# generated by mysqldump
/*!40101 SET @OLD_SQL_MODE=@@SQL_MODE */;

DROP TABLE IF EXISTS `posts`;
CREATE TABLE `posts` (
  `id` bigint(20) unsigned NOT NULL AUTO_INCREMENT,
  `author_id` int(11) NOT NULL,
  `slug` varchar(191) CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci NOT NULL,
  `title` varchar(255) NOT NULL DEFAULT '',
  `body` longtext,
  `cover` mediumblob,
  `score` decimal(6,2) NOT NULL DEFAULT '0.00',
  `rating` float DEFAULT 0.5,
  `published` tinyint(1) NOT NULL DEFAULT 0,
  `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,
  `updated_at` datetime DEFAULT NULL ON UPDATE CURRENT_TIMESTAMP,
  PRIMARY KEY (`id`),
  UNIQUE KEY `posts_slug_unique` (`slug`),
  KEY `posts_author_id_index` (`author_id`),
  KEY (`published`, `created_at`),
  CONSTRAINT `posts_author_fk` FOREIGN KEY (`author_id`) REFERENCES `users` (`id`) ON DELETE CASCADE
) ENGINE=InnoDB AUTO_INCREMENT=42 DEFAULT CHARSET=utf8mb4 COMMENT='Blog posts';

LOCK TABLES `posts` WRITE;
INSERT INTO `posts` VALUES (1,1,'hello','Hello; world','...',NULL,'1.00',0.5,1,NOW(),NULL);
UNLOCK TABLES;

ALTER TABLE `posts` ADD COLUMN `views` int NOT NULL DEFAULT 0 AFTER `score`,
  MODIFY `title` varchar(300) NOT NULL,
  CHANGE `body` `content` text,
  DROP COLUMN `rating`;
";

#[test]
fn dump_statements_are_classified() {
    let statements = parse(BLOG_DUMP);
    let summary: Vec<String> = statements
        .iter()
        .map(|s| match s {
            Statement::CreateTable(create) => format!("create {}", create.name),
            Statement::AlterTable(alter) => format!("alter {}", alter.name),
            Statement::Other { keyword } => keyword.to_lowercase(),
        })
        .collect();
    assert_eq!(
        summary,
        vec!["drop", "create posts", "lock", "insert", "unlock", "alter posts"]
    );
}

#[test]
fn dump_columns_are_parsed() {
    let create = parse_create(
        BLOG_DUMP
            .split_once("CREATE TABLE")
            .map(|(_, rest)| format!("CREATE TABLE{rest}"))
            .unwrap()
            .as_str(),
    );
    assert_eq!(create.columns.len(), 11);
    assert_eq!(create.constraints.len(), 5);
    assert_eq!(create.comment(), Some("Blog posts"));

    let id = &create.columns[0];
    assert_eq!(id.field_type.kind, TypeKind::LongLong);
    assert!(id.field_type.unsigned);
    assert_eq!(
        id.options,
        vec![ColumnOption::NotNull, ColumnOption::AutoIncrement]
    );

    let cover = &create.columns[5];
    assert_eq!(cover.field_type.kind, TypeKind::MediumBlob);
    assert!(cover.field_type.binary);
}

#[test]
fn model_resolves_types_and_defaults() {
    let model = model(BLOG_DUMP);
    assert_eq!(model.create_tables.len(), 1);
    let posts = &model.create_tables[0];

    let rendered: Vec<(&str, &str, Option<&str>)> = posts
        .columns
        .iter()
        .map(|c| (c.name.as_str(), c.data_type.as_str(), c.default.as_deref()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("id", "bigint", None),
            ("author_id", "int", None),
            ("slug", "varchar(191)", None),
            ("title", "varchar(255)", Some("''")),
            ("body", "text", None),
            ("cover", "bytea", None),
            ("score", "decimal(6,2)", Some("'0.00'")),
            ("rating", "real", Some("0.5")),
            ("published", "smallint", Some("0")),
            ("created_at", "timestamp(0)", Some("CURRENT_TIMESTAMP")),
            ("updated_at", "timestamp(0)", None),
        ]
    );
    assert_eq!(posts.comment.as_deref(), Some("Blog posts"));
}

#[test]
fn model_propagates_table_primary_key() {
    let model = model(BLOG_DUMP);
    let posts = &model.create_tables[0];
    let serial: Vec<&str> = model
        .serial_columns()
        .map(|(_, column)| column.name.as_str())
        .collect();
    assert_eq!(serial, vec!["id"]);
    assert!(posts.has_primary_key_constraint());

    let kinds: Vec<ConstraintKind> = posts.constraints.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ConstraintKind::PrimaryKey,
            ConstraintKind::Unique,
            ConstraintKind::Index,
            ConstraintKind::Index,
            ConstraintKind::Other,
        ]
    );
    assert_eq!(posts.constraints[1].name, "posts_slug_unique");
    assert_eq!(posts.constraints[3].name, "");
}

#[test]
fn model_collects_alter_changes() {
    let model = model(BLOG_DUMP);
    assert_eq!(model.alter_tables.len(), 1);
    let alter = &model.alter_tables[0];
    assert_eq!(alter.table, "posts");

    match &alter.changes[..] {
        [
            ColumnChange::Add { column: views },
            ColumnChange::Modify { column: title },
            ColumnChange::Change { old_name, column: content },
            ColumnChange::Drop { name },
        ] => {
            assert_eq!(views.name, "views");
            assert!(views.not_null);
            assert_eq!(views.default.as_deref(), Some("0"));
            assert_eq!(title.data_type, "varchar(300)");
            assert_eq!(old_name, "body");
            assert_eq!(content.name, "content");
            assert_eq!(name, "rating");
        }
        other => panic!("Unexpected changes: {other:?}"),
    }
}

#[test]
fn dump_translates_to_postgres() {
    let output = modern(BLOG_DUMP);
    assert!(output.starts_with("CREATE TABLE \"posts\"(\n\t\"id\"\tbigint\tNOT NULL,\n"));
    assert!(output.contains("\tPRIMARY KEY (\"id\"),\n\tCONSTRAINT posts_slug_unique UNIQUE (\"slug\")\n);"));
    assert!(output.contains("COMMENT ON TABLE \"posts\" IS 'Blog posts';"));
    assert!(output.contains("CREATE SEQUENCE \"posts_id_seq\""));
    assert!(output.ends_with(
        "CREATE INDEX IF NOT EXISTS \"idx_posts_author_id\" ON \"posts\" (\"author_id\");\n\
         CREATE INDEX IF NOT EXISTS \"idx_posts_published_created_at\" ON \"posts\" (\"published\",\"created_at\");"
    ));
    assert!(!output.contains("FOREIGN KEY"));
    assert!(!output.contains("views"));
}
