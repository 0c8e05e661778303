#![allow(dead_code)]

use ddlport_core::ast::{CreateTableStatement, Statement};
use ddlport_core::{ParseError, Parser, SchemaModel, Target, TranslateError};

pub fn parse(sql: &str) -> Vec<Statement> {
    Parser::new(sql)
        .parse_statements()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    match Parser::new(sql).parse_statements() {
        Ok(statements) => panic!("Expected parse error for: {sql}\nGot: {statements:?}"),
        Err(e) => e,
    }
}

pub fn parse_create(sql: &str) -> CreateTableStatement {
    match parse(sql).into_iter().next() {
        Some(Statement::CreateTable(create)) => create,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn modern(sql: &str) -> String {
    ddlport_core::translate(sql, Target::Postgres)
        .unwrap_or_else(|e| panic!("Failed to translate: {sql}\nError: {e}"))
}

pub fn compatible(sql: &str) -> String {
    ddlport_core::translate(sql, Target::PostgresCompatible)
        .unwrap_or_else(|e| panic!("Failed to translate: {sql}\nError: {e}"))
}

pub fn model(sql: &str) -> SchemaModel {
    ddlport_core::translate_model(sql, Target::Postgres)
        .unwrap_or_else(|e| panic!("Failed to build model: {sql}\nError: {e}"))
}

pub fn translate_err(sql: &str) -> TranslateError {
    match ddlport_core::translate(sql, Target::Postgres) {
        Ok(output) => panic!("Expected translation error for: {sql}\nGot:\n{output}"),
        Err(e) => e,
    }
}
