//! Unit tests for the metadata model builder
//!
//! These tests verify the transformation from SQL AST to table descriptors.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use viewforge::model::{build_model, ConstraintKind, MetadataModel};
use viewforge::parser::parse_schema_file;

/// Helper to create a temp SQL file with content
fn create_sql_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".sql").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Helper to parse SQL and build a metadata model
fn parse_and_build_model(sql: &str) -> MetadataModel {
    let file = create_sql_file(sql);
    let statements = parse_schema_file(file.path()).unwrap();
    build_model(&statements, "model").unwrap()
}

#[test]
fn test_build_table_with_columns() {
    let sql = "CREATE TABLE model.orders (ID BIGINT, orderDate TIMESTAMP);";
    let metadata = parse_and_build_model(sql);

    let table = metadata.find_table("model.orders", "model").unwrap();
    assert_eq!(table.model, "model");
    assert_eq!(table.name, "orders");
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].name, "ID");
    assert_eq!(table.columns[0].sql_type, "long");
    assert_eq!(table.columns[1].name, "orderDate");
    assert_eq!(table.columns[1].sql_type, "timestamp");
}

#[test]
fn test_unqualified_table_takes_default_model() {
    let sql = "CREATE TABLE orders (ID INT);";
    let metadata = parse_and_build_model(sql);

    let table = metadata.find_table("orders", "model").unwrap();
    assert_eq!(table.model, "model");
    assert_eq!(table.qualified_name(), "model.orders");
}

#[test]
fn test_inline_primary_key() {
    let sql = "CREATE TABLE model.orders (ID INT PRIMARY KEY, total DECIMAL(10,2));";
    let metadata = parse_and_build_model(sql);

    let table = metadata.find_table("model.orders", "model").unwrap();
    let pk = table.primary_key().unwrap();
    assert_eq!(pk.kind, ConstraintKind::PrimaryKey);
    assert_eq!(pk.name, "PK_orders");
    assert_eq!(pk.columns, vec!["ID".to_string()]);
}

#[test]
fn test_table_level_primary_key_with_name() {
    let sql = "CREATE TABLE model.orders (a INT, b INT, CONSTRAINT pk_ab PRIMARY KEY (a, b));";
    let metadata = parse_and_build_model(sql);

    let table = metadata.find_table("model.orders", "model").unwrap();
    let pk = table.primary_key().unwrap();
    assert_eq!(pk.name, "pk_ab");
    assert_eq!(pk.columns, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_inline_unique_constraint() {
    let sql = "CREATE TABLE model.orders (code VARCHAR(10) UNIQUE, total INT);";
    let metadata = parse_and_build_model(sql);

    let table = metadata.find_table("model.orders", "model").unwrap();
    assert!(table.primary_key().is_none());
    let unique = table.first_unique_constraint().unwrap();
    assert_eq!(unique.kind, ConstraintKind::Unique);
    assert_eq!(unique.columns, vec!["code".to_string()]);
}

#[test]
fn test_table_level_unique_constraint() {
    let sql = "CREATE TABLE model.orders (a INT, b INT, CONSTRAINT uq_a UNIQUE (a));";
    let metadata = parse_and_build_model(sql);

    let table = metadata.find_table("model.orders", "model").unwrap();
    let unique = table.first_unique_constraint().unwrap();
    assert_eq!(unique.name, "uq_a");
    assert_eq!(unique.columns, vec!["a".to_string()]);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let sql = "CREATE TABLE Model.Orders (ID INT);";
    let metadata = parse_and_build_model(sql);

    assert!(metadata.find_table("model.orders", "model").is_some());
    assert!(metadata.find_table("MODEL.ORDERS", "model").is_some());
    assert!(metadata.find_table("model.customers", "model").is_none());
}

#[test]
fn test_non_table_statements_skipped() {
    let sql = "CREATE TABLE model.orders (ID INT); CREATE VIEW v AS SELECT 1;";
    let metadata = parse_and_build_model(sql);
    assert_eq!(metadata.len(), 1);
}

#[test]
fn test_redefined_table_replaces_earlier() {
    let sql = "CREATE TABLE model.orders (old INT); CREATE TABLE model.orders (fresh INT);";
    let metadata = parse_and_build_model(sql);

    assert_eq!(metadata.len(), 1);
    let table = metadata.find_table("model.orders", "model").unwrap();
    assert_eq!(table.columns[0].name, "fresh");
}

#[test]
fn test_multiple_tables_preserve_order() {
    let sql = "CREATE TABLE model.a (x INT); CREATE TABLE model.b (y INT);";
    let metadata = parse_and_build_model(sql);

    let names: Vec<_> = metadata.tables().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}
