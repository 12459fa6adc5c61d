//! Unit tests for view-project file parsing

use pretty_assertions::assert_eq;

use viewforge::model::{CombineKeyword, JoinType};
use viewforge::project::parse_viewproj;

#[path = "../common/mod.rs"]
mod common;

use common::TestContext;

fn context_with_schema() -> TestContext {
    let ctx = TestContext::new();
    ctx.write_file("schema/tables.sql", "CREATE TABLE model.orders (ID INT);");
    ctx
}

#[test]
fn test_parse_minimal_project() {
    let ctx = context_with_schema();
    let path = ctx.write_file(
        "views.json",
        r#"{
            "schema_files": ["schema/tables.sql"],
            "views": [ { "name": "v_orders", "table": "model.orders" } ]
        }"#,
    );

    let project = parse_viewproj(&path).unwrap();
    assert_eq!(project.name, "views");
    assert_eq!(project.default_model, "model");
    assert_eq!(project.schema_files.len(), 1);
    assert_eq!(project.views.len(), 1);
    assert_eq!(project.views[0].left.table, "model.orders");
    assert!(project.views[0].right.is_none());
}

#[test]
fn test_schema_dir_is_walked_for_sql_files() {
    let ctx = TestContext::new();
    ctx.write_file("schema/a.sql", "CREATE TABLE model.a (x INT);");
    ctx.write_file("schema/nested/b.sql", "CREATE TABLE model.b (y INT);");
    ctx.write_file("schema/readme.txt", "not sql");
    let path = ctx.write_file(
        "views.json",
        r#"{
            "schema_dir": "schema",
            "views": [ { "name": "v", "table": "model.a" } ]
        }"#,
    );

    let project = parse_viewproj(&path).unwrap();
    assert_eq!(project.schema_files.len(), 2);
    assert!(project
        .schema_files
        .iter()
        .all(|p| p.extension().unwrap() == "sql"));
}

#[test]
fn test_join_view_with_predicates() {
    let ctx = context_with_schema();
    let path = ctx.write_file(
        "views.json",
        r#"{
            "schema_files": ["schema/tables.sql"],
            "views": [ {
                "name": "v_joined",
                "left":  { "table": "model.orders", "alias": "O", "columns": ["ID"] },
                "right": { "table": "model.customers" },
                "join":  { "type": "LEFT_OUTER",
                           "on": [ { "left": "custId", "right": "ID" },
                                   { "left": "region", "op": "<>", "right": "region", "combine": "OR" } ] }
            } ]
        }"#,
    );

    let project = parse_viewproj(&path).unwrap();
    let view = &project.views[0];
    let join = view.join.as_ref().unwrap();
    assert_eq!(join.left_alias, "O");
    assert_eq!(join.right_alias, "B");
    assert_eq!(join.join_type, JoinType::LeftOuter);
    assert_eq!(join.predicates.len(), 2);
    assert_eq!(join.predicates[0].operator, "=");
    assert_eq!(join.predicates[0].combine, CombineKeyword::And);
    assert_eq!(join.predicates[1].operator, "<>");
    assert_eq!(join.predicates[1].combine, CombineKeyword::Or);
    assert_eq!(
        view.left.include_columns.as_deref(),
        Some(&["ID".to_string()][..])
    );
}

#[test]
fn test_unrecognized_join_type_defaults_to_inner() {
    assert_eq!(JoinType::from_name("SIDEWAYS"), JoinType::Inner);
    assert_eq!(JoinType::from_name(""), JoinType::Inner);
    assert_eq!(JoinType::from_name("left_outer"), JoinType::LeftOuter);
    assert_eq!(JoinType::from_name("FULL OUTER"), JoinType::FullOuter);
}

#[test]
fn test_duplicate_view_names_rejected() {
    let ctx = context_with_schema();
    let path = ctx.write_file(
        "views.json",
        r#"{
            "schema_files": ["schema/tables.sql"],
            "views": [ { "name": "v", "table": "model.orders" },
                       { "name": "V", "table": "model.orders" } ]
        }"#,
    );

    let err = parse_viewproj(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate view name"));
}

#[test]
fn test_view_without_source_rejected() {
    let ctx = context_with_schema();
    let path = ctx.write_file(
        "views.json",
        r#"{
            "schema_files": ["schema/tables.sql"],
            "views": [ { "name": "v" } ]
        }"#,
    );

    let err = parse_viewproj(&path).unwrap_err();
    assert!(err.to_string().contains("names no source table"));
}

#[test]
fn test_left_without_right_rejected() {
    let ctx = context_with_schema();
    let path = ctx.write_file(
        "views.json",
        r#"{
            "schema_files": ["schema/tables.sql"],
            "views": [ { "name": "v", "left": { "table": "model.orders" } } ]
        }"#,
    );

    let err = parse_viewproj(&path).unwrap_err();
    assert!(err.to_string().contains("without 'right'"));
}

#[test]
fn test_empty_views_rejected() {
    let ctx = context_with_schema();
    let path = ctx.write_file(
        "views.json",
        r#"{ "schema_files": ["schema/tables.sql"], "views": [] }"#,
    );

    let err = parse_viewproj(&path).unwrap_err();
    assert!(err.to_string().contains("no views"));
}

#[test]
fn test_missing_schema_files_rejected() {
    let ctx = TestContext::new();
    let path = ctx.write_file(
        "views.json",
        r#"{ "views": [ { "name": "v", "table": "t" } ] }"#,
    );

    let err = parse_viewproj(&path).unwrap_err();
    assert!(err.to_string().contains("no schema files"));
}

#[test]
fn test_malformed_json_reports_parse_error() {
    let ctx = TestContext::new();
    let path = ctx.write_file("views.json", "{ not json");

    let err = parse_viewproj(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse project file"));
}
