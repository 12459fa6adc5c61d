//! CREATE VIEW synthesis from table metadata.
//!
//! Pure string construction: the same inputs always produce byte-identical
//! DDL. Every emitted view carries a primary key. A single-source view
//! reuses the source table's primary key (or promotes its first unique
//! constraint); when the source has neither, or the view joins two sources,
//! an ordinal `RowId` key is synthesized so downstream consumers can always
//! address rows.

use std::collections::HashSet;

use crate::error::ViewForgeError;
use crate::model::{ColumnSpec, JoinSpec, TableDescriptor};
use crate::util::{contains_name_ci, lower_key};

use super::identifier::{escape_qualified_name, escape_sql_name};

/// Synthesized ordinal key column, emitted when no source key can be reused
const ROW_ID_DEF: &str = "RowId integer PRIMARY KEY";

/// A source table feeding a view, with an optional included-column filter.
/// An empty filter means "all columns", same as no filter.
#[derive(Debug, Clone)]
pub struct ViewSource<'a> {
    pub table: &'a TableDescriptor,
    pub include_columns: Option<Vec<String>>,
}

impl<'a> ViewSource<'a> {
    pub fn all_columns(table: &'a TableDescriptor) -> Self {
        Self {
            table,
            include_columns: None,
        }
    }
}

/// Build a `CREATE VIEW` statement for one or two source tables.
///
/// With a single source the view reuses the table's key when it has one;
/// with two sources the tables are joined per `join` (INNER with default
/// aliases when no join spec is given) and an ordinal key is synthesized.
pub fn build_view_ddl(
    view_name: &str,
    left: &ViewSource<'_>,
    right: Option<&ViewSource<'_>>,
    join: Option<&JoinSpec>,
) -> Result<String, ViewForgeError> {
    if view_name.trim().is_empty() {
        return Err(ViewForgeError::invalid_argument("view name must not be empty"));
    }
    check_source(view_name, left)?;
    if let Some(right) = right {
        check_source(view_name, right)?;
    }
    if right.is_none() && join.is_some() {
        return Err(ViewForgeError::invalid_argument(format!(
            "view '{}' has a join spec but only one source table",
            view_name
        )));
    }

    match right {
        None => build_single_source(view_name, left),
        Some(right) => build_join(view_name, left, right, join),
    }
}

fn check_source(view_name: &str, source: &ViewSource<'_>) -> Result<(), ViewForgeError> {
    if source.table.columns.is_empty() {
        return Err(ViewForgeError::invalid_argument(format!(
            "view '{}': source table '{}' has no columns",
            view_name,
            source.table.qualified_name()
        )));
    }
    Ok(())
}

/// Select the emitted columns for one source: table order, case-insensitive
/// dedup, filter applied, force-included names kept regardless of filter.
fn select_columns<'t>(source: &ViewSource<'t>, force_include: &[String]) -> Vec<&'t ColumnSpec> {
    let filter = source
        .include_columns
        .as_deref()
        .filter(|f| !f.is_empty());

    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for col in &source.table.columns {
        if !seen.insert(lower_key(&col.name)) {
            continue;
        }
        let included = match filter {
            Some(names) => {
                contains_name_ci(names, &col.name) || contains_name_ci(force_include, &col.name)
            }
            None => true,
        };
        if included {
            selected.push(col);
        }
    }
    selected
}

fn build_single_source(
    view_name: &str,
    source: &ViewSource<'_>,
) -> Result<String, ViewForgeError> {
    let table = source.table;

    // Primary key preferred, else the first unique constraint; its key list
    // becomes the view's primary key
    let constraint = table
        .primary_key()
        .or_else(|| table.first_unique_constraint());
    let forced: &[String] = constraint.map(|c| c.columns.as_slice()).unwrap_or(&[]);

    let columns = select_columns(source, forced);
    if columns.is_empty() {
        return Err(ViewForgeError::invalid_argument(format!(
            "view '{}' selects no columns from '{}'",
            view_name,
            table.qualified_name()
        )));
    }

    let mut column_defs: Vec<String> = columns
        .iter()
        .map(|c| format!("{} {}", escape_sql_name(&c.name), c.sql_type))
        .collect();
    let select_list: Vec<String> = columns
        .iter()
        .map(|c| escape_sql_name(&c.name))
        .collect();
    let from = escape_qualified_name(&table.model, &table.name);

    let ddl = match constraint {
        Some(constraint) => {
            let key_columns: Vec<String> = constraint
                .columns
                .iter()
                .map(|c| escape_sql_name(c))
                .collect();
            column_defs.push(format!(
                "CONSTRAINT {} PRIMARY KEY ({})",
                escape_sql_name(&constraint.name),
                key_columns.join(", ")
            ));
            format!(
                "CREATE VIEW {} ({}) AS \nSELECT {} \nFROM {};",
                escape_sql_name(view_name),
                column_defs.join(","),
                select_list.join(", "),
                from
            )
        }
        None => {
            let order_by = escape_sql_name(&columns[0].name);
            format!(
                "CREATE VIEW {} ({},{}) AS \nSELECT ROW_NUMBER() OVER (ORDER BY {}), {} \nFROM {};",
                escape_sql_name(view_name),
                ROW_ID_DEF,
                column_defs.join(","),
                order_by,
                select_list.join(", "),
                from
            )
        }
    };

    Ok(ddl)
}

fn build_join(
    view_name: &str,
    left: &ViewSource<'_>,
    right: &ViewSource<'_>,
    join: Option<&JoinSpec>,
) -> Result<String, ViewForgeError> {
    let default_join;
    let join = match join {
        Some(join) => join,
        None => {
            default_join = JoinSpec::default();
            &default_join
        }
    };

    let left_alias = join.left_alias.trim();
    let right_alias = join.right_alias.trim();
    if left_alias.is_empty() || right_alias.is_empty() {
        return Err(ViewForgeError::invalid_argument(format!(
            "view '{}': join aliases must not be empty",
            view_name
        )));
    }
    if lower_key(left_alias) == lower_key(right_alias) {
        return Err(ViewForgeError::invalid_argument(format!(
            "view '{}': join aliases '{}' and '{}' are not distinct",
            view_name, left_alias, right_alias
        )));
    }

    for predicate in &join.predicates {
        if !has_column(left.table, &predicate.left_column) {
            return Err(ViewForgeError::invalid_argument(format!(
                "view '{}': join column '{}' not found in '{}'",
                view_name,
                predicate.left_column,
                left.table.qualified_name()
            )));
        }
        if !has_column(right.table, &predicate.right_column) {
            return Err(ViewForgeError::invalid_argument(format!(
                "view '{}': join column '{}' not found in '{}'",
                view_name,
                predicate.right_column,
                right.table.qualified_name()
            )));
        }
    }

    // Joins never reuse source constraints, so no force-include here
    let left_columns = select_columns(left, &[]);
    let right_columns = select_columns(right, &[]);
    if left_columns.is_empty() || right_columns.is_empty() {
        return Err(ViewForgeError::invalid_argument(format!(
            "view '{}' selects no columns from one of its sources",
            view_name
        )));
    }

    // Names present (case-insensitively) on both sides get alias-prefixed
    let left_names: HashSet<String> =
        left_columns.iter().map(|c| lower_key(&c.name)).collect();
    let duplicates: HashSet<String> = right_columns
        .iter()
        .map(|c| lower_key(&c.name))
        .filter(|name| left_names.contains(name))
        .collect();

    let mut column_defs = vec![ROW_ID_DEF.to_string()];
    let mut select_list = Vec::new();
    for (columns, alias) in [(&left_columns, left_alias), (&right_columns, right_alias)] {
        for col in columns.iter() {
            let qualified = format!("{}.{}", escape_sql_name(alias), escape_sql_name(&col.name));
            if duplicates.contains(&lower_key(&col.name)) {
                let prefixed = escape_sql_name(&format!("{}_{}", alias, col.name));
                column_defs.push(format!("{} {}", prefixed, col.sql_type));
                select_list.push(format!("{} AS {}", qualified, prefixed));
            } else {
                column_defs.push(format!("{} {}", escape_sql_name(&col.name), col.sql_type));
                select_list.push(qualified);
            }
        }
    }

    let order_by = format!(
        "{}.{}",
        escape_sql_name(left_alias),
        escape_sql_name(&left_columns[0].name)
    );

    let mut from = format!(
        "{} AS {} {} {} AS {}",
        escape_qualified_name(&left.table.model, &left.table.name),
        escape_sql_name(left_alias),
        join.join_type.keyword(),
        escape_qualified_name(&right.table.model, &right.table.name),
        escape_sql_name(right_alias)
    );
    if !join.predicates.is_empty() {
        let mut criteria = String::new();
        for (i, predicate) in join.predicates.iter().enumerate() {
            if i > 0 {
                criteria.push(' ');
                criteria.push_str(predicate.combine.keyword());
                criteria.push(' ');
            }
            let operator = predicate.operator.trim();
            let operator = if operator.is_empty() { "=" } else { operator };
            criteria.push_str(&format!(
                "{}.{} {} {}.{}",
                escape_sql_name(left_alias),
                escape_sql_name(&predicate.left_column),
                operator,
                escape_sql_name(right_alias),
                escape_sql_name(&predicate.right_column)
            ));
        }
        from.push_str(" ON ");
        from.push_str(&criteria);
    }

    Ok(format!(
        "CREATE VIEW {} ({}) AS \nSELECT ROW_NUMBER() OVER (ORDER BY {}), {} \nFROM {};",
        escape_sql_name(view_name),
        column_defs.join(","),
        order_by,
        select_list.join(", "),
        from
    ))
}

fn has_column(table: &TableDescriptor, name: &str) -> bool {
    table
        .columns
        .iter()
        .any(|c| lower_key(&c.name) == lower_key(name))
}
