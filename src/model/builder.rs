//! Build the metadata model from parsed CREATE TABLE statements

use anyhow::Result;
use sqlparser::ast::{ColumnDef, ColumnOption, DataType, ObjectName, Statement, TableConstraint};

use crate::parser::ParsedStatement;

use super::{ColumnSpec, ConstraintKind, ConstraintSpec, MetadataModel, TableDescriptor};

/// Build a metadata model from parsed schema statements. Statements other
/// than CREATE TABLE are skipped; views are synthesized later, everything
/// else is outside the tool's concern.
pub fn build_model(statements: &[ParsedStatement], default_model: &str) -> Result<MetadataModel> {
    let mut model = MetadataModel::new();

    for parsed in statements {
        if let Statement::CreateTable(create_table) = &parsed.statement {
            let (model_name, table_name) =
                extract_model_and_name(&create_table.name, default_model);

            let columns = create_table.columns.iter().map(column_from_def).collect();

            let mut constraints = Vec::new();

            // Inline column constraints (PRIMARY KEY / UNIQUE on a column)
            for col in &create_table.columns {
                for option in &col.options {
                    if let ColumnOption::Unique { is_primary, .. } = &option.option {
                        let name = option.name.as_ref().map(|n| n.value.clone());
                        let (kind, default_name) = if *is_primary {
                            (ConstraintKind::PrimaryKey, format!("PK_{}", table_name))
                        } else {
                            (
                                ConstraintKind::Unique,
                                format!("UQ_{}_{}", table_name, col.name.value),
                            )
                        };
                        constraints.push(ConstraintSpec {
                            name: name.unwrap_or(default_name),
                            kind,
                            columns: vec![col.name.value.clone()],
                        });
                    }
                }
            }

            // Table-level constraints (CONSTRAINT ... PRIMARY KEY / UNIQUE)
            for constraint in &create_table.constraints {
                if let Some(spec) = constraint_from_table_constraint(constraint, &table_name) {
                    constraints.push(spec);
                }
            }

            model.add_table(TableDescriptor {
                model: model_name,
                name: table_name,
                columns,
                constraints,
            });
        }
    }

    Ok(model)
}

fn extract_model_and_name(name: &ObjectName, default_model: &str) -> (String, String) {
    let parts: Vec<_> = name.0.iter().map(|p| p.value.clone()).collect();

    match parts.len() {
        1 => (default_model.to_string(), parts[0].clone()),
        2 => (parts[0].clone(), parts[1].clone()),
        _ => (
            default_model.to_string(),
            parts.last().cloned().unwrap_or_default(),
        ),
    }
}

fn column_from_def(col: &ColumnDef) -> ColumnSpec {
    ColumnSpec {
        name: col.name.value.clone(),
        sql_type: engine_type_name(&col.data_type),
    }
}

fn constraint_from_table_constraint(
    constraint: &TableConstraint,
    table_name: &str,
) -> Option<ConstraintSpec> {
    match constraint {
        TableConstraint::PrimaryKey { name, columns, .. } => Some(ConstraintSpec {
            name: name
                .as_ref()
                .map(|n| n.value.clone())
                .unwrap_or_else(|| format!("PK_{}", table_name)),
            kind: ConstraintKind::PrimaryKey,
            columns: columns.iter().map(|c| c.value.clone()).collect(),
        }),
        TableConstraint::Unique { name, columns, .. } => Some(ConstraintSpec {
            name: name
                .as_ref()
                .map(|n| n.value.clone())
                .unwrap_or_else(|| format!("UQ_{}", table_name)),
            kind: ConstraintKind::Unique,
            columns: columns.iter().map(|c| c.value.clone()).collect(),
        }),
        // Foreign keys and checks never influence view synthesis
        _ => None,
    }
}

/// Map a parsed data type to the target engine's type name. Lengths and
/// precisions are dropped; the engine resolves them from the source.
/// Unknown custom types pass through as written.
fn engine_type_name(data_type: &DataType) -> String {
    match data_type {
        DataType::Char(_)
        | DataType::Varchar(_)
        | DataType::Nvarchar(_)
        | DataType::Text
        | DataType::String(_) => "string".to_string(),
        DataType::TinyInt(_) => "byte".to_string(),
        DataType::SmallInt(_) => "short".to_string(),
        DataType::Int(_) | DataType::Integer(_) => "integer".to_string(),
        DataType::BigInt(_) => "long".to_string(),
        DataType::Decimal(_) | DataType::Numeric(_) => "bigdecimal".to_string(),
        DataType::Float(_) | DataType::Real => "float".to_string(),
        DataType::DoublePrecision => "double".to_string(),
        DataType::Boolean => "boolean".to_string(),
        DataType::Date => "date".to_string(),
        DataType::Time(_, _) => "time".to_string(),
        DataType::Timestamp(_, _) | DataType::Datetime(_) => "timestamp".to_string(),
        DataType::Clob(_) => "clob".to_string(),
        DataType::Blob(_) => "blob".to_string(),
        DataType::Binary(_) | DataType::Varbinary(_) | DataType::Bytea => {
            "varbinary".to_string()
        }
        DataType::Custom(name, _) => name
            .0
            .iter()
            .map(|p| p.value.clone())
            .collect::<Vec<_>>()
            .join("."),
        other => other.to_string().to_lowercase(),
    }
}
