//! Parser for view-project files.
//!
//! A project file is JSON: source schema files plus the views to synthesize.
//! Single-source views name a `table`; join views name `left`/`right`
//! sources and an optional `join` block. Raw serde structs are resolved
//! into validated definitions here so the rest of the pipeline never sees
//! half-formed input.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::ViewForgeError;
use crate::model::{CombineKeyword, JoinPredicate, JoinSpec, JoinType};
use crate::util::lower_key;

/// A resolved view project
#[derive(Debug, Clone)]
pub struct ViewProject {
    pub name: String,
    /// Model name used to qualify unqualified table references
    pub default_model: String,
    /// Schema DDL files, resolved relative to the project file
    pub schema_files: Vec<PathBuf>,
    pub views: Vec<ViewDefinition>,
    pub project_dir: PathBuf,
}

/// One source table reference inside a view definition
#[derive(Debug, Clone)]
pub struct SourceDef {
    pub table: String,
    pub include_columns: Option<Vec<String>>,
}

/// A validated view definition
#[derive(Debug, Clone)]
pub struct ViewDefinition {
    pub name: String,
    pub left: SourceDef,
    pub right: Option<SourceDef>,
    pub join: Option<JoinSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProject {
    name: Option<String>,
    default_model: Option<String>,
    schema_files: Option<Vec<String>>,
    schema_dir: Option<String>,
    views: Vec<RawView>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawView {
    name: String,
    table: Option<String>,
    columns: Option<Vec<String>>,
    left: Option<RawSource>,
    right: Option<RawSource>,
    join: Option<RawJoin>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    table: String,
    alias: Option<String>,
    columns: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawJoin {
    #[serde(rename = "type")]
    join_type: Option<String>,
    on: Option<Vec<RawPredicate>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPredicate {
    left: String,
    right: String,
    op: Option<String>,
    combine: Option<String>,
}

/// Parse and validate a view-project file
pub fn parse_viewproj(path: &Path) -> Result<ViewProject> {
    let content = std::fs::read_to_string(path).map_err(|e| ViewForgeError::ProjectReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let raw: RawProject =
        serde_json::from_str(&content).map_err(|e| ViewForgeError::ProjectParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let project_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let name = raw.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("views")
            .to_string()
    });

    let schema_files = resolve_schema_files(&raw, &project_dir)?;
    if schema_files.is_empty() {
        return Err(invalid("project lists no schema files").into());
    }

    if raw.views.is_empty() {
        return Err(invalid("project defines no views").into());
    }

    let mut seen_names = HashSet::new();
    let mut views = Vec::with_capacity(raw.views.len());
    for raw_view in raw.views {
        let view = resolve_view(raw_view)?;
        if !seen_names.insert(lower_key(&view.name)) {
            return Err(invalid(format!("duplicate view name '{}'", view.name)).into());
        }
        views.push(view);
    }

    Ok(ViewProject {
        name,
        default_model: raw.default_model.unwrap_or_else(|| "model".to_string()),
        schema_files,
        views,
        project_dir,
    })
}

fn resolve_schema_files(raw: &RawProject, project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if let Some(explicit) = &raw.schema_files {
        for rel in explicit {
            files.push(project_dir.join(rel));
        }
    }

    if let Some(dir) = &raw.schema_dir {
        let dir_path = project_dir.join(dir);
        if !dir_path.is_dir() {
            return Err(invalid(format!(
                "schema_dir '{}' is not a directory",
                dir_path.display()
            ))
            .into());
        }
        let mut found: Vec<PathBuf> = WalkDir::new(&dir_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("sql"))
            .collect();
        found.sort();
        files.extend(found);
    }

    let mut seen = HashSet::new();
    files.retain(|p| seen.insert(p.clone()));
    Ok(files)
}

fn resolve_view(raw: RawView) -> Result<ViewDefinition> {
    if raw.name.trim().is_empty() {
        return Err(invalid("view with empty name").into());
    }

    match (&raw.table, &raw.left) {
        (Some(_), Some(_)) => {
            Err(invalid(format!("view '{}' sets both 'table' and 'left'", raw.name)).into())
        }
        (Some(table), None) => {
            if raw.right.is_some() || raw.join.is_some() {
                return Err(invalid(format!(
                    "single-table view '{}' cannot have 'right' or 'join'",
                    raw.name
                ))
                .into());
            }
            Ok(ViewDefinition {
                name: raw.name,
                left: SourceDef {
                    table: table.clone(),
                    include_columns: raw.columns,
                },
                right: None,
                join: None,
            })
        }
        (None, Some(left)) => {
            let right = match &raw.right {
                Some(right) => right,
                None => {
                    return Err(invalid(format!(
                        "view '{}' sets 'left' without 'right'",
                        raw.name
                    ))
                    .into())
                }
            };
            let join = resolve_join(raw.join.as_ref(), left, right);
            Ok(ViewDefinition {
                name: raw.name,
                left: SourceDef {
                    table: left.table.clone(),
                    include_columns: left.columns.clone(),
                },
                right: Some(SourceDef {
                    table: right.table.clone(),
                    include_columns: right.columns.clone(),
                }),
                join: Some(join),
            })
        }
        (None, None) => {
            Err(invalid(format!("view '{}' names no source table", raw.name)).into())
        }
    }
}

fn resolve_join(raw: Option<&RawJoin>, left: &RawSource, right: &RawSource) -> JoinSpec {
    // Unrecognized join-type strings fall back to INNER
    let join_type = raw
        .and_then(|j| j.join_type.as_deref())
        .map(JoinType::from_name)
        .unwrap_or_default();

    let predicates = raw
        .and_then(|j| j.on.as_ref())
        .map(|on| {
            on.iter()
                .map(|p| JoinPredicate {
                    left_column: p.left.clone(),
                    right_column: p.right.clone(),
                    operator: p.op.clone().unwrap_or_else(|| "=".to_string()),
                    combine: match p.combine.as_deref() {
                        Some(c) if c.eq_ignore_ascii_case("OR") => CombineKeyword::Or,
                        _ => CombineKeyword::And,
                    },
                })
                .collect()
        })
        .unwrap_or_default();

    JoinSpec {
        left_alias: left.alias.clone().unwrap_or_else(|| "A".to_string()),
        right_alias: right.alias.clone().unwrap_or_else(|| "B".to_string()),
        join_type,
        predicates,
    }
}

fn invalid(message: impl Into<String>) -> ViewForgeError {
    ViewForgeError::InvalidProjectFormat {
        message: message.into(),
    }
}
