//! viewforge: CREATE VIEW DDL generation for SQL virtualization engines
//!
//! This library compiles a view-project file (source schema DDL plus view
//! definitions) into `CREATE VIEW` statements, synthesizing primary keys,
//! deduplicating join columns, and quoting identifiers as the target
//! engine requires.

pub mod ddl;
pub mod error;
pub mod model;
pub mod parser;
pub mod project;
pub mod util;

use std::path::PathBuf;

use anyhow::Result;

use ddl::ViewSource;
use model::MetadataModel;
use project::{SourceDef, ViewDefinition, ViewProject};

pub use error::ViewForgeError;

/// Options for a view build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path to the view-project file
    pub project_path: PathBuf,
    /// Output path for the generated DDL file
    pub output_path: Option<PathBuf>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Build view DDL from a project file, writing one .sql artifact
pub fn build_views(options: BuildOptions) -> Result<PathBuf> {
    if options.verbose {
        println!("Building project: {}", options.project_path.display());
    }

    // Step 1: Parse the project file
    let project = project::parse_viewproj(&options.project_path)?;

    if options.verbose {
        println!(
            "Found {} schema files, {} views",
            project.schema_files.len(),
            project.views.len()
        );
    }

    // Step 2: Parse the schema files
    let statements = parser::parse_schema_files(&project.schema_files)?;

    if options.verbose {
        println!("Parsed {} SQL statements", statements.len());
    }

    // Step 3: Build the metadata model
    let metadata = model::build_model(&statements, &project.default_model)?;

    if options.verbose {
        println!("Built model with {} tables", metadata.len());
    }

    // Step 4: Synthesize DDL for every view
    let ddl = generate_project_ddl(&project, &metadata)?;

    // Step 5: Write the artifact
    let output_path = options.output_path.unwrap_or_else(|| {
        project
            .project_dir
            .join("out")
            .join(format!("{}.sql", project.name))
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ViewForgeError::OutputWriteError {
            path: output_path.clone(),
            source: e,
        })?;
    }
    std::fs::write(&output_path, ddl).map_err(|e| ViewForgeError::OutputWriteError {
        path: output_path.clone(),
        source: e,
    })?;

    if options.verbose {
        println!("Wrote DDL: {}", output_path.display());
    }

    Ok(output_path)
}

/// Generate the DDL text for every view in a project, in project order,
/// statements separated by a blank line.
pub fn generate_project_ddl(project: &ViewProject, metadata: &MetadataModel) -> Result<String> {
    let mut statements = Vec::with_capacity(project.views.len());
    for view in &project.views {
        statements.push(generate_view_ddl(view, metadata, &project.default_model)?);
    }
    let mut out = statements.join("\n\n");
    out.push('\n');
    Ok(out)
}

fn generate_view_ddl(
    view: &ViewDefinition,
    metadata: &MetadataModel,
    default_model: &str,
) -> Result<String> {
    let left = resolve_source(&view.name, &view.left, metadata, default_model)?;
    let right = view
        .right
        .as_ref()
        .map(|r| resolve_source(&view.name, r, metadata, default_model))
        .transpose()?;

    let ddl = ddl::build_view_ddl(&view.name, &left, right.as_ref(), view.join.as_ref())?;
    Ok(ddl)
}

fn resolve_source<'m>(
    view_name: &str,
    source: &SourceDef,
    metadata: &'m MetadataModel,
    default_model: &str,
) -> Result<ViewSource<'m>> {
    let table = metadata
        .find_table(&source.table, default_model)
        .ok_or_else(|| ViewForgeError::UnknownTable {
            view: view_name.to_string(),
            table: source.table.clone(),
        })?;
    Ok(ViewSource {
        table,
        include_columns: source.include_columns.clone(),
    })
}
