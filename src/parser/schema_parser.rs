//! Schema file parser using sqlparser-rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use sqlparser::ast::Statement;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

use crate::error::ViewForgeError;

/// A parsed SQL statement with its source location
#[derive(Debug, Clone)]
pub struct ParsedStatement {
    pub statement: Statement,
    pub source_file: PathBuf,
}

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Parse multiple schema files, using parallel processing for larger file sets
pub fn parse_schema_files(files: &[PathBuf]) -> Result<Vec<ParsedStatement>> {
    // Pre-allocate with estimate of ~2 statements per file
    let mut all_statements = Vec::with_capacity(files.len() * 2);

    if files.len() >= PARALLEL_THRESHOLD {
        let results: Vec<Result<Vec<ParsedStatement>>> = files
            .par_iter()
            .map(|file| parse_schema_file(file))
            .collect();

        // Combine results, propagating the first error if any
        for result in results {
            all_statements.extend(result?);
        }
    } else {
        for file in files {
            let statements = parse_schema_file(file)?;
            all_statements.extend(statements);
        }
    }

    Ok(all_statements)
}

/// Parse a single schema file
pub fn parse_schema_file(path: &Path) -> Result<Vec<ParsedStatement>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ViewForgeError::SchemaFileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    // Strip UTF-8 BOM if present
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    let dialect = GenericDialect {};
    let parsed = Parser::parse_sql(&dialect, content).map_err(|e| {
        ViewForgeError::SchemaParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    Ok(parsed
        .into_iter()
        .map(|statement| ParsedStatement {
            statement,
            source_file: path.to_path_buf(),
        })
        .collect())
}
