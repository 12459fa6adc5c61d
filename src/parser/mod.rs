//! Schema DDL parsing

pub mod identifier_utils;
mod schema_parser;

pub use schema_parser::{parse_schema_file, parse_schema_files, ParsedStatement};
