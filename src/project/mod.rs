//! View-project file handling

mod viewproj_parser;

pub use viewproj_parser::{parse_viewproj, SourceDef, ViewDefinition, ViewProject};
