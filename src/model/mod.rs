//! Source-table metadata model

mod builder;
mod elements;
mod metadata_model;

pub use builder::build_model;
pub use elements::*;
pub use metadata_model::MetadataModel;
