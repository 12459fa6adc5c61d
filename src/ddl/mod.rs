//! View DDL synthesis

mod identifier;
mod keywords;
mod view_builder;

pub use identifier::escape_sql_name;
pub use keywords::is_reserved;
pub use view_builder::{build_view_ddl, ViewSource};
