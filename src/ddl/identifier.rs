//! Identifier escaping for emitted DDL.
//!
//! A name is wrapped in double quotes if it is a reserved word, or if its
//! first character is not a letter, `#`, or `@`, or if any later character
//! is not a letter, digit, or underscore. Letters and digits are classified
//! per Unicode, not just ASCII.

use super::keywords::is_reserved;

/// Escape a single identifier for emission into DDL text.
pub fn escape_sql_name(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}

/// Escape a model-qualified table name, part by part.
pub fn escape_qualified_name(model: &str, name: &str) -> String {
    format!("{}.{}", escape_sql_name(model), escape_sql_name(name))
}

fn needs_quoting(name: &str) -> bool {
    if is_reserved(name) {
        return true;
    }
    let mut chars = name.chars();
    match chars.next() {
        None => return true,
        Some(first) => {
            if !(first.is_alphabetic() || first == '#' || first == '@') {
                return true;
            }
        }
    }
    chars.any(|c| !(c.is_alphanumeric() || c == '_'))
}
