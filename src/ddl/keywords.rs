//! Reserved-word table for the target engine.
//!
//! Seeded from sqlparser's reserved-for-alias tables (words no dialect will
//! accept as a bare alias) plus the classic SQL reserved list. Deliberately
//! not `ALL_KEYWORDS`: that table carries hundreds of non-reserved words
//! (NAME, TYPE, YEAR, ...) and would over-quote ordinary column names.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use sqlparser::keywords::{
    ALL_KEYWORDS, ALL_KEYWORDS_INDEX, RESERVED_FOR_COLUMN_ALIAS, RESERVED_FOR_TABLE_ALIAS,
};

/// SQL reserved words the engine rejects as bare identifiers
const ENGINE_RESERVED: &[&str] = &[
    "ALL", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "COLUMN", "CONSTRAINT",
    "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "ESCAPE",
    "EXCEPT", "EXISTS", "FALSE", "FOR", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IN",
    "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "LEFT", "LIKE", "LIMIT", "NOT", "NULL",
    "ON", "OR", "ORDER", "OUTER", "PRIMARY", "PROCEDURE", "RIGHT", "ROW", "SELECT", "SET", "SOME",
    "TABLE", "THEN", "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING", "VALUES", "VIEW",
    "WHEN", "WHERE", "WITH",
];

static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut words: HashSet<&'static str> = ENGINE_RESERVED.iter().copied().collect();
    for keyword in RESERVED_FOR_TABLE_ALIAS
        .iter()
        .chain(RESERVED_FOR_COLUMN_ALIAS.iter())
    {
        if let Some(pos) = ALL_KEYWORDS_INDEX.iter().position(|k| k == keyword) {
            words.insert(ALL_KEYWORDS[pos]);
        }
    }
    words
});

/// Whether a name is a reserved word of the target engine (case-insensitive)
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(name.to_uppercase().as_str())
}
