//! Metadata model representation

use std::collections::HashMap;

use crate::parser::identifier_utils::split_qualified_name;
use crate::util::lower_key;

use super::TableDescriptor;

/// The complete source metadata model: every table seen across the schema
/// files, in declaration order, with case-insensitive lookup by
/// model-qualified name.
#[derive(Debug, Clone, Default)]
pub struct MetadataModel {
    tables: Vec<TableDescriptor>,
    index: HashMap<String, usize>,
}

impl MetadataModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table. A table with the same qualified name replaces the
    /// earlier definition (last schema file wins).
    pub fn add_table(&mut self, table: TableDescriptor) {
        let key = lower_key(&table.qualified_name());
        match self.index.get(&key) {
            Some(&pos) => self.tables[pos] = table,
            None => {
                self.index.insert(key, self.tables.len());
                self.tables.push(table);
            }
        }
    }

    /// Look up a table by model-qualified name, case-insensitively.
    /// Quoting is stripped; unqualified names resolve against `default_model`.
    pub fn find_table(&self, name: &str, default_model: &str) -> Option<&TableDescriptor> {
        let (model, table) = split_qualified_name(name, default_model);
        self.index
            .get(&lower_key(&format!("{}.{}", model, table)))
            .map(|&pos| &self.tables[pos])
    }

    pub fn tables(&self) -> &[TableDescriptor] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
