//! In-memory catalog

use super::{Catalog, ColumnDescriptor};
use crate::error::ModelGenError;

/// A fixed set of tables held in memory, listed in insertion order
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tables: Vec<(String, Vec<ColumnDescriptor>)>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any existing table with the same name
    pub fn with_table(mut self, name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        self.add_table(name, columns);
        self
    }

    pub fn add_table(&mut self, name: impl Into<String>, columns: Vec<ColumnDescriptor>) {
        let name = name.into();
        match self.tables.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = columns,
            None => self.tables.push((name, columns)),
        }
    }
}

impl Catalog for StaticCatalog {
    fn list_tables(&mut self) -> Result<Vec<String>, ModelGenError> {
        Ok(self.tables.iter().map(|(name, _)| name.clone()).collect())
    }

    fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>, ModelGenError> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, columns)| columns.clone())
            .ok_or_else(|| ModelGenError::Schema {
                table: table.to_string(),
                message: "table does not exist".to_string(),
            })
    }
}
