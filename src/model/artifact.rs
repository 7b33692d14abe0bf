//! Model artifacts: one per table

use super::field::{render_field, FieldSpec};
use crate::catalog::ColumnDescriptor;
use crate::util::capitalize_first;

/// Everything needed to render one table's model.
///
/// Fields follow catalog column order one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    pub type_name: String,
    /// Original table name, returned verbatim by the generated accessor
    pub table_name: String,
    pub fields: Vec<FieldSpec>,
}

impl ModelArtifact {
    pub fn new(table_name: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            type_name: capitalize_first(table_name),
            table_name: table_name.to_string(),
            fields,
        }
    }

    /// Build from catalog columns, rendering each into a field
    pub fn from_columns(table_name: &str, columns: &[ColumnDescriptor]) -> Self {
        Self::new(table_name, columns.iter().map(render_field).collect())
    }
}
