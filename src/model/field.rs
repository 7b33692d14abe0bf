//! Field rendering: one column descriptor to one struct field

use std::fmt;

use super::types::{normalize, NormalizedType};
use crate::catalog::{ColumnDescriptor, KeyRole};
use crate::util::capitalize_first;

/// An ORM annotation attribute attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Binds the field to its original column name
    Column(String),
    PrimaryKey,
    AutoGenerated,
    Nullable,
}

/// Renders the beego `orm` tag token
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Column(name) => write!(f, "column({});", name),
            Annotation::PrimaryKey => f.write_str("pk;"),
            Annotation::AutoGenerated => f.write_str("auto;"),
            Annotation::Nullable => f.write_str("null;"),
        }
    }
}

/// A struct field derived from one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub column_name: String,
    pub exported_name: String,
    pub normalized_type: NormalizedType,
    /// Column binding first, then primary key, auto-generated, nullable
    pub annotations: Vec<Annotation>,
    /// Serialization key, the lower-cased column name
    pub json_name: String,
}

impl FieldSpec {
    /// True when anything beyond the bare column binding is set
    pub fn has_metadata(&self) -> bool {
        self.annotations
            .iter()
            .any(|a| !matches!(a, Annotation::Column(_)))
    }

    /// The concatenated `orm` tag body, e.g. `column(id);pk;auto;`
    pub fn orm_tag(&self) -> String {
        self.annotations.iter().map(ToString::to_string).collect()
    }
}

/// Render one column into a field. Total; never fails.
pub fn render_field(column: &ColumnDescriptor) -> FieldSpec {
    let mut annotations = vec![Annotation::Column(column.name.clone())];
    if column.key_role == KeyRole::Primary {
        annotations.push(Annotation::PrimaryKey);
    }
    if column.is_auto_generated {
        annotations.push(Annotation::AutoGenerated);
    }
    if column.nullable {
        annotations.push(Annotation::Nullable);
    }

    FieldSpec {
        column_name: column.name.clone(),
        exported_name: capitalize_first(&column.name),
        normalized_type: normalize(&column.declared_type),
        annotations,
        json_name: column.name.to_lowercase(),
    }
}
