//! Catalog reading: table enumeration and column descriptors

mod dsn;
mod memory;
mod mysql;

pub use dsn::{ConnectionTarget, Endpoint};
pub use memory::StaticCatalog;
pub use mysql::MySqlCatalog;

use crate::error::ModelGenError;

/// Source of table and column metadata.
///
/// Implementations must return columns in the database's native ordering;
/// field order in generated models follows it.
pub trait Catalog {
    /// List all tables in the current schema
    fn list_tables(&mut self) -> Result<Vec<String>, ModelGenError>;

    /// Describe the columns of one table, in declaration order
    fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>, ModelGenError>;
}

/// Key role of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyRole {
    #[default]
    None,
    Primary,
}

/// Column metadata as read from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Raw declared type, e.g. `varchar(255)` or `int(11)`
    pub declared_type: String,
    pub nullable: bool,
    pub key_role: KeyRole,
    pub is_auto_generated: bool,
    /// Read but not rendered
    pub default_value: Option<String>,
}

impl ColumnDescriptor {
    /// A non-nullable, non-key column with no default
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable: false,
            key_role: KeyRole::None,
            is_auto_generated: false,
            default_value: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.key_role = KeyRole::Primary;
        self
    }

    pub fn auto_generated(mut self) -> Self {
        self.is_auto_generated = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// One raw row of column metadata, shaped like MySQL's `DESCRIBE` output
#[derive(Debug, Clone, Default)]
pub struct CatalogRow {
    pub field: String,
    pub data_type: String,
    /// `YES` or `NO`
    pub null: String,
    /// `PRI`, `UNI`, `MUL` or empty
    pub key: String,
    pub default: Option<String>,
    /// e.g. `auto_increment`, `DEFAULT_GENERATED on update CURRENT_TIMESTAMP`
    pub extra: String,
}

/// Unrecognized flag values are treated as "not set".
impl From<CatalogRow> for ColumnDescriptor {
    fn from(row: CatalogRow) -> Self {
        let key_role = if row.key.trim() == "PRI" {
            KeyRole::Primary
        } else {
            KeyRole::None
        };
        let is_auto_generated = row
            .extra
            .split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("auto_increment"));

        Self {
            name: row.field,
            declared_type: row.data_type,
            nullable: row.null.trim().eq_ignore_ascii_case("YES"),
            key_role,
            is_auto_generated,
            default_value: row.default,
        }
    }
}
