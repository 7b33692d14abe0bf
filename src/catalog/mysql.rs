//! MySQL catalog reader backed by `information_schema`

use sqlx::mysql::MySqlConnection;
use sqlx::Connection;
use tokio::runtime::{Builder, Runtime};

use super::dsn::ConnectionTarget;
use super::{Catalog, CatalogRow, ColumnDescriptor};
use crate::error::ModelGenError;

/// Same ordering as `SHOW TABLES`
const LIST_TABLES_SQL: &str = "SELECT CAST(TABLE_NAME AS CHAR) \
     FROM information_schema.TABLES \
     WHERE TABLE_SCHEMA = DATABASE() \
     ORDER BY TABLE_NAME";

/// The `DESCRIBE` sextet, in declaration order
const DESCRIBE_TABLE_SQL: &str = "SELECT CAST(COLUMN_NAME AS CHAR), \
            CAST(COLUMN_TYPE AS CHAR), \
            CAST(IS_NULLABLE AS CHAR), \
            CAST(COLUMN_KEY AS CHAR), \
            CAST(COLUMN_DEFAULT AS CHAR), \
            CAST(EXTRA AS CHAR) \
     FROM information_schema.COLUMNS \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

type DescribeRow = (String, String, String, String, Option<String>, String);

/// A single read-only connection to one MySQL schema.
///
/// Queries are driven to completion on a private current-thread runtime, so
/// every call blocks until the server answers or the transport fails.
pub struct MySqlCatalog {
    runtime: Runtime,
    conn: MySqlConnection,
    target: ConnectionTarget,
}

impl MySqlCatalog {
    /// Open a connection to the target's database
    pub fn connect(target: &ConnectionTarget) -> Result<Self, ModelGenError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| ModelGenError::Runtime { source })?;

        let options = target.connect_options();
        let conn = runtime
            .block_on(MySqlConnection::connect_with(&options))
            .map_err(|source| ModelGenError::Connectivity {
                target: target.to_string(),
                source,
            })?;

        tracing::debug!(target = %target, "connected to catalog");

        Ok(Self {
            runtime,
            conn,
            target: target.clone(),
        })
    }

    /// Close the connection gracefully
    pub fn close(self) {
        let Self { runtime, conn, .. } = self;
        if let Err(e) = runtime.block_on(conn.close()) {
            tracing::debug!(error = %e, "error while closing catalog connection");
        }
    }
}

impl Catalog for MySqlCatalog {
    fn list_tables(&mut self) -> Result<Vec<String>, ModelGenError> {
        let conn = &mut self.conn;
        let rows: Vec<(String,)> = self
            .runtime
            .block_on(sqlx::query_as(LIST_TABLES_SQL).fetch_all(conn))
            .map_err(|source| ModelGenError::Connectivity {
                target: self.target.to_string(),
                source,
            })?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    fn describe_table(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>, ModelGenError> {
        let conn = &mut self.conn;
        let rows: Vec<DescribeRow> = self
            .runtime
            .block_on(sqlx::query_as(DESCRIBE_TABLE_SQL).bind(table).fetch_all(conn))
            .map_err(|source| ModelGenError::SchemaQuery {
                table: table.to_string(),
                source,
            })?;

        if rows.is_empty() {
            return Err(ModelGenError::Schema {
                table: table.to_string(),
                message: "table does not exist or has no columns".to_string(),
            });
        }

        Ok(rows
            .into_iter()
            .map(|(field, data_type, null, key, default, extra)| {
                ColumnDescriptor::from(CatalogRow {
                    field,
                    data_type,
                    null,
                    key,
                    default,
                    extra,
                })
            })
            .collect())
    }
}
