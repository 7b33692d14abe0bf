//! rust-modelgen: generate ORM model structs from a live database schema
//!
//! This library reads table and column metadata from a MySQL catalog and
//! renders one beego ORM model (a Go struct with `orm`/`json` tags, a
//! `TableName` accessor and a registration hook) per table.

pub mod catalog;
pub mod codegen;
pub mod emit;
pub mod error;
pub mod model;
pub mod util;

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

pub use catalog::{Catalog, ColumnDescriptor, ConnectionTarget, KeyRole};
pub use codegen::RenderOptions;
pub use emit::{artifact_file_name, Emitter, FsEmitter};
pub use error::ModelGenError;
pub use model::ModelArtifact;

/// What to do when a single table fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the run on the first failing table
    #[default]
    FailFast,
    /// Record the failure and move on to the next table
    ContinueOnError,
}

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the model files are written into
    pub output_dir: PathBuf,
    /// Rendering options (package clause)
    pub render: RenderOptions,
    pub failure_policy: FailurePolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(emit::DEFAULT_OUTPUT_DIR),
            render: RenderOptions::default(),
            failure_policy: FailurePolicy::FailFast,
        }
    }
}

/// Result of generating one table
#[derive(Debug)]
pub struct TableOutcome {
    pub table: String,
    /// Path of the written model on success
    pub result: Result<PathBuf, ModelGenError>,
}

/// Per-table results of a run, in catalog order
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<TableOutcome>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Paths of every model written
    pub fn written_files(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .collect()
    }
}

/// Describe one table and render its model source
pub fn render_table<C: Catalog + ?Sized>(
    catalog: &mut C,
    table: &str,
    options: &RenderOptions,
) -> Result<String, ModelGenError> {
    let columns = catalog.describe_table(table)?;
    for column in &columns {
        tracing::debug!(
            table,
            column = %column.name,
            declared_type = %column.declared_type,
            nullable = column.nullable,
            key = ?column.key_role,
            auto = column.is_auto_generated,
            "column"
        );
    }

    let artifact = ModelArtifact::from_columns(table, &columns);
    Ok(codegen::render_model(&artifact, options))
}

/// Generate models for every table in the catalog.
///
/// Tables are processed one at a time in catalog order. Failing to list the
/// tables aborts before anything is written; per-table failures follow
/// `options.failure_policy`.
pub fn generate_models<C, E>(
    catalog: &mut C,
    emitter: &mut E,
    options: &GenerateOptions,
) -> Result<GenerationReport, ModelGenError>
where
    C: Catalog + ?Sized,
    E: Emitter + ?Sized,
{
    let tables = catalog.list_tables()?;

    tracing::info!("Found {} tables", tables.len());

    let mut report = GenerationReport::default();
    // file name -> (table, path) for every model written so far
    let mut claimed: HashMap<String, (String, PathBuf)> = HashMap::new();
    for table in tables {
        let file_name = artifact_file_name(&table);
        let result = match claimed.get(&file_name) {
            Some((owner, path)) => Err(file_name_collision(&file_name, owner, path)),
            None => render_table(catalog, &table, &options.render)
                .and_then(|source| emitter.emit(&file_name, &source)),
        };

        match result {
            Ok(path) => {
                println!("Generated model for table: {}", table);
                tracing::debug!(table = %table, path = %path.display(), "model written");
                claimed.insert(file_name, (table.clone(), path.clone()));
                report.outcomes.push(TableOutcome {
                    table,
                    result: Ok(path),
                });
            }
            Err(e) => match options.failure_policy {
                FailurePolicy::FailFast => return Err(e),
                FailurePolicy::ContinueOnError => {
                    tracing::warn!(table = %table, error = %e, "skipping table");
                    report.outcomes.push(TableOutcome {
                        table,
                        result: Err(e),
                    });
                }
            },
        }
    }

    tracing::info!(
        "Generated {} models ({} failed)",
        report.succeeded(),
        report.failed()
    );

    Ok(report)
}

/// Tables whose names differ only by case map to the same file
fn file_name_collision(file_name: &str, owner: &str, path: &Path) -> ModelGenError {
    ModelGenError::Emit {
        path: path.to_path_buf(),
        source: io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} was already written for table {}", file_name, owner),
        ),
    }
}

/// Connect to the database behind `dsn` and write its models to disk
pub fn generate_from_database(
    dsn: &str,
    options: &GenerateOptions,
) -> Result<GenerationReport, ModelGenError> {
    let target = ConnectionTarget::parse(dsn)?;

    tracing::info!("Connecting to {}", target);

    let mut catalog = catalog::MySqlCatalog::connect(&target)?;
    let mut emitter = FsEmitter::new(&options.output_dir);

    let report = generate_models(&mut catalog, &mut emitter, options);
    catalog.close();
    report
}
