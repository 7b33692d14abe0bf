//! Writing generated models to disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::FILE_EXTENSION;
use crate::error::ModelGenError;

/// Output directory used when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "models";

/// Sink for rendered model source
pub trait Emitter {
    /// Persist one file, returning where it was written
    fn emit(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, ModelGenError>;
}

/// File name of a table's artifact: the lower-cased table name plus extension
pub fn artifact_file_name(table: &str) -> String {
    format!("{}.{}", table.to_lowercase(), FILE_EXTENSION)
}

/// Writes each artifact into one directory.
///
/// Contents go to a sibling temporary file first and are renamed into place,
/// so a model file is either complete or absent.
#[derive(Debug, Clone)]
pub struct FsEmitter {
    output_dir: PathBuf,
}

impl FsEmitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Emitter for FsEmitter {
    fn emit(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, ModelGenError> {
        let path = self.output_dir.join(file_name);
        let emit_error = |source: std::io::Error| ModelGenError::Emit {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.output_dir).map_err(emit_error)?;

        let staging = self.output_dir.join(format!(".{}.tmp", file_name));
        if let Err(e) = fs::write(&staging, contents) {
            let _ = fs::remove_file(&staging);
            return Err(emit_error(e));
        }
        if let Err(e) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(emit_error(e));
        }

        Ok(path)
    }
}
