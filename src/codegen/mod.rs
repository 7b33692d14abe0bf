//! Model source generation

mod go_writer;

pub use go_writer::{render_model, ORM_IMPORT};

/// Extension of generated source files
pub const FILE_EXTENSION: &str = "go";

/// Package clause used when none is configured
pub const DEFAULT_PACKAGE: &str = "packagemodel";

/// Options for rendering model source
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Go package clause of every generated file
    pub package_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
        }
    }
}
