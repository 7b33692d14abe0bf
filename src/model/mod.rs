//! Schema-to-model translation

mod artifact;
mod field;
mod types;

pub use artifact::ModelArtifact;
pub use field::{render_field, Annotation, FieldSpec};
pub use types::{normalize, NormalizedType};
