//! Go source writer for beego ORM models.
//!
//! Produces, in order: the package clause, the import block, the struct
//! declaration, the `TableName` accessor and an `init` hook that registers
//! the model with the ORM.

use crate::model::{FieldSpec, ModelArtifact};
use crate::util::go_string_literal;

use super::RenderOptions;

/// Import path of the ORM registration facility
pub const ORM_IMPORT: &str = "github.com/astaxie/beego/orm";

const INDENT: &str = "    ";

/// Render a model artifact as Go source. Pure string composition.
pub fn render_model(artifact: &ModelArtifact, options: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(artifact.fields.len() + 16);

    lines.push(format!("package {}", options.package_name));
    lines.push(String::new());

    lines.push("import (".to_string());
    lines.push(format!("{}\"time\"", INDENT));
    lines.push(format!("{}\"{}\"", INDENT, ORM_IMPORT));
    lines.push(")".to_string());
    lines.push(String::new());

    lines.push(format!("type {} struct {{", artifact.type_name));
    for field in &artifact.fields {
        lines.push(format!("{}{}", INDENT, field_line(field)));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push(format!("func (t *{}) TableName() string {{", artifact.type_name));
    lines.push(format!(
        "{}return {}",
        INDENT,
        go_string_literal(&artifact.table_name)
    ));
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("func init() {".to_string());
    lines.push(format!(
        "{}orm.RegisterModel(new({}))",
        INDENT, artifact.type_name
    ));
    lines.push("}".to_string());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

/// `Name type` followed by the struct tag when the field carries metadata
fn field_line(field: &FieldSpec) -> String {
    let go_type = field.normalized_type.go_type();
    if field.has_metadata() {
        format!(
            "{} {} `orm:\"{}\" json:\"{}\"`",
            field.exported_name,
            go_type,
            field.orm_tag(),
            field.json_name
        )
    } else {
        format!("{} {}", field.exported_name, go_type)
    }
}
