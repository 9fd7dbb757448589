//! Record component declarations: per-field comments and storage
//! declarations with initializers.

use crate::ada::{qualified_element_type, vector_access, vector_package};
use crate::classify::{classify, TypeCategory};
use crate::defaults::default_literal;
use crate::ir::{Record, SchemaGraph};
use crate::sanitize::sanitize;

const INDENT: &str = "      ";

/// Component declarations for a record body.
///
/// A record with no fields yields the explicit `null;` component list,
/// never an empty string.
pub fn record_fields(graph: &SchemaGraph, record: &Record) -> String {
    if record.fields.is_empty() {
        return format!("{INDENT}null;\n");
    }

    let mut out = String::new();
    for field in &record.fields {
        out.push_str(&comment_line(&field.doc));
        let name = sanitize(&field.name);
        match classify(graph, field) {
            TypeCategory::SinglePrimitive
            | TypeCategory::SingleEnum
            | TypeCategory::SingleNodeStruct
            | TypeCategory::SingleLeafStruct => {
                out.push_str(&format!(
                    "{INDENT}{name} : {} := {};\n",
                    qualified_element_type(graph, field),
                    default_literal(graph, field)
                ));
            }
            TypeCategory::VectorPrimitive
            | TypeCategory::VectorEnum
            | TypeCategory::VectorNodeStruct
            | TypeCategory::VectorLeafStruct => {
                out.push_str(&format!(
                    "{INDENT}{name} : {} := new {}.Vector;\n",
                    vector_access(graph, field),
                    vector_package(graph, field)
                ));
            }
            TypeCategory::FixedArrayPrimitive
            | TypeCategory::FixedArrayEnum
            | TypeCategory::FixedArrayNodeStruct
            | TypeCategory::FixedArrayLeafStruct => {
                out.push_str(&format!(
                    "{INDENT}{name} : array (Integer range 1 .. {}) of {} := (others => {});\n",
                    field.length,
                    qualified_element_type(graph, field),
                    default_literal(graph, field)
                ));
            }
        }
    }
    out
}

/// Comment line for a field: internal whitespace collapsed to single
/// spaces, `<br>`/`<br/>` soft-break markers turned into real comment
/// line breaks.
fn comment_line(doc: &str) -> String {
    let collapsed = doc.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return format!("{INDENT}--\n");
    }
    let continuation = format!("\n{INDENT}-- ");
    let broken = collapsed
        .replace("<br/>", &continuation)
        .replace("<br>", &continuation);
    format!("{INDENT}-- {broken}\n")
}
