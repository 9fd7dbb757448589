//! Default-value synthesis for single-arity fields.
//!
//! Container defaulting (an empty vector, an array filled per element)
//! belongs to the record emitter; this module only produces the
//! per-element literal.

use tracing::warn;

use crate::ir::{Field, SchemaGraph};
use crate::namespace::field_type_package;
use crate::sanitize::sanitize;

/// Initializer literal for a field, honoring an explicit default when
/// one is declared and falling back to the type's zero/false/empty
/// value otherwise.
///
/// Total: an unresolvable enumeration lookup degrades to an empty
/// literal rather than failing.
pub fn default_literal(graph: &SchemaGraph, field: &Field) -> String {
    if !field.default.is_empty() {
        return explicit_literal(field);
    }

    match field.ty.to_ascii_lowercase().as_str() {
        "byte" | "char" | "int16" | "uint16" | "int32" | "uint32" | "int64" => "0".into(),
        "bool" => "False".into(),
        "real32" | "real64" => "0.0".into(),
        "string" => "To_Unbounded_String(\"\")".into(),
        _ if field.is_enum => match graph
            .enumeration(&field.ty, &field.module)
            .and_then(|e| e.entries.first())
        {
            Some(entry) => entry.name.clone(),
            None => {
                warn!(
                    ty = %field.ty,
                    module = %field.module,
                    "cannot resolve enumeration for default value"
                );
                String::new()
            }
        },
        // Structs default to a freshly constructed owned instance.
        _ => format!(
            "new {}.{}",
            field_type_package(graph, field),
            sanitize(&field.ty)
        ),
    }
}

fn explicit_literal(field: &Field) -> String {
    match field.ty.to_ascii_lowercase().as_str() {
        "string" => format!("To_Unbounded_String(\"{}\")", field.default),
        "char" => format!("'{}'", field.default),
        "real32" | "real64" => {
            if field.default.contains('.') {
                field.default.clone()
            } else {
                format!("{}.0", field.default)
            }
        }
        _ if field.is_struct && field.default.eq_ignore_ascii_case("null") => "null".into(),
        // Integers, enum tokens and anything else pass through verbatim.
        _ => field.default.clone(),
    }
}
