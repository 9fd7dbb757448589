//! Namespace resolution for cross-module type references.

use tracing::warn;

use crate::ir::{Field, Module, Record, SchemaGraph};
use crate::sanitize::sanitize;

/// Namespace path of a module, or `None` when the module is unknown.
/// A lookup miss is an answer, not an error.
pub fn path_of<'a>(graph: &'a SchemaGraph, module_name: &str) -> Option<&'a [String]> {
    graph.module(module_name).map(|m| m.namespace.as_slice())
}

/// Namespace prefix for symbols owned by `module_name`: the path joined
/// with `sep`, plus a trailing `sep`.
///
/// An unknown module degrades to an empty prefix; the resulting
/// reference is unqualified and most likely malformed in the output, so
/// the degradation is logged.
pub fn qualified_prefix(graph: &SchemaGraph, module_name: &str, sep: &str) -> String {
    match path_of(graph, module_name) {
        Some(path) => format!("{}{}", path.join(sep), sep),
        None => {
            warn!(
                module = module_name,
                "unresolved module reference, emitting empty namespace prefix"
            );
            String::new()
        }
    }
}

/// Fully qualified type name with an arbitrary separator (dots for
/// package references, dashes for file stems).
pub fn qualified_type_name(
    graph: &SchemaGraph,
    module_name: &str,
    type_name: &str,
    sep: &str,
) -> String {
    format!(
        "{}{}",
        qualified_prefix(graph, module_name, sep),
        sanitize(type_name)
    )
}

/// Package holding a record's parent type.
///
/// A record with no declared parent derives from the universal root
/// type in the fixed `object` child package of its own module's
/// namespace.
pub fn parent_type_package(graph: &SchemaGraph, module: &Module, record: &Record) -> String {
    match &record.parent {
        None => format!("{}.object", module.namespace_dots()),
        Some(parent) => qualified_type_name(graph, &parent.module, &parent.name, "."),
    }
}

/// Fully qualified parent type of a record.
pub fn parent_type_name(graph: &SchemaGraph, module: &Module, record: &Record) -> String {
    match &record.parent {
        None => format!("{}.object.Object", module.namespace_dots()),
        Some(parent) => format!(
            "{}.{}",
            qualified_type_name(graph, &parent.module, &parent.name, "."),
            sanitize(&parent.name)
        ),
    }
}

/// Package holding a field's declared type.
pub fn field_type_package(graph: &SchemaGraph, field: &Field) -> String {
    qualified_type_name(graph, &field.module, &field.ty, ".")
}
