//! Import (`with`/`use`) list for a record's compilation unit.

use crate::classify::classify;
use crate::ir::{Record, SchemaGraph};
use crate::namespace::field_type_package;

/// One `with`/`use` pair per struct-typed field occurrence, in schema
/// order — repeated types are emitted once per occurrence — plus the
/// container package when any field is a vector and the unbounded
/// string package when any field is string-typed.
pub fn import_list(graph: &SchemaGraph, record: &Record) -> String {
    let mut lines: Vec<String> = Vec::new();

    for field in &record.fields {
        if field.is_struct {
            let package = field_type_package(graph, field);
            lines.push(format!("with {package}; use {package};\n"));
        }
    }

    if record
        .fields
        .iter()
        .any(|f| classify(graph, f).is_vector())
    {
        lines.push("with Ada.Containers.Vectors;\n".into());
    }

    if record.fields.iter().any(|f| f.is_string()) {
        lines.push("with Ada.Strings.Unbounded; use Ada.Strings.Unbounded;\n".into());
    }

    lines.push("\n".into());
    lines.concat()
}
