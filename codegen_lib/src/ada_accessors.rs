//! Accessor emission: getters and setters per storage category.
//!
//! Single-arity fields get a getter and a setter. Vector and
//! fixed-array fields get a getter only — callers mutate through the
//! returned handle.

use crate::ada::{element_type, fixed_array_type, this_type, vector_access};
use crate::classify::{classify, TypeCategory};
use crate::ir::{Field, Module, Record, SchemaGraph};
use crate::sanitize::sanitize;

const INDENT: &str = "   ";

/// Accessor declarations for every field of a record.
pub fn accessor_specs(graph: &SchemaGraph, module: &Module, record: &Record) -> String {
    let this = this_type(graph, &module.name, record);
    let mut out = String::new();
    for field in &record.fields {
        let name = sanitize(&field.name);
        let returned = return_type(graph, field);
        out.push_str(&format!(
            "{INDENT}function get{name}(this : {this}) return {returned};\n"
        ));
        if classify(graph, field).is_single() {
            out.push_str(&format!(
                "{INDENT}procedure set{name}(this : out {this}; {name} : in {returned});\n"
            ));
        }
    }
    out
}

/// Accessor bodies: expression-function getters and assignment setters.
pub fn accessor_bodies(graph: &SchemaGraph, module: &Module, record: &Record) -> String {
    let this = this_type(graph, &module.name, record);
    let mut out = String::new();
    for field in &record.fields {
        let name = sanitize(&field.name);
        let returned = return_type(graph, field);
        out.push_str(&format!(
            "{INDENT}function get{name}(this : {this}) return {returned} is (this.{name});\n"
        ));
        if classify(graph, field).is_single() {
            out.push_str(&format!(
                "{INDENT}procedure set{name}(this : out {this}; {name} : in {returned}) is\n{INDENT}begin\n"
            ));
            out.push_str(&format!("{INDENT}   this.{name} := {name};\n"));
            out.push_str(&format!("{INDENT}end set{name};\n\n"));
        }
    }
    out
}

/// Storage representation returned by a field's getter (and taken by
/// its setter, when one exists).
fn return_type(graph: &SchemaGraph, field: &Field) -> String {
    match classify(graph, field) {
        TypeCategory::SinglePrimitive
        | TypeCategory::SingleEnum
        | TypeCategory::SingleNodeStruct
        | TypeCategory::SingleLeafStruct => element_type(graph, field),
        TypeCategory::VectorPrimitive
        | TypeCategory::VectorEnum
        | TypeCategory::VectorNodeStruct
        | TypeCategory::VectorLeafStruct => vector_access(graph, field),
        TypeCategory::FixedArrayPrimitive
        | TypeCategory::FixedArrayEnum
        | TypeCategory::FixedArrayNodeStruct
        | TypeCategory::FixedArrayLeafStruct => {
            format!("access all {}", fixed_array_type(graph, field))
        }
    }
}
