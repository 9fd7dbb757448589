//! Container instantiations for variable-length fields.

use crate::ada::{element_type, vector_access, vector_package};
use crate::classify::classify;
use crate::ir::{Record, SchemaGraph};

const INDENT: &str = "   ";

/// One sequence-container instantiation per vector field, specialized
/// over the field's element representation, plus an access alias over
/// the instantiation. Fixed-length arrays use native array storage and
/// never get a container.
pub fn container_declarations(graph: &SchemaGraph, record: &Record) -> String {
    let mut out = String::new();
    for field in &record.fields {
        if !classify(graph, field).is_vector() {
            continue;
        }
        let package = vector_package(graph, field);
        let element = element_type(graph, field);
        out.push_str(&format!(
            "{INDENT}package {package} is new Ada.Containers.Vectors\n"
        ));
        out.push_str(&format!("{INDENT}  (Index_Type   => Natural,\n"));
        out.push_str(&format!("{INDENT}  Element_Type => {element});\n"));
        out.push_str(&format!(
            "{INDENT}type {} is access all {package}.Vector;\n",
            vector_access(graph, field)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn one_instantiation_per_vector_field() {
        let mut module = testutil::module("cmasi", &["afrl", "cmasi"]);
        module.structs.push(testutil::record("AbstractZone", 1));
        module
            .structs
            .push(testutil::extending("KeepInZone", 2, "AbstractZone", "cmasi"));
        let graph = testutil::graph(vec![module]);

        let mut record = testutil::record("MissionCommand", 36);
        record.fields.push(testutil::vector(testutil::primitive(
            "Numbers", "int64", "cmasi",
        )));
        record.fields.push(testutil::vector(testutil::struct_field(
            "Zones",
            "AbstractZone",
            "cmasi",
        )));
        record.fields.push(testutil::fixed(
            testutil::primitive("Pad", "byte", "cmasi"),
            4,
        ));

        let decls = container_declarations(&graph, &record);
        assert!(decls.contains("package Vect_Int64_t is new Ada.Containers.Vectors"));
        assert!(decls.contains("Element_Type => Int64_t);"));
        assert!(decls.contains("type Vect_Int64_t_Acc is access all Vect_Int64_t.Vector;"));
        assert!(decls.contains("package Vect_AbstractZone_Any is new Ada.Containers.Vectors"));
        // The fixed array contributes nothing.
        assert!(!decls.contains("Byte"));
    }

    #[test]
    fn no_vectors_no_output() {
        let graph = testutil::graph(vec![testutil::module("cmasi", &["afrl", "cmasi"])]);
        let mut record = testutil::record("Wedge", 16);
        record
            .fields
            .push(testutil::primitive("Azimuth", "real32", "cmasi"));
        assert_eq!(container_declarations(&graph, &record), "");
    }
}
