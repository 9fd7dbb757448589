//! Ada naming conventions shared by the emitter operations.

use crate::inherit::has_descendants;
use crate::ir::{Field, Record, SchemaGraph};
use crate::namespace::{field_type_package, qualified_prefix};
use crate::sanitize::sanitize;

/// Ada type for a primitive schema type name. Unknown names pass
/// through untouched.
pub fn primitive_type(ty: &str) -> String {
    match ty.to_ascii_lowercase().as_str() {
        "byte" => "Byte".into(),
        "char" => "Character".into(),
        "bool" => "Boolean".into(),
        "int16" => "Int16_t".into(),
        "uint16" => "UInt16_t".into(),
        "int32" => "Int32_t".into(),
        "uint32" => "UInt32_t".into(),
        "int64" => "Int64_t".into(),
        "real32" => "Float_t".into(),
        "real64" => "Double_t".into(),
        "string" => "Unbounded_String".into(),
        _ => ty.to_string(),
    }
}

/// Enum type name (`SpeedType` becomes `SpeedTypeEnum`).
pub fn enum_type(ty: &str) -> String {
    format!("{}Enum", sanitize(ty))
}

/// Element representation of a field's type: primitive value, enum
/// value, class-wide handle for node structs, owning reference for leaf
/// structs. Shared by containers, accessors and fixed arrays.
pub fn element_type(graph: &SchemaGraph, field: &Field) -> String {
    if field.is_enum {
        enum_type(&field.ty)
    } else if field.is_struct {
        if has_descendants(graph, &field.ty, &field.module) {
            format!("{}_Any", sanitize(&field.ty))
        } else {
            format!("{}_Acc", sanitize(&field.ty))
        }
    } else {
        primitive_type(&field.ty)
    }
}

/// Namespace-qualified element representation, for record component
/// declarations where no `use` clause is in scope. Enums resolve into
/// their module's `enumerations` child package; structs into their own
/// package.
pub fn qualified_element_type(graph: &SchemaGraph, field: &Field) -> String {
    if field.is_enum {
        format!(
            "{}enumerations.{}",
            qualified_prefix(graph, &field.module, "."),
            enum_type(&field.ty)
        )
    } else if field.is_struct {
        format!(
            "{}.{}",
            field_type_package(graph, field),
            element_type(graph, field)
        )
    } else {
        primitive_type(&field.ty)
    }
}

/// Container package instantiated for a vector field.
pub fn vector_package(graph: &SchemaGraph, field: &Field) -> String {
    format!("Vect_{}", element_type(graph, field))
}

/// Access type over the instantiated container.
pub fn vector_access(graph: &SchemaGraph, field: &Field) -> String {
    format!("{}_Acc", vector_package(graph, field))
}

/// Anonymous fixed-size array type text.
pub fn fixed_array_type(graph: &SchemaGraph, field: &Field) -> String {
    format!(
        "array (Integer range 1 .. {}) of {}",
        field.length,
        element_type(graph, field)
    )
}

/// The `this` parameter type for accessors: class-wide when the record
/// has descendants, so subtype instances can substitute.
pub fn this_type(graph: &SchemaGraph, module_name: &str, record: &Record) -> String {
    let name = sanitize(&record.name);
    if has_descendants(graph, &record.name, module_name) {
        format!("{name}'Class")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn primitive_map() {
        assert_eq!(primitive_type("bool"), "Boolean");
        assert_eq!(primitive_type("real32"), "Float_t");
        assert_eq!(primitive_type("String"), "Unbounded_String");
        assert_eq!(primitive_type("Widget"), "Widget");
    }

    #[test]
    fn element_representations() {
        let mut module = testutil::module("cmasi", &["afrl", "cmasi"]);
        module.structs.push(testutil::record("AbstractZone", 1));
        module
            .structs
            .push(testutil::extending("KeepInZone", 2, "AbstractZone", "cmasi"));
        let graph = testutil::graph(vec![module]);

        let prim = testutil::primitive("a", "uint16", "cmasi");
        assert_eq!(element_type(&graph, &prim), "UInt16_t");

        let en = testutil::enum_field("b", "SpeedType", "cmasi");
        assert_eq!(element_type(&graph, &en), "SpeedTypeEnum");
        assert_eq!(
            qualified_element_type(&graph, &en),
            "afrl.cmasi.enumerations.SpeedTypeEnum"
        );

        let node = testutil::struct_field("c", "AbstractZone", "cmasi");
        assert_eq!(element_type(&graph, &node), "AbstractZone_Any");
        assert_eq!(
            qualified_element_type(&graph, &node),
            "afrl.cmasi.AbstractZone.AbstractZone_Any"
        );

        let leaf = testutil::struct_field("d", "KeepInZone", "cmasi");
        assert_eq!(element_type(&graph, &leaf), "KeepInZone_Acc");
        assert_eq!(vector_package(&graph, &leaf), "Vect_KeepInZone_Acc");
        assert_eq!(vector_access(&graph, &leaf), "Vect_KeepInZone_Acc_Acc");
    }

    #[test]
    fn this_type_is_class_wide_for_node_records() {
        let mut module = testutil::module("cmasi", &["afrl", "cmasi"]);
        module.structs.push(testutil::record("AbstractZone", 1));
        module
            .structs
            .push(testutil::extending("KeepInZone", 2, "AbstractZone", "cmasi"));
        let graph = testutil::graph(vec![module]);
        let module = graph.module("cmasi").unwrap();

        assert_eq!(
            this_type(&graph, &module.name, &module.structs[0]),
            "AbstractZone'Class"
        );
        assert_eq!(
            this_type(&graph, &module.name, &module.structs[1]),
            "KeepInZone"
        );
    }
}
