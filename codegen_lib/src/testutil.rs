//! Fixtures shared by the unit tests.

use crate::ir::{EnumEntry, Enumeration, Field, Module, Record, SchemaGraph, TypeRef};

pub fn graph(modules: Vec<Module>) -> SchemaGraph {
    SchemaGraph { modules }
}

pub fn module(name: &str, namespace: &[&str]) -> Module {
    Module {
        name: name.into(),
        id: 1,
        version: 3,
        namespace: namespace.iter().map(|s| s.to_string()).collect(),
        structs: vec![],
        enums: vec![],
    }
}

pub fn record(name: &str, id: u32) -> Record {
    Record {
        name: name.into(),
        id,
        doc: String::new(),
        parent: None,
        fields: vec![],
    }
}

pub fn extending(name: &str, id: u32, parent: &str, parent_module: &str) -> Record {
    Record {
        parent: Some(TypeRef {
            name: parent.into(),
            module: parent_module.into(),
        }),
        ..record(name, id)
    }
}

pub fn primitive(name: &str, ty: &str, module: &str) -> Field {
    Field {
        name: name.into(),
        ty: ty.into(),
        module: module.into(),
        doc: String::new(),
        is_array: false,
        length: -1,
        is_struct: false,
        is_enum: false,
        default: String::new(),
    }
}

pub fn enum_field(name: &str, ty: &str, module: &str) -> Field {
    Field {
        is_enum: true,
        ..primitive(name, ty, module)
    }
}

pub fn struct_field(name: &str, ty: &str, module: &str) -> Field {
    Field {
        is_struct: true,
        ..primitive(name, ty, module)
    }
}

pub fn vector(mut field: Field) -> Field {
    field.is_array = true;
    field.length = -1;
    field
}

pub fn fixed(mut field: Field, length: i32) -> Field {
    field.is_array = true;
    field.length = length;
    field
}

pub fn with_default(mut field: Field, default: &str) -> Field {
    field.default = default.into();
    field
}

pub fn enumeration(name: &str, entries: &[(&str, i64)]) -> Enumeration {
    Enumeration {
        name: name.into(),
        entries: entries
            .iter()
            .map(|(n, v)| EnumEntry {
                name: n.to_string(),
                value: *v,
            })
            .collect(),
    }
}
