//! Schema IR — the fully-loaded module graph handed over by the schema
//! loader. Constructed once before generation and read-only after.

use serde::{Deserialize, Serialize};

use crate::{CodegenError, MAX_MODULE_NAME_LEN};

/// The complete schema: every module visible to cross-module lookups.
///
/// Resolvers take the whole graph as an explicit parameter; nothing in
/// this crate keeps ambient schema state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaGraph {
    pub modules: Vec<Module>,
}

impl SchemaGraph {
    /// Parse a graph from its JSON wire form.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    /// Find a module by short name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Find an enumeration by name and owning module.
    pub fn enumeration(&self, name: &str, module: &str) -> Option<&Enumeration> {
        self.module(module)?.enums.iter().find(|e| e.name == name)
    }
}

/// One schema unit: a versioned, namespaced set of records and
/// enumerations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Short identifying name, at most 8 characters.
    pub name: String,

    /// Numeric module id.
    pub id: u32,

    /// Schema version.
    pub version: u16,

    /// Ordered namespace path segments (e.g. `["afrl", "cmasi"]`).
    pub namespace: Vec<String>,

    /// Record definitions, in declaration order.
    #[serde(default)]
    pub structs: Vec<Record>,

    /// Enumeration definitions, in declaration order.
    #[serde(default)]
    pub enums: Vec<Enumeration>,
}

impl Module {
    /// Dotted namespace, the package reference form.
    pub fn namespace_dots(&self) -> String {
        self.namespace.join(".")
    }

    /// Enforce the short-name limit. Exactly 8 characters passes.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.name.chars().count() > MAX_MODULE_NAME_LEN {
            return Err(CodegenError::ModuleNameTooLong(self.name.clone()));
        }
        Ok(())
    }
}

/// A structured record type with an ordered field list and at most one
/// parent. `parent: None` derives from the universal root type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub name: String,

    /// Numeric id, unique within the owning module.
    pub id: u32,

    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub parent: Option<TypeRef>,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Reference to a type by name and owning module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub module: String,
}

/// A typed member of a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    /// Declared type name: a primitive keyword, or an enum/record name.
    pub ty: String,

    /// Module owning `ty`.
    pub module: String,

    #[serde(default)]
    pub doc: String,

    #[serde(default)]
    pub is_array: bool,

    /// Only meaningful when `is_array`: -1 is variable length, >= 0 a
    /// fixed length.
    #[serde(default = "variable_length")]
    pub length: i32,

    #[serde(default)]
    pub is_struct: bool,

    #[serde(default)]
    pub is_enum: bool,

    /// Literal default value; empty means "not specified".
    #[serde(default)]
    pub default: String,
}

fn variable_length() -> i32 {
    -1
}

impl Field {
    /// True for `string`-typed fields (type names match
    /// case-insensitively).
    pub fn is_string(&self) -> bool {
        self.ty.eq_ignore_ascii_case("string")
    }
}

/// A named enumeration; entry order and values are emitted verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enumeration {
    pub name: String,
    pub entries: Vec<EnumEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumEntry {
    pub name: String,
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn module_name_length_limit() {
        let mut module = testutil::module("eightchr", &["a", "b"]);
        assert!(module.validate().is_ok());
        module.name = "ninechars".into();
        assert!(module.validate().is_err());
    }

    #[test]
    fn graph_lookups() {
        let mut module = testutil::module("cmasi", &["afrl", "cmasi"]);
        module.enums.push(testutil::enumeration("SpeedType", &[("Airspeed", 0)]));
        let graph = testutil::graph(vec![module]);

        assert!(graph.module("cmasi").is_some());
        assert!(graph.module("unknown").is_none());
        assert!(graph.enumeration("SpeedType", "cmasi").is_some());
        assert!(graph.enumeration("SpeedType", "unknown").is_none());
        assert!(graph.enumeration("Missing", "cmasi").is_none());
    }

    #[test]
    fn graph_from_json() {
        let graph = SchemaGraph::from_json(
            r#"{
                "modules": [{
                    "name": "cmasi",
                    "id": 1,
                    "version": 3,
                    "namespace": ["afrl", "cmasi"],
                    "structs": [{
                        "name": "Waypoint",
                        "id": 35,
                        "fields": [{
                            "name": "Number",
                            "ty": "int64",
                            "module": "cmasi"
                        }]
                    }],
                    "enums": []
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.modules.len(), 1);
        let record = &graph.module("cmasi").unwrap().structs[0];
        assert!(record.parent.is_none());
        let field = &record.fields[0];
        assert!(!field.is_array);
        assert_eq!(field.length, -1);
        assert!(field.default.is_empty());
    }
}
