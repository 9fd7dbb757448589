//! Cross-module inheritance resolution.
//!
//! A record with descendants anywhere in the graph must be handled
//! through a class-wide (dynamic-dispatch) handle so subtype instances
//! can substitute; a record with none is stored as a concrete leaf
//! reference.

use std::collections::BTreeSet;

use crate::ir::SchemaGraph;

/// All transitive descendants of `(type_name, module_name)`, as fully
/// qualified names (dotted namespace plus record name).
///
/// The result set doubles as the visited set: a child is only recursed
/// into on first insertion, so the walk terminates even if the schema
/// contains a parent cycle the loader failed to reject.
pub fn descendants(graph: &SchemaGraph, type_name: &str, module_name: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    collect(graph, type_name, module_name, &mut found);
    found
}

/// True if any record in the graph derives from the given type.
pub fn has_descendants(graph: &SchemaGraph, type_name: &str, module_name: &str) -> bool {
    !descendants(graph, type_name, module_name).is_empty()
}

fn collect(graph: &SchemaGraph, type_name: &str, module_name: &str, found: &mut BTreeSet<String>) {
    for module in &graph.modules {
        for record in &module.structs {
            let Some(parent) = &record.parent else {
                continue;
            };
            if parent.name == type_name && parent.module == module_name {
                let qualified = format!("{}.{}", module.namespace_dots(), record.name);
                if found.insert(qualified) {
                    collect(graph, &record.name, &module.name, found);
                }
            }
        }
    }
}
