//! Ada binding generator: composes the fragment operations into
//! complete compilation units.

use anyhow::Result;

use crate::ada_accessors::{accessor_bodies, accessor_specs};
use crate::ada_containers::container_declarations;
use crate::ada_enum::{enum_section, message_id_table, message_name_list};
use crate::ada_imports::import_list;
use crate::ada_record::record_fields;
use crate::ada_scaffold::namespace_scaffold;
use crate::ir::{Module, Record, SchemaGraph};
use crate::namespace::{parent_type_name, parent_type_package, qualified_type_name};
use crate::sanitize::sanitize;
use crate::{Codegen, GeneratedCode, GeneratedFile};

pub struct AdaBindingGenerator;

impl Codegen for AdaBindingGenerator {
    fn generate(&self, graph: &SchemaGraph) -> Result<GeneratedCode> {
        let mut files = Vec::new();

        for module in &graph.modules {
            module.validate()?;
            tracing::debug!(module = %module.name, "generating module");

            let scaffold = namespace_scaffold(module);
            files.extend(scaffold.ancestors);
            files.push(GeneratedFile {
                path: format!("{}.ads", module.namespace_dots().to_lowercase()),
                content: scaffold.leaf,
            });

            if !module.enums.is_empty() || !module.structs.is_empty() {
                files.push(GeneratedFile {
                    path: format!(
                        "{}.enumerations.ads",
                        module.namespace_dots().to_lowercase()
                    ),
                    content: enumerations_package(module),
                });
            }

            for record in &module.structs {
                let stem =
                    qualified_type_name(graph, &module.name, &record.name, "-").to_lowercase();
                files.push(GeneratedFile {
                    path: format!("{stem}.ads"),
                    content: record_spec(graph, module, record),
                });
                files.push(GeneratedFile {
                    path: format!("{stem}.adb"),
                    content: record_body(graph, module, record),
                });
            }
        }

        Ok(GeneratedCode { files })
    }

    fn language(&self) -> &str {
        "ada"
    }
}

fn header(module: &Module) -> String {
    format!(
        "-- Module {} (id {}, version {})\n\n",
        module.name, module.id, module.version
    )
}

/// Per-module enumerations package: every declared enumeration plus the
/// message-type table mapping record names to their numeric ids.
fn enumerations_package(module: &Module) -> String {
    let package = format!("{}.enumerations", module.namespace_dots());
    let mut out = header(module);
    out.push_str(&format!("package {package} is\n\n"));
    out.push_str(&enum_section(module));
    if !module.structs.is_empty() {
        out.push_str("   type MessageType is (\n");
        out.push_str(&message_name_list(module));
        out.push_str("   );\n");
        out.push_str("   for MessageType use (\n");
        out.push_str(&message_id_table(module));
        out.push_str("   );\n\n");
    }
    out.push_str(&format!("end {package};\n"));
    out
}

fn record_spec(graph: &SchemaGraph, module: &Module, record: &Record) -> String {
    let package = qualified_type_name(graph, &module.name, &record.name, ".");
    let name = sanitize(&record.name);
    let parent_pkg = parent_type_package(graph, module, record);
    let parent = parent_type_name(graph, module, record);

    let mut out = header(module);
    let doc = collapse(&record.doc);
    if !doc.is_empty() {
        out.push_str(&format!("-- {doc}\n"));
    }
    out.push_str(&format!("with {parent_pkg}; use {parent_pkg};\n"));
    out.push_str(&import_list(graph, record));
    out.push_str(&format!("package {package} is\n\n"));

    let containers = container_declarations(graph, record);
    if !containers.is_empty() {
        out.push_str(&containers);
        out.push('\n');
    }

    out.push_str(&format!("   type {name} is new {parent} with record\n"));
    out.push_str(&record_fields(graph, record));
    out.push_str("   end record;\n");
    out.push_str(&format!("   type {name}_Acc is access all {name};\n"));
    out.push_str(&format!(
        "   type {name}_Any is access all {name}'Class;\n\n"
    ));
    out.push_str(&accessor_specs(graph, module, record));
    out.push_str(&format!("\nend {package};\n"));
    out
}

fn record_body(graph: &SchemaGraph, module: &Module, record: &Record) -> String {
    let package = qualified_type_name(graph, &module.name, &record.name, ".");
    let mut out = header(module);
    out.push_str(&format!("package body {package} is\n\n"));
    out.push_str(&accessor_bodies(graph, module, record));
    out.push_str(&format!("\nend {package};\n"));
    out
}

fn collapse(doc: &str) -> String {
    doc.split_whitespace().collect::<Vec<_>>().join(" ")
}
