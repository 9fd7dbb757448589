//! Enumeration emission: type declarations with representation clauses,
//! plus the per-module message-type table.

use crate::ir::{Enumeration, Module};
use crate::sanitize::sanitize;

const INDENT: &str = "   ";
const LIST_INDENT: &str = "      ";

/// One enumeration type declaration plus its representation clause.
/// Declared entry order and backing values are preserved exactly.
pub fn enum_declaration(en: &Enumeration) -> String {
    let name = format!("{}Enum", sanitize(&en.name));
    let names: Vec<String> = en.entries.iter().map(|e| sanitize(&e.name)).collect();
    let values: Vec<String> = en
        .entries
        .iter()
        .map(|e| format!("{}=>{}", sanitize(&e.name), e.value))
        .collect();
    format!(
        "{INDENT}type {name} is ({});\n{INDENT}for {name} use ({});\n\n",
        names.join(","),
        values.join(",")
    )
}

/// All enumeration declarations of a module, in declaration order.
pub fn enum_section(module: &Module) -> String {
    module.enums.iter().map(enum_declaration).collect()
}

/// Message-type entry names for every record in the module, one per
/// line, comma-separated.
pub fn message_name_list(module: &Module) -> String {
    let entries: Vec<String> = module
        .structs
        .iter()
        .map(|st| format!("{LIST_INDENT}{}_ENUM", sanitize(&st.name).to_uppercase()))
        .collect();
    if entries.is_empty() {
        return String::new();
    }
    format!("{}\n", entries.join(",\n"))
}

/// Message-type representation entries mapping each record to its
/// numeric id.
pub fn message_id_table(module: &Module) -> String {
    let entries: Vec<String> = module
        .structs
        .iter()
        .map(|st| {
            format!(
                "{LIST_INDENT}{}_ENUM => {}",
                sanitize(&st.name).to_uppercase(),
                st.id
            )
        })
        .collect();
    if entries.is_empty() {
        return String::new();
    }
    format!("{}\n", entries.join(",\n"))
}
