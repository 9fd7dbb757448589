//! Codegen library — shared code-emission logic for Ada message bindings.
//!
//! A schema loader hands over a fully-parsed, read-only module graph;
//! each generator composes the pure fragment operations in this crate
//! (classification, inheritance and namespace resolution, default
//! synthesis, the per-artifact emitters) into complete output files.

pub mod ada;
pub mod ada_accessors;
pub mod ada_binding;
pub mod ada_containers;
pub mod ada_enum;
pub mod ada_imports;
pub mod ada_record;
pub mod ada_scaffold;
pub mod classify;
pub mod defaults;
pub mod inherit;
pub mod ir;
pub mod namespace;
pub mod sanitize;

#[cfg(test)]
pub(crate) mod testutil;

use std::fs;
use std::path::Path;

use thiserror::Error;

pub use crate::ir::SchemaGraph;

/// Modules identify themselves by a short name; the wire format caps it.
pub const MAX_MODULE_NAME_LEN: usize = 8;

/// Fatal generation errors. Unresolved lookups are not errors — they
/// degrade (see [`namespace`]).
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("module name '{0}' exceeds {MAX_MODULE_NAME_LEN} characters")]
    ModuleNameTooLong(String),
}

/// Codegen trait — implement this for each target language.
pub trait Codegen {
    fn generate(&self, graph: &SchemaGraph) -> anyhow::Result<GeneratedCode>;
    fn language(&self) -> &str;
}

#[derive(Debug)]
pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

/// One output artifact. `path` is relative to the output root; the
/// writer owns placement.
#[derive(Debug)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Write generated files under `dir`.
///
/// Always overwrites: sibling modules regenerate identical ancestor
/// namespace packages, so writes must be idempotent rather than
/// fail-on-exists, and no ordering between writers is needed.
pub fn write_files(dir: &Path, code: &GeneratedCode) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    for file in &code.files {
        let path = dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        tracing::debug!(path = %path.display(), "writing generated file");
        fs::write(&path, &file.content)?;
    }
    Ok(())
}
