//! Namespace scaffolding: empty ancestor packages plus the leaf
//! namespace package for a module.

use crate::ir::Module;
use crate::GeneratedFile;

/// Output of [`namespace_scaffold`]: ancestor package artifacts for the
/// file writer, and the leaf package text for the assembler.
pub struct NamespaceScaffold {
    /// Ancestor-first empty packages, one per namespace prefix above
    /// the leaf. Sibling modules regenerate identical content, so the
    /// writer must overwrite rather than fail on existing files.
    pub ancestors: Vec<GeneratedFile>,
    /// Leaf-level namespace package declaration.
    pub leaf: String,
}

/// For a namespace of N segments, produce N-1 empty ancestor packages
/// (outermost first) and the leaf package text, which pulls in the
/// module's root-object and primitive-type support packages.
pub fn namespace_scaffold(module: &Module) -> NamespaceScaffold {
    let segments = &module.namespace;

    let mut ancestors = Vec::new();
    for depth in 1..segments.len() {
        let package = segments[..depth].join(".");
        ancestors.push(GeneratedFile {
            path: format!("{}.ads", package.to_lowercase()),
            content: format!("package {package} is\n\nend {package};\n"),
        });
    }

    let package = module.namespace_dots();
    let leaf = format!(
        "with {package}.object; use {package}.object;\n\
         with {package}.types; use {package}.types;\n\n\
         package {package} is\n\nend {package};\n"
    );

    NamespaceScaffold { ancestors, leaf }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn three_segments_yield_two_ancestors() {
        let module = testutil::module("cmasi", &["avtas", "afrl", "cmasi"]);
        let scaffold = namespace_scaffold(&module);

        assert_eq!(scaffold.ancestors.len(), 2);
        assert_eq!(scaffold.ancestors[0].path, "avtas.ads");
        assert!(scaffold.ancestors[0]
            .content
            .contains("package avtas is\n\nend avtas;"));
        assert_eq!(scaffold.ancestors[1].path, "avtas.afrl.ads");
        assert!(scaffold.ancestors[1]
            .content
            .contains("package avtas.afrl is\n\nend avtas.afrl;"));

        assert!(scaffold.leaf.contains("package avtas.afrl.cmasi is"));
        assert!(scaffold
            .leaf
            .contains("with avtas.afrl.cmasi.object; use avtas.afrl.cmasi.object;"));
    }

    #[test]
    fn single_segment_has_no_ancestors() {
        let module = testutil::module("base", &["base"]);
        let scaffold = namespace_scaffold(&module);
        assert!(scaffold.ancestors.is_empty());
        assert!(scaffold.leaf.contains("package base is"));
    }
}
