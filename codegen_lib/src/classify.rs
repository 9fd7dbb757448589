//! Storage-category classification.
//!
//! Every legal (arity, kind) combination maps to exactly one category.
//! Consumers match exhaustively, so growing the set is a compile-time
//! visible change everywhere it matters.

use crate::inherit::has_descendants;
use crate::ir::{Field, SchemaGraph};

/// The twelve storage categories: {single, vector, fixed array} x
/// {primitive, enum, node struct, leaf struct}.
///
/// A node struct has descendants somewhere in the graph and is held
/// through a class-wide handle; a leaf struct is held as a concrete
/// owning reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    SinglePrimitive,
    SingleEnum,
    SingleNodeStruct,
    SingleLeafStruct,
    VectorPrimitive,
    VectorEnum,
    VectorNodeStruct,
    VectorLeafStruct,
    FixedArrayPrimitive,
    FixedArrayEnum,
    FixedArrayNodeStruct,
    FixedArrayLeafStruct,
}

impl TypeCategory {
    /// Variable-length sequence categories.
    pub fn is_vector(self) -> bool {
        matches!(
            self,
            TypeCategory::VectorPrimitive
                | TypeCategory::VectorEnum
                | TypeCategory::VectorNodeStruct
                | TypeCategory::VectorLeafStruct
        )
    }

    /// Single-arity categories — the only ones that get setters.
    pub fn is_single(self) -> bool {
        matches!(
            self,
            TypeCategory::SinglePrimitive
                | TypeCategory::SingleEnum
                | TypeCategory::SingleNodeStruct
                | TypeCategory::SingleLeafStruct
        )
    }
}

/// Classify a field: arity first, then kind.
///
/// Pure and total over the legal flag space. A field with both
/// `is_struct` and `is_enum` set is a loader contract violation and is
/// not detected here.
pub fn classify(graph: &SchemaGraph, field: &Field) -> TypeCategory {
    if !field.is_array {
        if !field.is_struct && !field.is_enum {
            return TypeCategory::SinglePrimitive;
        }
        if field.is_enum {
            return TypeCategory::SingleEnum;
        }
        if has_descendants(graph, &field.ty, &field.module) {
            return TypeCategory::SingleNodeStruct;
        }
        return TypeCategory::SingleLeafStruct;
    }
    if field.length == -1 {
        if !field.is_struct && !field.is_enum {
            return TypeCategory::VectorPrimitive;
        }
        if field.is_enum {
            return TypeCategory::VectorEnum;
        }
        if has_descendants(graph, &field.ty, &field.module) {
            return TypeCategory::VectorNodeStruct;
        }
        return TypeCategory::VectorLeafStruct;
    }
    if !field.is_struct && !field.is_enum {
        return TypeCategory::FixedArrayPrimitive;
    }
    if field.is_enum {
        return TypeCategory::FixedArrayEnum;
    }
    if has_descendants(graph, &field.ty, &field.module) {
        return TypeCategory::FixedArrayNodeStruct;
    }
    TypeCategory::FixedArrayLeafStruct
}
