#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Declaration model consumed by the graft graph compiler.
//!
//! The compiler does not parse host source files. An external
//! symbol-resolution layer hands it pre-resolved declaration objects:
//! type declarations with their member functions and properties, fully
//! resolved type references, visibility levels, and opaque attribution
//! handles back into the host's syntax tree. This crate is that input
//! surface, serde-deserializable so a host (or the CLI harness) can feed
//! the compiler from a JSON session file.

mod decl;
mod ty;


pub use decl::{FunctionDecl, ParamDecl, PropertyDecl, TypeDecl, TypeKind};
pub use ty::{FileId, NodeId, TypeRef, Visibility};

use indexmap::IndexMap;
use serde::Deserialize;

/// The resolved symbol universe for one compilation session.
///
/// Keyed by fully-qualified path, insertion-ordered. Lookup misses are
/// normal: provided types (primitives, third-party classes) need no entry
/// here unless the compiler has to inspect their declaration (import
/// targets, export interfaces, typealiases).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<TypeDecl>")]
pub struct Declarations {
    types: IndexMap<String, TypeDecl>,
}

impl Declarations {
    pub fn new(types: impl IntoIterator<Item = TypeDecl>) -> Self {
        Self {
            types: types
                .into_iter()
                .map(|decl| (decl.path.clone(), decl))
                .collect(),
        }
    }

    pub fn get(&self, path: &str) -> Option<&TypeDecl> {
        self.types.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl From<Vec<TypeDecl>> for Declarations {
    fn from(types: Vec<TypeDecl>) -> Self {
        Self::new(types)
    }
}

/// One graph root to compile.
///
/// `name` is the host-declared accessor name; empty means "derive from
/// the root declaration's short name".
#[derive(Debug, Clone, Deserialize)]
pub struct RootSpec {
    pub root: String,
    #[serde(default)]
    pub name: String,
}

/// Top-level session file: the symbol universe plus the graph roots
/// discovered in it. Each root compiles independently.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub types: Declarations,
    #[serde(default)]
    pub roots: Vec<RootSpec>,
}
