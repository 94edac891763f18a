//! The validated dependency graph handed to code generation.
//!
//! Mutable indexes exist only inside the builder; once validation
//! succeeds the graph is frozen and consumed read-only by codegen and the
//! report exporter.

use graft_model::{FileId, NodeId, TypeRef};
use indexmap::IndexMap;

use crate::identity::TypeId;

/// Lifecycle policy of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// New instance per access.
    Factory,
    /// Created immediately at graph construction.
    Eager,
    /// Lazily created once, reused.
    Single,
}

/// A single required input of a provider or exporter.
#[derive(Debug, Clone)]
pub struct Dependency {
    pub id: TypeId,
    pub ty: TypeRef,
    /// Parameter or property name, used by codegen and error messages.
    pub name: String,
    pub nullable: bool,
    pub node: NodeId,
}

/// One dependency-producing declaration.
#[derive(Debug, Clone)]
pub struct Provider {
    pub id: TypeId,
    pub scope: Scope,
    pub exported: bool,
    pub ty: TypeRef,
    pub dependencies: Vec<Dependency>,
    /// Id of the module (or root) that declared this provider.
    pub source: TypeId,
    /// Member function name, the callable codegen invokes.
    pub reference: String,
    pub node: NodeId,
}

impl Provider {
    pub fn is_nullable(&self) -> bool {
        self.ty.nullable
    }
}

/// An imported container contributing providers to the graph.
#[derive(Debug, Clone)]
pub struct Module {
    pub id: TypeId,
    pub ty: TypeRef,
    /// Provider ids declared directly by this module.
    pub providers: Vec<TypeId>,
    /// Module ids this module imports itself.
    pub imports: Vec<TypeId>,
    /// Id of the importing module (or root).
    pub source: TypeId,
    pub reference: String,
    pub node: NodeId,
}

/// A published interface surface.
#[derive(Debug, Clone)]
pub struct Export {
    pub id: TypeId,
    pub ty: TypeRef,
    pub kind: ExportKind,
    pub reference: String,
    pub node: NodeId,
}

#[derive(Debug, Clone)]
pub enum ExportKind {
    /// Re-publishes exactly the provider of its own id.
    Delegated,
    /// Publishes an interface whose properties must each match a provider.
    Bracket { dependencies: Vec<Dependency> },
}

/// The fully validated aggregate for one dependency-injection root.
#[derive(Debug, Clone)]
pub struct Graph {
    pub root: TypeId,
    /// Host-declared accessor name; may be empty.
    pub name: String,
    /// Transitive file provenance of every contributing container.
    pub files: Vec<FileId>,
    pub modules: Vec<Module>,
    /// Insertion-ordered provider index.
    pub providers: IndexMap<TypeId, Provider>,
    pub exports: Vec<Export>,
}

impl Graph {
    /// Declared name, falling back to the root's short name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.root.short_name()
        } else {
            &self.name
        }
    }
}
