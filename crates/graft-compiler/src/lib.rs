#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! graft compiler: compile-time dependency-injection graph compilation.
//!
//! This crate turns a declarative description of providers, imports, and
//! exports into a validated dependency graph:
//! - `classify` - per-member statement classification
//! - `build` - recursive graph construction over the root container
//! - `validate` - exporter completeness and provider-graph validation
//! - `identity` - canonical type identity keys
//! - `naming` - readable name assignment for generated accessors
//! - `report` - graph visualization and compilation reporting
//! - `analysis` - short-circuiting results with attributable failures
//!
//! # Example
//!
//! ```
//! use graft_model::Session;
//!
//! let session: Session = serde_json::from_str(r#"{
//!   "types": [
//!     {"path": "app.AppGraph", "kind": "class", "functions": [
//!       {"name": "provide_greeting", "return_type": {
//!         "path": "graft.scope.ExportedSingle",
//!         "args": [{"path": "std.String"}]
//!       }}
//!     ]}
//!   ],
//!   "roots": [{"root": "app.AppGraph"}]
//! }"#).unwrap();
//!
//! let graph = graft_compiler::compile(&session.types, &session.roots[0]).unwrap();
//! assert_eq!(graph.providers.len(), 1);
//! assert_eq!(graph.exports.len(), 1);
//! ```

pub mod analysis;
mod build;
mod classify;
pub mod graph;
pub mod identity;
pub mod naming;
pub mod report;
mod validate;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod identity_tests;
#[cfg(test)]
mod naming_tests;

pub use analysis::{Analysis, ErrorKind, Failure, Validate};
pub use graph::{Dependency, Export, ExportKind, Graph, Module, Provider, Scope};
pub use identity::TypeId;
pub use naming::assign_names;

use graft_model::{Declarations, RootSpec};

/// Compile one graph root: build the raw graph, validate exporters and the
/// provider graph, freeze into an immutable [`Graph`].
///
/// A pure function of its inputs; no process-wide state is consulted.
pub fn compile(decls: &Declarations, root: &RootSpec) -> Analysis<Graph> {
    build::build(decls, root)
        .validate(|raw| validate::validate_exporters(&raw.exporters, &raw.providers))
        .validate(|raw| validate::validate_providers(&raw.providers, &raw.claimed))
        .map(build::RawGraph::finish)
}

/// Compile every root independently. One root's failure does not abort its
/// siblings; results are aligned with the input slice.
pub fn compile_all(decls: &Declarations, roots: &[RootSpec]) -> Vec<Analysis<Graph>> {
    roots.iter().map(|root| compile(decls, root)).collect()
}
