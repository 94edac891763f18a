//! Post-construction validation passes.
//!
//! Two passes run over the raw graph: exporter completeness, then a
//! depth-first walk of the provider graph that catches cycles, missing
//! providers, nullability contract violations, and dead providers.

use indexmap::{IndexMap, IndexSet};

use crate::analysis::{Analysis, ErrorKind, Failure, fail};
use crate::graph::{Export, ExportKind, Provider, Scope};
use crate::identity::TypeId;

/// Every bracket exporter property must be backed by a provider, and a
/// bracket exporter's own id must not collide with a provider.
pub(crate) fn validate_exporters(
    exporters: &IndexMap<TypeId, Export>,
    providers: &IndexMap<TypeId, Provider>,
) -> Analysis<()> {
    for export in exporters.values() {
        let ExportKind::Bracket { dependencies } = &export.kind else {
            continue;
        };
        if let Some(provider) = providers.get(&export.id) {
            return Err(Failure::new(
                ErrorKind::Clash,
                "Exporter declaration clashes with a provider",
                export.node,
            )
            .with(provider.node));
        }
        let mut missing = dependencies
            .iter()
            .filter(|dep| !providers.contains_key(&dep.id))
            .map(|dep| dep.node);
        if let Some(first) = missing.next() {
            return Err(Failure::new(
                ErrorKind::Unsatisfiable,
                "Undefined provider for exporter's property",
                first,
            )
            .with_all(missing));
        }
    }
    Ok(())
}

/// Walk the provider graph depth-first from every provider.
///
/// `validated` carries across roots of the walk so shared subtrees are
/// checked once; `path` is the ids on the current descent, in order, for
/// cycle rendering.
pub(crate) fn validate_providers(
    providers: &IndexMap<TypeId, Provider>,
    claimed: &IndexSet<TypeId>,
) -> Analysis<()> {
    let mut validated: IndexSet<TypeId> = IndexSet::new();
    for provider in providers.values() {
        if validated.contains(&provider.id) {
            continue;
        }
        let mut path = IndexSet::new();
        visit(provider, providers, claimed, &mut validated, &mut path)?;
    }
    Ok(())
}

fn visit(
    provider: &Provider,
    providers: &IndexMap<TypeId, Provider>,
    claimed: &IndexSet<TypeId>,
    validated: &mut IndexSet<TypeId>,
    path: &mut IndexSet<TypeId>,
) -> Analysis<()> {
    path.insert(provider.id.clone());
    for dep in &provider.dependencies {
        let is_validated = validated.contains(&dep.id);
        if !is_validated && path.contains(&dep.id) {
            let rendered = path
                .iter()
                .map(TypeId::short_name)
                .chain([dep.id.short_name()])
                .collect::<Vec<_>>()
                .join(" -> ");
            let at = providers
                .get(&dep.id)
                .expect("id on the validation path must have a provider")
                .node;
            return fail(
                ErrorKind::CycleDetected,
                format!("Graph cycle detected {rendered}"),
                at,
            );
        }
        // A nullable dependency on an already validated provider needs no
        // further checks. A provider must exist either way; nullability
        // only relaxes the contract, not the requirement.
        if dep.nullable && is_validated {
            continue;
        }
        let Some(dep_provider) = providers.get(&dep.id) else {
            return fail(
                ErrorKind::Unsatisfiable,
                format!("The provider for dependency {} is missing", dep.name),
                provider.node,
            );
        };
        if !dep.nullable && dep_provider.is_nullable() {
            return fail(
                ErrorKind::NullabilityViolation,
                format!(
                    "The provider for dependency {} requires that {} be nullable",
                    dep.name, dep.name
                ),
                provider.node,
            );
        }
        if !is_validated {
            visit(dep_provider, providers, claimed, validated, path)?;
        }
    }
    if matches!(provider.scope, Scope::Factory | Scope::Single) && !claimed.contains(&provider.id) {
        return fail(
            ErrorKind::StructuralDegenerate,
            "Dead/unused provider declaration",
            provider.node,
        );
    }
    path.pop();
    validated.insert(provider.id.clone());
    Ok(())
}
