//! Recursive graph construction.
//!
//! Starts at the root container, classifies every member, and walks
//! imported modules depth-first while carrying the import chain to detect
//! duplicate imports early. Produces a [`RawGraph`] whose indexes the
//! validator passes then check; `finish` freezes it into a [`Graph`].

use graft_model::{Declarations, FileId, NodeId, RootSpec, TypeDecl, TypeKind};
use indexmap::{IndexMap, IndexSet};

use crate::analysis::{Analysis, ErrorKind, Failure, fail};
use crate::classify::{self, BindingKind, BindingStatement, ImportStatement, Statement};
use crate::graph::{Export, ExportKind, Graph, Module, Provider, Scope};
use crate::identity::TypeId;

/// Mutable graph under construction. Indexes are insertion-ordered so
/// diagnostics and generated code follow declaration order.
pub(crate) struct RawGraph {
    pub root: TypeId,
    pub name: String,
    pub files: IndexSet<FileId>,
    pub modules: IndexMap<TypeId, Module>,
    pub providers: IndexMap<TypeId, Provider>,
    pub exporters: IndexMap<TypeId, Export>,
    /// Every id consumed by some provider or exporter; providers outside
    /// this set (and not exported or eager) are dead.
    pub claimed: IndexSet<TypeId>,
}

impl RawGraph {
    pub(crate) fn finish(self) -> Graph {
        Graph {
            root: self.root,
            name: self.name,
            files: self.files.into_iter().collect(),
            modules: self.modules.into_values().collect(),
            providers: self.providers,
            exports: self.exporters.into_values().collect(),
        }
    }
}

pub(crate) fn build(decls: &Declarations, root: &RootSpec) -> Analysis<RawGraph> {
    let decl = validate_root(decls, root)?;
    let mut builder = Builder {
        decls,
        raw: RawGraph {
            root: TypeId::from_path(&decl.path),
            name: root.name.clone(),
            files: IndexSet::new(),
            modules: IndexMap::new(),
            providers: IndexMap::new(),
            exporters: IndexMap::new(),
            claimed: IndexSet::new(),
        },
    };
    builder.process(decl, &IndexMap::new())?;
    Ok(builder.raw)
}

fn validate_root<'a>(decls: &'a Declarations, root: &RootSpec) -> Analysis<&'a TypeDecl> {
    let Some(decl) = decls.get(&root.root) else {
        return fail(
            ErrorKind::SyntaxViolation,
            format!("Graph root {} cannot be resolved", root.root),
            NodeId::default(),
        );
    };
    if decl.kind != TypeKind::Class {
        return fail(
            ErrorKind::SyntaxViolation,
            "Only classes can declare a graph",
            decl.node,
        );
    }
    if !decl.visibility.at_least_internal() {
        return fail(
            ErrorKind::SyntaxViolation,
            "Only public or internal visibility modifiers are allowed for graphs",
            decl.node,
        );
    }
    classify::check_class_shape(decl, decl.node)?;
    if root.name.contains('`') || root.name.contains('\\') {
        return fail(
            ErrorKind::SyntaxViolation,
            "Invalid graph name, characters ` and \\ are not allowed",
            decl.node,
        );
    }
    Ok(decl)
}

struct Builder<'a> {
    decls: &'a Declarations,
    raw: RawGraph,
}

/// Providers and imports contributed by one container; an imported module
/// contributing neither is degenerate.
#[derive(Default)]
struct Contribution {
    providers: Vec<TypeId>,
    imports: Vec<TypeId>,
}

impl Builder<'_> {
    /// Classify every member of `container` and fold the statements into
    /// the graph. `chain` maps each id on the current import path to the
    /// node that imported it, for duplicate-import attribution.
    fn process(
        &mut self,
        container: &TypeDecl,
        chain: &IndexMap<TypeId, NodeId>,
    ) -> Analysis<Contribution> {
        if let Some(file) = container.file {
            self.raw.files.insert(file);
        }
        let require_public = container.visibility.is_public();
        let mut contribution = Contribution::default();
        for func in &container.functions {
            match classify::classify(self.decls, require_public, func)? {
                Statement::Irrelevant => {}
                Statement::Import(import) => {
                    let id = self.append_module(container, chain, import)?;
                    contribution.imports.push(id);
                }
                Statement::Binding(binding) => match binding.kind {
                    BindingKind::Factory => {
                        let id = self.append_provider(container, binding, Scope::Factory, false)?;
                        contribution.providers.push(id);
                    }
                    BindingKind::Single => {
                        let id = self.append_provider(container, binding, Scope::Single, false)?;
                        contribution.providers.push(id);
                    }
                    BindingKind::Eager => {
                        let id = self.append_provider(container, binding, Scope::Eager, false)?;
                        contribution.providers.push(id);
                    }
                    BindingKind::ExportedFactory => {
                        let id = self.append_exported(container, binding, Scope::Factory)?;
                        contribution.providers.push(id);
                    }
                    BindingKind::ExportedSingle => {
                        let id = self.append_exported(container, binding, Scope::Single)?;
                        contribution.providers.push(id);
                    }
                    BindingKind::ExportedEager => {
                        let id = self.append_exported(container, binding, Scope::Eager)?;
                        contribution.providers.push(id);
                    }
                    BindingKind::Export => self.append_bracket(binding)?,
                },
            }
        }
        Ok(contribution)
    }

    fn append_module(
        &mut self,
        container: &TypeDecl,
        chain: &IndexMap<TypeId, NodeId>,
        import: ImportStatement,
    ) -> Analysis<TypeId> {
        let module_id = TypeId::of(&import.ty);
        let container_id = TypeId::from_path(&container.path);
        let clash = if module_id == container_id {
            Some(container.node)
        } else if let Some(node) = chain.get(&module_id) {
            Some(*node)
        } else {
            self.raw.modules.get(&module_id).map(|prev| prev.node)
        };
        if let Some(prev) = clash {
            return Err(Failure::new(
                ErrorKind::Clash,
                "Modules clash, a module can be imported only once",
                prev,
            )
            .with(import.node));
        }

        let target = self
            .decls
            .get(&import.ty.path)
            .expect("import target was resolved by the classifier");
        let mut inner_chain = chain.clone();
        inner_chain.insert(container_id.clone(), import.node);
        let contribution = self.process(target, &inner_chain)?;
        if contribution.providers.is_empty() && contribution.imports.is_empty() {
            return fail(
                ErrorKind::StructuralDegenerate,
                "A module must at least provide one dependency or import another module",
                import.node,
            );
        }
        self.raw.modules.insert(
            module_id.clone(),
            Module {
                id: module_id.clone(),
                ty: import.ty,
                providers: contribution.providers,
                imports: contribution.imports,
                source: container_id,
                reference: import.reference,
                node: import.node,
            },
        );
        Ok(module_id)
    }

    fn append_provider(
        &mut self,
        container: &TypeDecl,
        binding: BindingStatement,
        scope: Scope,
        exported: bool,
    ) -> Analysis<TypeId> {
        let id = TypeId::of(&binding.ty);
        if let Some(prev) = self.raw.providers.get(&id) {
            return Err(Failure::new(
                ErrorKind::Clash,
                "Providers clash, a dependency type can only be provided once - a typealias may help to break the clash",
                binding.node,
            )
            .with(prev.node));
        }
        for dep in &binding.dependencies {
            self.raw.claimed.insert(dep.id.clone());
        }
        self.raw.providers.insert(
            id.clone(),
            Provider {
                id: id.clone(),
                scope,
                exported,
                ty: binding.ty,
                dependencies: binding.dependencies,
                source: TypeId::from_path(&container.path),
                reference: binding.reference,
                node: binding.node,
            },
        );
        Ok(id)
    }

    /// Exported provider: a provider plus a delegated exporter of the same
    /// id. The id counts as claimed because the export surface consumes it.
    fn append_exported(
        &mut self,
        container: &TypeDecl,
        binding: BindingStatement,
        scope: Scope,
    ) -> Analysis<TypeId> {
        let ty = binding.ty.clone();
        let reference = binding.reference.clone();
        let node = binding.node;
        let id = self.append_provider(container, binding, scope, true)?;
        self.append_exporter(Export {
            id: id.clone(),
            ty,
            kind: ExportKind::Delegated,
            reference,
            node,
        })?;
        self.raw.claimed.insert(id.clone());
        Ok(id)
    }

    fn append_bracket(&mut self, binding: BindingStatement) -> Analysis<()> {
        let id = TypeId::of(&binding.ty);
        for dep in &binding.dependencies {
            self.raw.claimed.insert(dep.id.clone());
        }
        self.append_exporter(Export {
            id,
            ty: binding.ty,
            kind: ExportKind::Bracket {
                dependencies: binding.dependencies,
            },
            reference: binding.reference,
            node: binding.node,
        })
    }

    fn append_exporter(&mut self, export: Export) -> Analysis<()> {
        if let Some(prev) = self.raw.exporters.get(&export.id) {
            return Err(Failure::new(
                ErrorKind::Clash,
                "Exporters clash, an exporter can only be declared once",
                export.node,
            )
            .with(prev.node));
        }
        self.raw.exporters.insert(export.id.clone(), export);
        Ok(())
    }
}
