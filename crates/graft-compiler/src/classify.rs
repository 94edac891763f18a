//! Per-member statement classification.
//!
//! Inspects one member function of a declaration container and decides
//! what it contributes to the graph: a provider binding, a module import,
//! an interface export, or nothing. All syntactic validity rules live
//! here; the builder only sees well-formed statements.

use graft_model::{
    Declarations, FunctionDecl, NodeId, ParamDecl, PropertyDecl, TypeDecl, TypeKind, TypeRef,
};

use crate::analysis::{Analysis, ErrorKind, Failure, fail};
use crate::graph::Dependency;
use crate::identity::TypeId;

pub(crate) const IMPORT: &str = "graft.Import";
pub(crate) const FACTORY: &str = "graft.scope.Factory";
pub(crate) const SINGLE: &str = "graft.scope.Single";
pub(crate) const EAGER: &str = "graft.scope.Eager";
pub(crate) const EXPORTED_FACTORY: &str = "graft.scope.ExportedFactory";
pub(crate) const EXPORTED_SINGLE: &str = "graft.scope.ExportedSingle";
pub(crate) const EXPORTED_EAGER: &str = "graft.scope.ExportedEager";
pub(crate) const EXPORT: &str = "graft.export.Export";

/// What one member contributes to the graph.
#[derive(Debug)]
pub(crate) enum Statement {
    /// Helper method, non-marker return type, or nullable return type.
    Irrelevant,
    Import(ImportStatement),
    Binding(BindingStatement),
}

#[derive(Debug)]
pub(crate) struct ImportStatement {
    pub ty: TypeRef,
    pub reference: String,
    pub node: NodeId,
}

#[derive(Debug)]
pub(crate) struct BindingStatement {
    pub kind: BindingKind,
    pub ty: TypeRef,
    pub dependencies: Vec<Dependency>,
    pub reference: String,
    pub node: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingKind {
    Factory,
    Single,
    Eager,
    Export,
    ExportedFactory,
    ExportedSingle,
    ExportedEager,
}

/// Classify one member function. `require_public` is set when the
/// container itself is only reachable through a public path; members and
/// the typealiases they use must then be public too.
pub(crate) fn classify(
    decls: &Declarations,
    require_public: bool,
    func: &FunctionDecl,
) -> Analysis<Statement> {
    let Some(ret) = &func.return_type else {
        return Ok(Statement::Irrelevant);
    };
    settle(ret, func.node)?;
    // Nullable-at-top-level returns are deliberately ignored so containers
    // can hold helper methods without tripping the classifier.
    if ret.nullable {
        return Ok(Statement::Irrelevant);
    }
    let kind = match ret.path.as_str() {
        IMPORT => None,
        FACTORY => Some(BindingKind::Factory),
        SINGLE => Some(BindingKind::Single),
        EAGER => Some(BindingKind::Eager),
        EXPORTED_FACTORY => Some(BindingKind::ExportedFactory),
        EXPORTED_SINGLE => Some(BindingKind::ExportedSingle),
        EXPORTED_EAGER => Some(BindingKind::ExportedEager),
        EXPORT => Some(BindingKind::Export),
        _ => return Ok(Statement::Irrelevant),
    };

    check_visibility(func, require_public)?;
    check_declaration(func)?;
    let payload = payload_type(decls, func, ret, require_public)?;

    match kind {
        None => import_statement(decls, func, payload),
        Some(BindingKind::Export) => export_statement(decls, func, payload),
        Some(kind) => provider_statement(func, payload, kind),
    }
}

fn settle(ty: &TypeRef, node: NodeId) -> Analysis<()> {
    if ty.is_error() {
        return fail(ErrorKind::SyntaxViolation, "Type cannot be resolved", node);
    }
    Ok(())
}

fn check_visibility(func: &FunctionDecl, require_public: bool) -> Analysis<()> {
    if require_public && !func.visibility.is_public() {
        return fail(
            ErrorKind::SyntaxViolation,
            "Declarations reachable from a public graph must be public",
            func.node,
        );
    }
    if !func.visibility.at_least_internal() {
        return fail(
            ErrorKind::SyntaxViolation,
            "Only public or internal visibility modifiers are allowed for graft declarations",
            func.node,
        );
    }
    Ok(())
}

fn check_declaration(func: &FunctionDecl) -> Analysis<()> {
    if func.is_extension {
        return fail(
            ErrorKind::SyntaxViolation,
            "Extension receivers are not allowed on graft declarations",
            func.node,
        );
    }
    if func.is_async {
        return fail(
            ErrorKind::SyntaxViolation,
            "Async declarations are not allowed on graft declarations",
            func.node,
        );
    }
    if func.type_params > 0 {
        return fail(
            ErrorKind::SyntaxViolation,
            "A graft declaration cannot be parametrized with generic types",
            func.node,
        );
    }
    Ok(())
}

/// Extract the marker's payload type and check typealias visibility rules.
fn payload_type(
    decls: &Declarations,
    func: &FunctionDecl,
    ret: &TypeRef,
    require_public: bool,
) -> Analysis<TypeRef> {
    let [payload] = ret.args.as_slice() else {
        return fail(
            ErrorKind::SyntaxViolation,
            format!("{} takes exactly one type argument", ret.short_name()),
            func.node,
        );
    };
    settle(payload, func.node)?;
    if let Some(decl) = decls.get(&payload.path)
        && decl.kind == TypeKind::TypeAlias
    {
        if require_public {
            if !decl.visibility.is_public() {
                return Err(Failure::new(
                    ErrorKind::SyntaxViolation,
                    "Typealias visibility must not be more restrictive than the graph where it is used",
                    func.node,
                )
                .with(decl.node));
            }
        } else if !decl.visibility.at_least_internal() {
            return Err(Failure::new(
                ErrorKind::SyntaxViolation,
                "Only public or internal visibility modifiers are allowed for a typealias",
                func.node,
            )
            .with(decl.node));
        }
    }
    Ok(payload.clone())
}

fn import_statement(
    decls: &Declarations,
    func: &FunctionDecl,
    payload: TypeRef,
) -> Analysis<Statement> {
    if !func.params.is_empty() {
        return fail(
            ErrorKind::SyntaxViolation,
            "Import declaration does not accept parameters",
            func.node,
        );
    }
    let Some(target) = decls.get(&payload.path) else {
        return fail(
            ErrorKind::SyntaxViolation,
            "Only a class declaration can be imported",
            func.node,
        );
    };
    if target.kind != TypeKind::Class {
        return Err(Failure::new(
            ErrorKind::SyntaxViolation,
            "Only a class declaration can be imported",
            func.node,
        )
        .with(target.node));
    }
    check_class_shape(target, func.node)?;
    Ok(Statement::Import(ImportStatement {
        ty: payload,
        reference: func.name.clone(),
        node: func.node,
    }))
}

fn provider_statement(
    func: &FunctionDecl,
    payload: TypeRef,
    kind: BindingKind,
) -> Analysis<Statement> {
    let dependencies = func
        .params
        .iter()
        .map(param_dependency)
        .collect::<Analysis<Vec<_>>>()?;
    Ok(Statement::Binding(BindingStatement {
        kind,
        ty: payload,
        dependencies,
        reference: func.name.clone(),
        node: func.node,
    }))
}

fn export_statement(
    decls: &Declarations,
    func: &FunctionDecl,
    payload: TypeRef,
) -> Analysis<Statement> {
    if !func.params.is_empty() {
        return fail(
            ErrorKind::SyntaxViolation,
            "Export declaration does not accept parameters",
            func.node,
        );
    }
    let target = match decls.get(&payload.path) {
        Some(target) if target.kind == TypeKind::Interface => target,
        Some(target) => {
            return Err(Failure::new(
                ErrorKind::SyntaxViolation,
                "Only interfaces can be exported",
                func.node,
            )
            .with(target.node));
        }
        None => {
            return fail(
                ErrorKind::SyntaxViolation,
                "Only interfaces can be exported",
                func.node,
            );
        }
    };
    check_class_shape(target, func.node)?;
    if let Some((first, rest)) = target.functions.split_first() {
        return Err(Failure::new(
            ErrorKind::SyntaxViolation,
            "Only immutable properties are allowed for an exported type",
            first.node,
        )
        .with_all(rest.iter().map(|f| f.node)));
    }
    if target.sealed {
        return Err(Failure::new(
            ErrorKind::SyntaxViolation,
            "Sealed interfaces cannot be exported",
            func.node,
        )
        .with(target.node));
    }
    let dependencies = target
        .properties
        .iter()
        .map(property_dependency)
        .collect::<Analysis<Vec<_>>>()?;
    Ok(Statement::Binding(BindingStatement {
        kind: BindingKind::Export,
        ty: payload,
        dependencies,
        reference: func.name.clone(),
        node: func.node,
    }))
}

/// Shape rules shared by graph roots, import targets, and export targets.
pub(crate) fn check_class_shape(decl: &TypeDecl, at: NodeId) -> Analysis<()> {
    if decl.type_params > 0 {
        return Err(Failure::new(
            ErrorKind::SyntaxViolation,
            "This declaration cannot be parametrized with generic types",
            at,
        )
        .with(decl.node));
    }
    if decl.has_supertypes {
        return Err(Failure::new(
            ErrorKind::SyntaxViolation,
            "Extending other types is not accepted for this declaration",
            at,
        )
        .with(decl.node));
    }
    Ok(())
}

fn param_dependency(param: &ParamDecl) -> Analysis<Dependency> {
    if param.has_default {
        return fail(
            ErrorKind::SyntaxViolation,
            "Default values are not allowed",
            param.node,
        );
    }
    if param.is_vararg {
        return fail(
            ErrorKind::SyntaxViolation,
            "Vararg parameters are not allowed",
            param.node,
        );
    }
    settle(&param.ty, param.node)?;
    Ok(Dependency {
        id: TypeId::of(&param.ty),
        ty: param.ty.clone(),
        name: param.name.clone(),
        nullable: param.ty.nullable,
        node: param.node,
    })
}

fn property_dependency(property: &PropertyDecl) -> Analysis<Dependency> {
    if property.mutable {
        return fail(
            ErrorKind::SyntaxViolation,
            "Only immutable properties are allowed for an exported type",
            property.node,
        );
    }
    if property.is_extension {
        return fail(
            ErrorKind::SyntaxViolation,
            "Extension is not allowed for an exported property",
            property.node,
        );
    }
    settle(&property.ty, property.node)?;
    Ok(Dependency {
        id: TypeId::of(&property.ty),
        ty: property.ty.clone(),
        name: property.name.clone(),
        nullable: property.ty.nullable,
        node: property.node,
    })
}
