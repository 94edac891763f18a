//! Shared fixture builders for compiler tests.

use graft_model::{
    Declarations, FileId, FunctionDecl, NodeId, ParamDecl, PropertyDecl, RootSpec, TypeDecl,
    TypeKind, TypeRef, Visibility,
};

use crate::analysis::Analysis;
use crate::graph::Graph;

pub fn ty(path: &str) -> TypeRef {
    TypeRef::named(path)
}

pub fn nullable(path: &str) -> TypeRef {
    TypeRef::named(path).as_nullable()
}

pub fn generic(path: &str, args: Vec<TypeRef>) -> TypeRef {
    TypeRef::generic(path, args)
}

/// A marker return type wrapping one payload, e.g.
/// `marker("graft.scope.Single", ty("std.Int"))`.
pub fn marker(path: &str, payload: TypeRef) -> TypeRef {
    TypeRef::generic(path, vec![payload])
}

pub struct TypeDeclBuilder {
    decl: TypeDecl,
}

impl TypeDeclBuilder {
    fn new(path: &str, kind: TypeKind) -> Self {
        Self {
            decl: TypeDecl {
                path: path.to_string(),
                kind,
                ..TypeDecl::default()
            },
        }
    }

    pub fn class(path: &str) -> Self {
        Self::new(path, TypeKind::Class)
    }

    pub fn interface(path: &str) -> Self {
        Self::new(path, TypeKind::Interface)
    }

    pub fn alias(path: &str) -> Self {
        Self::new(path, TypeKind::TypeAlias)
    }

    pub fn node(mut self, node: u32) -> Self {
        self.decl.node = NodeId(node);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.decl.visibility = visibility;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.decl.sealed = true;
        self
    }

    pub fn extends(mut self) -> Self {
        self.decl.has_supertypes = true;
        self
    }

    pub fn file(mut self, file: u32) -> Self {
        self.decl.file = Some(FileId(file));
        self
    }

    pub fn generic_arity(mut self, arity: u16) -> Self {
        self.decl.type_params = arity;
        self
    }

    pub fn function(mut self, func: FunctionBuilder) -> Self {
        self.decl.functions.push(func.func);
        self
    }

    pub fn property(mut self, name: &str, property_ty: TypeRef) -> Self {
        self.decl.properties.push(PropertyDecl {
            name: name.to_string(),
            ty: property_ty,
            mutable: false,
            is_extension: false,
            node: NodeId::default(),
        });
        self
    }

    pub fn property_at(mut self, name: &str, property_ty: TypeRef, node: u32) -> Self {
        self.decl.properties.push(PropertyDecl {
            name: name.to_string(),
            ty: property_ty,
            mutable: false,
            is_extension: false,
            node: NodeId(node),
        });
        self
    }

    pub fn mutable_property(mut self, name: &str, property_ty: TypeRef) -> Self {
        self.decl.properties.push(PropertyDecl {
            name: name.to_string(),
            ty: property_ty,
            mutable: true,
            is_extension: false,
            node: NodeId::default(),
        });
        self
    }

    pub fn build(self) -> TypeDecl {
        self.decl
    }
}

pub struct FunctionBuilder {
    func: FunctionDecl,
}

impl FunctionBuilder {
    pub fn new(name: &str, return_type: Option<TypeRef>) -> Self {
        Self {
            func: FunctionDecl {
                name: name.to_string(),
                visibility: Visibility::Public,
                is_extension: false,
                is_async: false,
                type_params: 0,
                params: Vec::new(),
                return_type,
                node: NodeId::default(),
            },
        }
    }

    pub fn param(mut self, name: &str, param_ty: TypeRef) -> Self {
        self.func.params.push(ParamDecl {
            name: name.to_string(),
            ty: param_ty,
            has_default: false,
            is_vararg: false,
            node: NodeId::default(),
        });
        self
    }

    pub fn default_param(mut self, name: &str, param_ty: TypeRef) -> Self {
        self.func.params.push(ParamDecl {
            name: name.to_string(),
            ty: param_ty,
            has_default: true,
            is_vararg: false,
            node: NodeId::default(),
        });
        self
    }

    pub fn vararg_param(mut self, name: &str, param_ty: TypeRef) -> Self {
        self.func.params.push(ParamDecl {
            name: name.to_string(),
            ty: param_ty,
            has_default: false,
            is_vararg: true,
            node: NodeId::default(),
        });
        self
    }

    pub fn node(mut self, node: u32) -> Self {
        self.func.node = NodeId(node);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.func.visibility = visibility;
        self
    }

    pub fn is_async(mut self) -> Self {
        self.func.is_async = true;
        self
    }

    pub fn extension(mut self) -> Self {
        self.func.is_extension = true;
        self
    }

    pub fn generic_arity(mut self, arity: u16) -> Self {
        self.func.type_params = arity;
        self
    }

    pub fn build(self) -> FunctionDecl {
        self.func
    }
}

pub fn factory(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.scope.Factory", payload)))
}

pub fn single(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.scope.Single", payload)))
}

pub fn eager(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.scope.Eager", payload)))
}

pub fn exported_factory(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.scope.ExportedFactory", payload)))
}

pub fn exported_single(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.scope.ExportedSingle", payload)))
}

pub fn exported_eager(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.scope.ExportedEager", payload)))
}

pub fn import_fn(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.Import", payload)))
}

pub fn export_fn(name: &str, payload: TypeRef) -> FunctionBuilder {
    FunctionBuilder::new(name, Some(marker("graft.export.Export", payload)))
}

pub fn compile_fixture(types: Vec<TypeDecl>, root: &str) -> Analysis<Graph> {
    let decls = Declarations::from(types);
    let spec = RootSpec {
        root: root.to_string(),
        name: String::new(),
    };
    crate::compile(&decls, &spec)
}
