//! Declarations as resolved by the host's symbol layer.

use serde::Deserialize;

use crate::ty::{FileId, NodeId, TypeRef, Visibility};

/// What kind of type a declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    TypeAlias,
}

/// One resolved type declaration: a graph root, an importable module
/// class, an exportable interface, or a typealias the compiler needs to
/// check visibility on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDecl {
    pub path: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub sealed: bool,
    #[serde(default)]
    pub has_supertypes: bool,
    /// Generic arity of the declaration itself.
    #[serde(default)]
    pub type_params: u16,
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(default)]
    pub file: Option<FileId>,
    #[serde(default)]
    pub node: NodeId,
}

impl TypeDecl {
    /// Last dot-segment of the path.
    pub fn short_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

/// A member function of a declaration container.
///
/// `return_type` is `None` for functions the host resolved to no usable
/// return type; the classifier treats those as irrelevant.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_extension: bool,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub type_params: u16,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub node: NodeId,
}

/// A value parameter of a member function.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub has_default: bool,
    #[serde(default)]
    pub is_vararg: bool,
    #[serde(default)]
    pub node: NodeId,
}

/// A property of an exportable interface.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub is_extension: bool,
    #[serde(default)]
    pub node: NodeId,
}
