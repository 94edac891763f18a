//! Resolved type references and the handles that anchor them to the host.

use std::fmt;

use serde::Deserialize;

/// Opaque handle into the host's syntax tree, used for error attribution.
///
/// The compiler never interprets the value; it only hands it back so the
/// host environment can point diagnostics at the offending declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a host source file, collected for incremental-build provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct FileId(pub u32);

/// Host-side visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// Public or internal: the widest set a graph member may use.
    pub fn at_least_internal(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }
}

/// A resolved type expression, as *declared*.
///
/// `path` is the fully-qualified dotted name the declaration was written
/// with; typealiases are not expanded by the host. An empty path denotes
/// an unresolvable (error) type and is rejected by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeRef {
    pub path: String,
    #[serde(default)]
    pub args: Vec<TypeRef>,
    #[serde(default)]
    pub nullable: bool,
}

impl TypeRef {
    pub fn named(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(path: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            path: path.into(),
            args,
            nullable: false,
        }
    }

    pub fn as_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// An unresolvable type, as handed over by the host for error types.
    pub fn is_error(&self) -> bool {
        self.path.is_empty()
    }

    /// Last dot-segment of the path.
    pub fn short_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
