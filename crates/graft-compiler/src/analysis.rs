//! Short-circuiting analysis results with attributable failures.
//!
//! Every pass threads [`Analysis`] with `?`. A failure is fatal to the
//! enclosing graph's compilation and carries one primary attribution node
//! plus zero or more complementary nodes (both sides of a clash, every
//! missing exporter property) so the host can report multi-location
//! diagnostics.

use std::fmt;

use graft_model::NodeId;

pub type Analysis<T> = Result<T, Failure>;

/// Failure classification, one per structural rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A declaration breaks a structural rule (generics, vararg, default
    /// value, extension receiver, async qualifier, visibility, wrong kind
    /// of type, sealed or mutable export surface).
    SyntaxViolation,
    /// Duplicate registration for the same identity within one graph.
    Clash,
    /// A required dependency or exporter property has no provider.
    Unsatisfiable,
    /// A non-nullable dependency is fed by a nullable-producing provider.
    NullabilityViolation,
    /// A dependency chain returns to an id already on the current path.
    CycleDetected,
    /// Empty module, or a dead/unused provider.
    StructuralDegenerate,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::SyntaxViolation => "syntax violation",
            ErrorKind::Clash => "clash",
            ErrorKind::Unsatisfiable => "unsatisfiable dependency",
            ErrorKind::NullabilityViolation => "nullability contract violation",
            ErrorKind::CycleDetected => "dependency cycle",
            ErrorKind::StructuralDegenerate => "degenerate structure",
        };
        f.write_str(text)
    }
}

/// A fatal, attributable compilation failure.
///
/// `nodes` is never empty; `nodes[0]` is the primary attribution node.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
    pub nodes: Vec<NodeId>,
}

impl Failure {
    pub fn new(kind: ErrorKind, message: impl Into<String>, node: NodeId) -> Self {
        Self {
            kind,
            message: message.into(),
            nodes: vec![node],
        }
    }

    /// Attach a complementary attribution node.
    pub fn with(mut self, node: NodeId) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_all(mut self, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn primary(&self) -> NodeId {
        self.nodes[0]
    }
}

/// Shorthand for a single-node failure.
pub fn fail<T>(kind: ErrorKind, message: impl Into<String>, node: NodeId) -> Analysis<T> {
    Err(Failure::new(kind, message, node))
}

/// Check a success value without transforming it.
///
/// Distinct from `and_then`: the check only ever yields `()` and the
/// original value flows through untouched.
pub trait Validate<T> {
    fn validate(self, check: impl FnOnce(&T) -> Analysis<()>) -> Analysis<T>;
}

impl<T> Validate<T> for Analysis<T> {
    fn validate(self, check: impl FnOnce(&T) -> Analysis<()>) -> Analysis<T> {
        let value = self?;
        check(&value)?;
        Ok(value)
    }
}
