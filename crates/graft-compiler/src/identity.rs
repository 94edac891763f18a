//! Canonical type identity keys.
//!
//! A [`TypeId`] identifies a dependency type irrespective of top-level
//! nullability: `Int` and `Int?` map to the same id, while nullability of
//! the use-site is tracked separately on each `Dependency`/`Provider`.
//! Generic instantiations are distinct ids (`List<Int>` ≠ `List<String>`)
//! and typealiases are *not* expanded to their target — an alias and its
//! target are distinct ids, which is the intended escape hatch for
//! providing the same underlying type twice.

use std::fmt;

use graft_model::TypeRef;

/// Canonical, nullability-normalized, alias-preserving identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(String);

impl TypeId {
    /// Identity of a use-site type. Strips the top-level nullable marker
    /// only; generic arguments are rendered verbatim, including their own
    /// nullability. Pure, no failure mode: unresolvable types are rejected
    /// upstream by the classifier.
    pub fn of(ty: &TypeRef) -> Self {
        let mut out = String::new();
        render(ty, false, &mut out);
        Self(out)
    }

    /// Identity of a class-like declaration (no type arguments).
    pub fn from_path(path: &str) -> Self {
        Self(path.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dot-segment of the type path, as rendered in cycle paths.
    /// Generic arguments are dropped: `std.List<std.Int>` renders `List`.
    pub fn short_name(&self) -> &str {
        let head = self.0.split('<').next().unwrap_or(&self.0);
        head.rsplit('.').next().unwrap_or(head)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn render(ty: &TypeRef, keep_nullable: bool, out: &mut String) {
    out.push_str(&ty.path);
    if !ty.args.is_empty() {
        out.push('<');
        for (i, arg) in ty.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            render(arg, true, out);
        }
        out.push('>');
    }
    if keep_nullable && ty.nullable {
        out.push('?');
    }
}
