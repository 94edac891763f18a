//! Readable name assignment for generated accessors.
//!
//! Each provider id gets a lowerCamel-ish name derived from its type.
//! Names start from the shortest form (last path segment) and, when two
//! ids collide, every member of the colliding group grows by one more
//! package segment until the group splits apart. Underscores in package
//! segments are doubled so `my_app.Int` and `myapp.Int` stay distinct.

use indexmap::IndexMap;

use crate::identity::TypeId;

/// Assign a unique readable name to every id. Output order follows input
/// order. Ids are expected to be distinct.
pub fn assign_names(ids: &[TypeId]) -> IndexMap<TypeId, String> {
    let mut out = IndexMap::new();
    assign(ids.iter().collect(), 1, &mut out);
    let mut ordered = IndexMap::with_capacity(ids.len());
    for id in ids {
        if let Some(name) = out.get(id) {
            ordered.insert(id.clone(), name.clone());
        }
    }
    ordered
}

fn assign<'a>(ids: Vec<&'a TypeId>, grade: usize, out: &mut IndexMap<TypeId, String>) {
    let mut groups: IndexMap<String, Vec<&'a TypeId>> = IndexMap::new();
    for id in ids {
        groups
            .entry(lower_first(&candidate(id, grade)))
            .or_default()
            .push(id);
    }
    for (name, group) in groups {
        if let [only] = group.as_slice() {
            out.insert((*only).clone(), name);
        } else {
            assign(group, grade + 1, out);
        }
    }
}

/// Candidate name at a given grade: the last `grade` package segments of
/// the head path, dots removed, underscores doubled, plus a `_of…_and…`
/// suffix naming the generic arguments. The grade applies to argument
/// names too, so ids differing only inside an argument still split apart
/// at a higher grade.
fn candidate(id: &TypeId, grade: usize) -> String {
    let (head, args) = split_generic(id.as_str());
    let head = head.strip_suffix('?').unwrap_or(head);
    let mut name = on_grade(head, grade).replace('.', "").replace('_', "__");
    if let Some(args) = args {
        for (i, arg) in split_args(args).enumerate() {
            name.push_str(if i == 0 { "_of" } else { "_and" });
            name.push_str(&candidate(&TypeId::from_path(arg.trim()), grade));
        }
    }
    name
}

/// Split `path<args>` into the head path and the raw argument list.
fn split_generic(s: &str) -> (&str, Option<&str>) {
    match (s.find('<'), s.rfind('>')) {
        (Some(open), Some(close)) if close > open => (&s[..open], Some(&s[open + 1..close])),
        _ => (s, None),
    }
}

/// Iterate top-level comma-separated arguments, ignoring commas nested in
/// deeper generic instantiations.
fn split_args(args: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut parts = Vec::new();
    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&args[start..]);
    parts.into_iter()
}

/// Keep the last `grade` dot-segments of a path.
pub(crate) fn on_grade(path: &str, grade: usize) -> &str {
    let mut seen = 0usize;
    for (i, c) in path.char_indices().rev() {
        if c == '.' {
            seen += 1;
            if seen == grade {
                return &path[i + 1..];
            }
        }
    }
    path
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
