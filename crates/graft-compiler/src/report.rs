//! Graph visualization and compilation reporting.
//!
//! Renders a compiled graph as Graphviz dot (modules as dashed blue
//! clusters, providers shaped by scope, exported providers bold), wraps
//! it in a self-contained viz.js HTML page, and formats the per-graph
//! compilation summary.

use std::fmt::Write as _;
use std::time::Duration;

use indexmap::IndexMap;

use crate::graph::{Graph, Scope};
use crate::identity::TypeId;
use crate::naming;

const GRAPH_FILE_TEMPLATE: (&str, &str, &str) = (
    r#"<!DOCTYPE html>
<html>
<head>
  <title>graft "#,
    r#"</title>
  <script src="https://unpkg.com/viz.js@2.1.2/viz.js"></script>
  <script src="https://unpkg.com/viz.js@2.1.2/full.render.js"></script>
</head>
<body>
  <i>Scopes shapes</i> (<b>eager</b>=<i>diamond</i> <b>single</b>=<i>oval</i> <b>factory</b>=<i>box</i>)<br>
  <i>Exported provider</i> (<b>exported</b>=<i>bold shape</i>)<br><br>
  <div id="g"></div>
  <script> new Viz().renderSVGElement(`digraph G { fontsize=8;compound=true;concentrate=true;style=dashed; "#,
    r#" }`).then(function(element) { document.getElementById('g').appendChild(element); }) </script>
</body>
</html>
"#,
);

/// Render the graph as a Graphviz dot fragment (the body of a `digraph`).
pub fn render_dot(graph: &Graph) -> String {
    let module_names = display_names(graph.modules.iter().map(|m| &m.id));
    let provider_names = display_names(graph.providers.keys());
    let mut out = String::new();
    for module in &graph.modules {
        let id = &module_names[&module.id];
        let _ = write!(
            out,
            "subgraph \"cluster_{id}\"{{label=\"{id}\";color=blue;margin=25;"
        );
        let _ = write!(out, "\"{id}\"[shape=point style=invis];");
        let providers = module
            .providers
            .iter()
            .map(|p| format!("\"{}\"", provider_names[p]))
            .collect::<Vec<_>>()
            .join(";");
        out.push_str(&providers);
        out.push('}');
        for import in &module.imports {
            let target = &module_names[import];
            let _ = write!(
                out,
                "\"{id}\"->\"{target}\"[arrowsize=0.5 arrowhead=vee style=dashed ltail=\"cluster_{id}\" lhead=\"cluster_{target}\"]"
            );
        }
    }
    for provider in graph.providers.values() {
        let id = &provider_names[&provider.id];
        let style = if provider.exported { "bold" } else { "\"\"" };
        let shape = match provider.scope {
            Scope::Eager => "diamond",
            Scope::Single => "oval",
            Scope::Factory => "box",
        };
        let _ = write!(out, "\"{id}\" [shape={shape} style={style}];");
        let deps = provider
            .dependencies
            .iter()
            .map(|dep| format!("\"{}\"", provider_names[&dep.id]))
            .collect::<Vec<_>>()
            .join(";");
        let _ = write!(out, "\"{id}\" -> {{{deps}}}");
    }
    out
}

/// Wrap the dot fragment in the self-contained viz.js HTML page.
pub fn render_html(graph: &Graph) -> String {
    let (head, middle, tail) = GRAPH_FILE_TEMPLATE;
    let mut out = String::new();
    out.push_str(head);
    out.push_str(graph.display_name());
    out.push_str(middle);
    out.push_str(&render_dot(graph));
    out.push_str(tail);
    out
}

/// Per-graph compilation summary text.
pub fn render_summary(graph: &Graph, compilation_time: Duration) -> String {
    format!(
        "graft graph compilation report ->\n\
         Graph: {}\n    \
         #Files: {}\n    \
         #Modules: {}\n    \
         #Providers: {}\n    \
         Compilation time: {}",
        graph.display_name(),
        graph.files.len(),
        graph.modules.len(),
        graph.providers.len(),
        format_compilation_time(compilation_time),
    )
}

/// Labels for the dot graph: the shortest unambiguous tail of each id,
/// grown a package segment at a time on collision. Unlike accessor names
/// these keep the original casing and punctuation.
fn display_names<'a>(ids: impl Iterator<Item = &'a TypeId>) -> IndexMap<TypeId, String> {
    let mut out = IndexMap::new();
    grade_names(ids.collect(), 1, &mut out);
    out
}

fn grade_names<'a>(ids: Vec<&'a TypeId>, grade: usize, out: &mut IndexMap<TypeId, String>) {
    let mut groups: IndexMap<&str, Vec<&'a TypeId>> = IndexMap::new();
    for id in ids {
        groups
            .entry(naming::on_grade(id.as_str(), grade))
            .or_default()
            .push(id);
    }
    for (name, group) in groups {
        if let [only] = group.as_slice() {
            out.insert((*only).clone(), name.to_string());
        } else {
            grade_names(group, grade + 1, out);
        }
    }
}

pub(crate) fn format_compilation_time(time: Duration) -> String {
    let millis = time.as_millis();
    let hours = if millis > 3_600_000 {
        format!("{}h ", millis / 3_600_000)
    } else {
        String::new()
    };
    let minutes = if millis > 60_000 {
        format!("{}m ", millis / 60_000 % 60)
    } else {
        String::new()
    };
    let seconds = if millis > 1000 {
        format!("{}s ", millis / 1000 % 60)
    } else {
        String::new()
    };
    format!("{hours}{minutes}{seconds}{}ms", millis % 1000)
}
