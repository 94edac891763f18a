use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use graft_compiler::report;
use graft_model::Session;

pub struct CheckArgs {
    pub session: PathBuf,
    pub graph_dir: Option<PathBuf>,
}

pub fn run(args: CheckArgs) {
    let text = load_session(&args.session);
    let session: Session = match serde_json::from_str(&text) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: invalid session: {}", e);
            std::process::exit(1);
        }
    };
    if session.roots.is_empty() {
        eprintln!("error: session declares no graph roots");
        std::process::exit(1);
    }
    if let Some(dir) = &args.graph_dir
        && let Err(e) = fs::create_dir_all(dir)
    {
        eprintln!("error: cannot create {}: {}", dir.display(), e);
        std::process::exit(1);
    }

    // Each root compiles in isolation; one broken graph does not silence
    // the reports of its siblings.
    let mut failed = false;
    for root in &session.roots {
        let started = Instant::now();
        match graft_compiler::compile(&session.types, root) {
            Ok(graph) => {
                println!("{}", report::render_summary(&graph, started.elapsed()));
                if let Some(dir) = &args.graph_dir {
                    let file = dir.join(format!("{}.html", graph.display_name()));
                    match fs::write(&file, report::render_html(&graph)) {
                        Ok(()) => println!("Graph representation: file:///{}", file.display()),
                        Err(e) => {
                            eprintln!("error: cannot write {}: {}", file.display(), e);
                            failed = true;
                        }
                    }
                }
            }
            Err(failure) => {
                failed = true;
                eprintln!(
                    "error: {}: {} (graph {}, at {})",
                    failure.kind,
                    failure.message,
                    root.root,
                    failure.primary()
                );
                for node in &failure.nodes[1..] {
                    eprintln!("  related declaration at {}", node);
                }
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn load_session(path: &Path) -> String {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            std::process::exit(1);
        }
        return buf;
    }
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
