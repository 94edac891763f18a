use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "graft", bin_name = "graft")]
#[command(about = "Compile-time dependency-injection graph compiler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile and validate every graph declared by a session
    #[command(after_help = r#"EXAMPLES:
  graft check session.json
  graft check session.json --graph-dir target/graphs
  graft check -"#)]
    Check {
        /// Session file with resolved declarations and graph roots
        /// (use "-" for stdin)
        #[arg(value_name = "SESSION")]
        session: PathBuf,

        /// Write an HTML visualization per compiled graph into this directory
        #[arg(long, value_name = "DIR")]
        graph_dir: Option<PathBuf>,
    },
}
