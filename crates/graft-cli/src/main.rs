mod cli;
mod commands;

#[cfg(test)]
mod cli_tests;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Check { session, graph_dir } => {
            commands::check::run(commands::check::CheckArgs { session, graph_dir });
        }
    }
}
