use clap::CommandFactory;

use crate::cli::Cli;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn check_parses_session_and_graph_dir() {
    use clap::Parser;

    let cli = Cli::parse_from(["graft", "check", "session.json", "--graph-dir", "out"]);
    let crate::cli::Command::Check { session, graph_dir } = cli.command;
    assert_eq!(session.to_str(), Some("session.json"));
    assert_eq!(graph_dir.as_deref().and_then(|d| d.to_str()), Some("out"));
}
