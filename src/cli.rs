use clap::Parser;

// The upgrade runs unconditionally; there are no flags or subcommands.
// Parsing still provides --help/--version and rejects stray arguments.
#[derive(Parser, Debug)]
#[command(
    name = "pipup",
    about = "Upgrade the project's Python codegen dependencies via pip",
    version
)]
pub struct Cli {}
