mod agents;
mod cli;
mod error;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    Cli::parse();

    if let Err(e) = workflow::execute_upgrade() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(e.exit_code());
    }
}
