//! Keydrift CLI: the `keydrift` command.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    commands::compare::run(cli.files, cli.json);
}
