//! Main entry point for the sln-transform CLI.
//!
//! Commands:
//! - `list`: List the projects of a solution
//! - `validate`: Check that a solution round-trips unchanged
//! - `remove`: Remove projects, rename and save
//! - `apply`: Run a recipe

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    sln_transform::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        user_dir: cli.user_dir,
    };

    let result = match cli.command {
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::Apply(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
