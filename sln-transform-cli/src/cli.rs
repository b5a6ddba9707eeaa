//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ApplyCommand, ListCommand, RemoveCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for editing Visual Studio solution files.
#[derive(Parser)]
#[command(name = "sln-transform")]
#[command(version, about = "Edit Visual Studio solution files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user recipe (`config.yaml`)
    #[arg(long, value_name = "PATH", global = true, env = "SLN_TRANSFORM_USER_DIR")]
    pub user_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the projects of a solution
    List(ListCommand),

    /// Check that a solution parses and serializes back unchanged
    Validate(ValidateCommand),

    /// Remove projects, then rename and save the solution
    Remove(RemoveCommand),

    /// Run a recipe against a solution
    Apply(ApplyCommand),
}
