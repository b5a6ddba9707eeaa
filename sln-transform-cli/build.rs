//! Build script for sln-transform-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: the command structure is rebuilt here because build scripts cannot
//! depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn solution_arg() -> Arg {
    Arg::new("SLN").help("Solution file").required(true)
}

fn dry_run_arg() -> Arg {
    Arg::new("dry-run")
        .long("dry-run")
        .help("Show what would be written without writing anything")
        .action(clap::ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// Keep this in step with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("sln-transform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Edit Visual Studio solution files")
        .long_about(
            "Remove projects from Visual Studio solution files, rename the solution \
             and its projects, and keep every cross-reference consistent",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("user-dir")
                .long("user-dir")
                .help("Directory holding the user recipe (config.yaml)")
                .value_name("PATH")
                .global(true)
                .env("SLN_TRANSFORM_USER_DIR"),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List the projects of a solution")
                .arg(solution_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
            Command::new("validate")
                .about("Check that a solution parses and serializes back unchanged")
                .arg(solution_arg()),
            Command::new("remove")
                .about("Remove projects, then rename and save the solution")
                .arg(solution_arg())
                .arg(
                    Arg::new("NAMES")
                        .help("Names of the projects to remove")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .allow_hyphen_values(true)
                        .value_name("SUFFIX")
                        .help("Suffix for renamed files and projects"),
                )
                .arg(dry_run_arg()),
            Command::new("apply")
                .about("Run a recipe against a solution")
                .arg(solution_arg())
                .arg(
                    Arg::new("recipe")
                        .long("recipe")
                        .value_name("FILE")
                        .help("Recipe file to use instead of the discovered ones"),
                )
                .arg(dry_run_arg()),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sln-transform.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
