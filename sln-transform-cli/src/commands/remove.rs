//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_report, resolve_solution, run_recipe, GlobalOptions, RecipeFiles,
};
use clap::Args;
use sln_transform::config::RenameConfig;
use sln_transform::Config;
use std::path::PathBuf;

/// Remove projects, then rename and save the solution.
///
/// Recipes next to the solution are not read; only the user recipe and
/// environment variables apply alongside the flags.
#[derive(Args)]
pub struct RemoveCommand {
    /// Solution file
    #[arg(value_name = "SLN")]
    pub solution: PathBuf,

    /// Names of the projects to remove
    #[arg(value_name = "NAMES", required = true)]
    pub names: Vec<String>,

    /// Suffix for renamed files and projects (empty keeps names)
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(blank) = self.names.iter().find(|name| name.trim().is_empty()) {
            return Err(CliError::InvalidArguments(format!(
                "project name must not be blank: {blank:?}"
            )));
        }

        let path = resolve_solution(&self.solution)?;
        let overrides = Config {
            rename: self.suffix.map(|suffix| RenameConfig {
                suffix: Some(suffix),
            }),
            remove: Some(self.names),
            ..Config::default()
        };
        let config = load_configuration(global, &path, RecipeFiles::UserOnly, overrides)?;

        let report = run_recipe(&path, &config, self.dry_run)?;
        print_report(&report, global);
        Ok(())
    }
}
