//! Apply command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_report, resolve_solution, run_recipe, GlobalOptions, RecipeFiles,
};
use clap::Args;
use sln_transform::Config;
use std::path::PathBuf;

/// Run a recipe against a solution.
///
/// Without `--recipe`, the recipes next to the solution
/// (`sln-transform.yaml`, `sln-transform.local.yaml`) are used.
#[derive(Args)]
pub struct ApplyCommand {
    /// Solution file
    #[arg(value_name = "SLN")]
    pub solution: PathBuf,

    /// Recipe file to use instead of the discovered ones
    #[arg(long, value_name = "FILE")]
    pub recipe: Option<PathBuf>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ApplyCommand {
    /// Execute the apply command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_solution(&self.solution)?;
        let files = match self.recipe.as_deref() {
            Some(recipe) => RecipeFiles::Explicit(recipe),
            None => RecipeFiles::Discover,
        };
        let config = load_configuration(global, &path, files, Config::default())?;
        log::debug!("recipe for {path}: {config:?}");

        let report = run_recipe(&path, &config, self.dry_run)?;
        print_report(&report, global);
        Ok(())
    }
}
