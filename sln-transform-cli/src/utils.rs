//! Shared helpers for CLI commands.

use crate::error::CliError;
use sln_transform::storage::FileSystem;
use sln_transform::{
    Config, ConfigBuilder, ExecutionMode, FilePath, SolutionTransformer, TransformReport,
};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the user recipe directory under the home directory.
const USER_DIR_NAME: &str = ".sln-transform";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user recipe directory.
    pub user_dir: Option<PathBuf>,
}

/// Resolve a solution argument to an absolute path of an existing file.
///
/// Relative paths are taken from the current directory.
pub fn resolve_solution(path: &Path) -> Result<FilePath, CliError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    if !absolute.is_file() {
        return Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(FilePath::from_std(&absolute, false))
}

/// The user recipe directory: `--user-dir`, else `~/.sln-transform`.
pub fn resolve_user_dir(global: &GlobalOptions) -> Option<PathBuf> {
    global
        .user_dir
        .clone()
        .or_else(|| home::home_dir().map(|home| home.join(USER_DIR_NAME)))
}

/// Which recipe files contribute to a run.
#[derive(Debug, Clone, Copy)]
pub enum RecipeFiles<'a> {
    /// `sln-transform.yaml` and `sln-transform.local.yaml` next to the solution.
    Discover,
    /// One explicit recipe file instead of the discovered ones.
    Explicit(&'a Path),
    /// No solution recipes; only the user recipe and environment apply.
    UserOnly,
}

/// Build the effective recipe for a solution.
///
/// Precedence, highest first: `overrides` (from CLI flags), environment,
/// the solution recipes selected by `files`, user recipe.
pub fn load_configuration(
    global: &GlobalOptions,
    solution: &FilePath,
    files: RecipeFiles<'_>,
    overrides: Config,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);
    if let Some(dir) = resolve_user_dir(global) {
        builder = builder.with_user_dir(&dir);
    }
    match files {
        RecipeFiles::Discover => {
            if let Some(dir) = solution.parent() {
                builder = builder.with_solution_dir(&dir.to_path_buf());
            }
        }
        RecipeFiles::Explicit(recipe) => {
            if !recipe.is_file() {
                return Err(CliError::InvalidArguments(format!(
                    "Recipe not found: {}",
                    recipe.display()
                )));
            }
            builder = builder.with_recipe_file(recipe);
        }
        RecipeFiles::UserOnly => {}
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Open the solution and run `config` against it.
pub fn run_recipe(
    solution: &FilePath,
    config: &Config,
    dry_run: bool,
) -> Result<TransformReport, CliError> {
    let mode = if dry_run {
        ExecutionMode::DryRun
    } else {
        ExecutionMode::Apply
    };
    let policy = config.rename_policy();

    log::debug!("running {} commands against {solution}", config.commands().len());
    let mut transformer = SolutionTransformer::open(&FileSystem, solution)?
        .with_sidecar_extensions(config.effective_sidecar_extensions());
    Ok(transformer.transform(policy.as_ref(), &config.commands(), mode)?)
}

/// Print what a transformation did (or would do) to stdout.
pub fn print_report(report: &TransformReport, global: &GlobalOptions) {
    if global.quiet {
        return;
    }
    let prefix = if report.execution.dry_run {
        "Would"
    } else {
        "Did"
    };
    for line in report.applied.iter().chain(&report.synchronized) {
        println!("{line}");
    }
    for action in &report.execution.actions_taken {
        println!("{prefix}: {action}");
    }
    if global.verbose {
        for skipped in &report.execution.skipped {
            println!("Skipped: {skipped}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(user_dir: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: true,
            user_dir,
        }
    }

    #[test]
    fn test_resolve_missing_solution() {
        let err = resolve_solution(Path::new("/definitely/not/here.sln")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_explicit_user_dir_wins() {
        let dir = PathBuf::from("/tmp/recipes");
        assert_eq!(resolve_user_dir(&global(Some(dir.clone()))), Some(dir));
    }

    #[test]
    fn test_missing_recipe_is_invalid_argument() {
        let solution = FilePath::new_file("/tmp/All.sln");
        let err = load_configuration(
            &global(None),
            &solution,
            RecipeFiles::Explicit(Path::new("/definitely/not/here.yaml")),
            Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
