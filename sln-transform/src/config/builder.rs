//! Recipe assembly from every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective recipe.
///
/// Sources are merged from lowest to highest precedence: user recipe,
/// `sln-transform.yaml`, `sln-transform.local.yaml` (or an explicit recipe
/// file instead of the two), environment variables, then programmatic
/// overrides.
///
/// # Examples
///
/// ```
/// use sln_transform::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { remove: Some(vec!["Tests".to_string()]), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.remove, Some(vec!["Tests".to_string()]));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    solution_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    recipe_file: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// An empty builder; without directories only the environment and
    /// overrides contribute.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover recipes next to the solution in `dir`.
    #[must_use]
    pub fn with_solution_dir(mut self, dir: &Path) -> Self {
        self.solution_dir = Some(dir.to_path_buf());
        self
    }

    /// Look for a user recipe in `dir`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Use this recipe instead of discovering one next to the solution.
    #[must_use]
    pub fn with_recipe_file(mut self, path: &Path) -> Self {
        self.recipe_file = Some(path.to_path_buf());
        self
    }

    /// Add a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Ignore every recipe file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load, validate and merge everything.
    ///
    /// # Errors
    ///
    /// Returns the first read, parse or validation error.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            self.load_sources()?
        };
        for source in &sources {
            ConfigValidator::validate(&source.config, source.precedence > 1)?;
        }

        let mut config = ConfigMerger::merge(sources);
        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config, true)?;
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();
        if let Some(user) = &self.user_dir {
            sources.extend(ConfigLoader::load_user(user)?);
        }
        match (&self.recipe_file, &self.solution_dir) {
            (Some(recipe), _) => sources.push(ConfigSource {
                path: recipe.clone(),
                precedence: 2,
                config: ConfigLoader::load_file(recipe)?,
            }),
            (None, Some(dir)) => sources.extend(ConfigLoader::discover(dir)?),
            (None, None) => {}
        }
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::SUFFIX_ENV;
    use crate::config::loader::{LOCAL_RECIPE_FILE, RECIPE_FILE, USER_RECIPE_FILE};
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_local_overrides_shared() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(RECIPE_FILE), "rename:\n  suffix: -A\nremove: [X]\n").unwrap();
        fs::write(dir.path().join(LOCAL_RECIPE_FILE), "rename:\n  suffix: -B\nremove: [Y]\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_solution_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(config.suffix(), Some("-B"));
        assert_eq!(config.remove, Some(vec!["X".to_string(), "Y".to_string()]));
    }

    #[test]
    fn test_explicit_recipe_replaces_discovery() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(RECIPE_FILE), "remove: [X]\n").unwrap();
        let recipe = dir.path().join("other.yaml");
        fs::write(&recipe, "remove: [Z]\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_solution_dir(dir.path())
            .with_recipe_file(&recipe)
            .build()
            .unwrap();
        assert_eq!(config.remove, Some(vec!["Z".to_string()]));
    }

    #[test]
    fn test_user_recipe_cannot_name_projects() {
        let user = TempDir::new().unwrap();
        fs::write(user.path().join(USER_RECIPE_FILE), "remove: [X]\n").unwrap();

        let result = ConfigBuilder::new().skip_env().with_user_dir(user.path()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_skip_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(RECIPE_FILE), "not: [valid").unwrap();
        let config = ConfigBuilder::new()
            .skip_env()
            .skip_files()
            .with_solution_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_env_between_files_and_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(RECIPE_FILE), "rename:\n  suffix: -File\n").unwrap();
        let saved = env::var(SUFFIX_ENV).ok();
        env::set_var(SUFFIX_ENV, "-Env");

        let from_env = ConfigBuilder::new().with_solution_dir(dir.path()).build();
        let overridden = ConfigBuilder::new()
            .with_solution_dir(dir.path())
            .with_config(Config {
                rename: Some(crate::config::RenameConfig {
                    suffix: Some("-Cli".to_string()),
                }),
                ..Default::default()
            })
            .build();

        match saved {
            Some(value) => env::set_var(SUFFIX_ENV, value),
            None => env::remove_var(SUFFIX_ENV),
        }
        assert_eq!(from_env.unwrap().suffix(), Some("-Env"));
        assert_eq!(overridden.unwrap().suffix(), Some("-Cli"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new()
            .skip_env()
            .with_config(Config {
                sidecar_extensions: Some(vec!["user".to_string()]),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
