//! Recipe file discovery and loading.
//!
//! Recipes live next to the solution they transform:
//! `sln-transform.yaml`, optionally overridden by an unversioned
//! `sln-transform.local.yaml`. A user-wide recipe may sit in a
//! caller-supplied directory as `config.yaml`.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Shared recipe file name.
pub const RECIPE_FILE: &str = "sln-transform.yaml";

/// Private recipe file name, taking precedence over [`RECIPE_FILE`].
pub const LOCAL_RECIPE_FILE: &str = "sln-transform.local.yaml";

/// User recipe file name inside the user directory.
pub const USER_RECIPE_FILE: &str = "config.yaml";

/// A recipe with its origin and precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the recipe file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed recipe.
    pub config: Config,
}

/// Loads recipes from files.
///
/// # Examples
///
/// ```no_run
/// use sln_transform::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::discover(Path::new("C:/work")).unwrap();
/// println!("Found {} recipe files", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user recipe and every recipe next to the solution, sorted
    /// from lowest to highest precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if any recipe exists but cannot be read or parsed.
    pub fn load_all(solution_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();
        if let Some(dir) = user_dir {
            sources.extend(Self::load_user(dir)?);
        }
        sources.extend(Self::discover(solution_dir)?);
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load `config.yaml` from the user directory, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user(user_dir: &Path) -> Result<Option<ConfigSource>> {
        let path = user_dir.join(USER_RECIPE_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Find the recipes in `solution_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover(solution_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        for (name, precedence) in [(RECIPE_FILE, 2), (LOCAL_RECIPE_FILE, 3)] {
            let path = solution_dir.join(name);
            if path.exists() {
                log::debug!("found recipe {}", path.display());
                let config = Self::load_file(&path)?;
                configs.push(ConfigSource {
                    path,
                    precedence,
                    config,
                });
            }
        }
        Ok(configs)
    }

    /// Load and parse a YAML recipe file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.display().to_string(),
            reason: format!("Failed to read recipe file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Parse a recipe from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid.
    pub fn parse(contents: &str) -> Result<Config> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
