//! Environment variable overrides for recipes.

use crate::config::schema::{Config, RenameConfig};
use crate::error::Result;
use std::env;

/// Overrides the rename suffix.
pub const SUFFIX_ENV: &str = "SLN_TRANSFORM_SUFFIX";

/// Overrides the sidecar extensions (comma-separated).
pub const SIDECAR_EXTENSIONS_ENV: &str = "SLN_TRANSFORM_SIDECAR_EXTENSIONS";

/// Handles environment variable overrides for recipes.
///
/// # Examples
///
/// ```no_run
/// use sln_transform::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `SLN_TRANSFORM_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` matches the other recipe sources.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(suffix) = env::var(SUFFIX_ENV) {
            config
                .rename
                .get_or_insert_with(RenameConfig::default)
                .suffix = Some(suffix);
        }

        if let Ok(extensions) = env::var(SIDECAR_EXTENSIONS_ENV) {
            config.sidecar_extensions = Some(Self::parse_list(&extensions));
        }

        Ok(())
    }

    /// Split a comma-separated list, dropping blank items.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
