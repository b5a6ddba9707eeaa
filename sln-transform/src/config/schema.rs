//! Recipe schema definitions.
//!
//! A recipe describes one transformation of a solution: which projects to
//! drop, how to rename what is left, and where to write the result.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::operations::{default_sidecar_extensions, Command, Transform};
use crate::path::FilePath;
use crate::rename::{IdentityRename, RenamePolicy, SuffixRename};

/// Complete recipe structure.
///
/// Every field is optional so recipes from several sources can be merged.
///
/// # Examples
///
/// ```
/// use sln_transform::config::{Config, RenameConfig};
///
/// let yaml = "rename:\n  suffix: -Modified\nremove: [Tests]\n";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.rename, Some(RenameConfig { suffix: Some("-Modified".to_string()) }));
/// assert_eq!(config.remove, Some(vec!["Tests".to_string()]));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rename settings; absent means names and paths are kept.
    pub rename: Option<RenameConfig>,

    /// Project names to remove.
    pub remove: Option<Vec<String>>,

    /// Project names to keep; every other non-folder project is removed.
    pub keep: Option<Vec<String>>,

    /// Sidecar extensions duplicated next to renamed project files.
    pub sidecar_extensions: Option<Vec<String>>,

    /// Move the solution here, relative to its current directory.
    pub relocate_to: Option<String>,
}

/// Rename settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenameConfig {
    /// Inserted before the extension of every renamed file and appended to
    /// every project name.
    pub suffix: Option<String>,
}

impl Config {
    /// The configured suffix, if any.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.rename.as_ref()?.suffix.as_deref()
    }

    /// The rename policy this recipe asks for.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::config::Config;
    ///
    /// let policy = Config::default().rename_policy();
    /// assert_eq!(policy.rename_sln("C:\\All.sln"), "C:\\All.sln");
    /// ```
    #[must_use]
    pub fn rename_policy(&self) -> Arc<dyn RenamePolicy> {
        match self.suffix() {
            Some(suffix) if !suffix.is_empty() => Arc::new(SuffixRename::new(suffix)),
            _ => Arc::new(IdentityRename),
        }
    }

    /// The configured sidecar extensions, or the defaults.
    #[must_use]
    pub fn effective_sidecar_extensions(&self) -> Vec<String> {
        self.sidecar_extensions
            .clone()
            .unwrap_or_else(default_sidecar_extensions)
    }

    /// The commands this recipe runs, in order: keep/remove, then relocation.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        let keep = self.keep.clone().unwrap_or_default();
        let remove = self.remove.clone().unwrap_or_default();

        let mut commands = Vec::new();
        if !keep.is_empty() || !remove.is_empty() {
            commands.push(Command::Modify { keep, remove });
        }
        if let Some(target) = &self.relocate_to {
            commands.push(Transform::RelocateSolution(FilePath::new_file(target)).into());
        }
        commands
    }
}
