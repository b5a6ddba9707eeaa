//! Rename policies applied when a transformed solution is saved.
//!
//! A policy is pure: the same input always yields the same output, and no
//! input is rejected.

use std::fmt;

use crate::path::normalize::is_separator;

/// Decides the new names of the solution, its projects and project files.
pub trait RenamePolicy: fmt::Debug {
    /// New display name for a project.
    fn rename_solution_project_name(&self, name: &str) -> String;

    /// New path for a project file.
    fn rename_csproj(&self, path: &str) -> String;

    /// New path for the solution file.
    fn rename_sln(&self, path: &str) -> String;
}

/// Leaves everything as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRename;

impl RenamePolicy for IdentityRename {
    fn rename_solution_project_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn rename_csproj(&self, path: &str) -> String {
        path.to_string()
    }

    fn rename_sln(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Appends a suffix to names, and to file names before their extension.
///
/// # Examples
///
/// ```
/// use sln_transform::rename::{RenamePolicy, SuffixRename};
///
/// let policy = SuffixRename::new("-Modified");
/// assert_eq!(policy.rename_solution_project_name("App"), "App-Modified");
/// assert_eq!(policy.rename_csproj("C:\\work\\App\\App.csproj"), "C:\\work\\App\\App-Modified.csproj");
/// assert_eq!(policy.rename_sln("C:\\work\\All.sln"), "C:\\work\\All-Modified.sln");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRename {
    suffix: String,
}

impl SuffixRename {
    /// Create a policy appending `suffix`.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The suffix being appended.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn insert_before_extension(&self, path: &str) -> String {
        let name_start = path.rfind(is_separator).map_or(0, |index| index + 1);
        // A leading dot marks a hidden file, not an extension.
        match path[name_start..].rfind('.') {
            Some(dot) if dot > 0 => {
                let split = name_start + dot;
                format!("{}{}{}", &path[..split], self.suffix, &path[split..])
            }
            _ => format!("{path}{}", self.suffix),
        }
    }
}

impl RenamePolicy for SuffixRename {
    fn rename_solution_project_name(&self, name: &str) -> String {
        format!("{name}{}", self.suffix)
    }

    fn rename_csproj(&self, path: &str) -> String {
        self.insert_before_extension(path)
    }

    fn rename_sln(&self, path: &str) -> String {
        self.insert_before_extension(path)
    }
}
