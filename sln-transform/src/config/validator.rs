//! Recipe validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::normalize::is_separator;

/// Validates recipes.
///
/// # Examples
///
/// ```
/// use sln_transform::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config, false).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete recipe.
    ///
    /// # Arguments
    ///
    /// * `config` - The recipe to validate
    /// * `is_solution_recipe` - Whether the recipe sits next to a solution;
    ///   only those may name projects or a relocation target
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config, is_solution_recipe: bool) -> Result<()> {
        for (field, present) in [
            ("remove", config.remove.is_some()),
            ("keep", config.keep.is_some()),
            ("relocate_to", config.relocate_to.is_some()),
        ] {
            if present && !is_solution_recipe {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("{field} is only valid in a solution's recipe"),
                });
            }
        }

        if let Some(suffix) = config.suffix() {
            Self::validate_suffix(suffix)?;
        }

        if let Some(ref extensions) = config.sidecar_extensions {
            Self::validate_extensions(extensions)?;
        }

        if let Some(ref remove) = config.remove {
            Self::validate_names("remove", remove)?;
        }

        if let Some(ref keep) = config.keep {
            Self::validate_names("keep", keep)?;
            if let Some(ref remove) = config.remove {
                if let Some(both) = keep
                    .iter()
                    .find(|k| remove.iter().any(|r| r.eq_ignore_ascii_case(k)))
                {
                    return Err(Error::Validation {
                        field: "keep".into(),
                        message: format!("{both} is both kept and removed"),
                    });
                }
            }
        }

        if let Some(ref target) = config.relocate_to {
            if target.trim().is_empty() {
                return Err(Error::Validation {
                    field: "relocate_to".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// The suffix ends up inside file names, so it may not hold separators.
    fn validate_suffix(suffix: &str) -> Result<()> {
        if suffix.chars().any(is_separator) {
            return Err(Error::Validation {
                field: "rename.suffix".into(),
                message: format!("Suffix cannot contain path separators: {suffix}"),
            });
        }
        if suffix.contains('\0') {
            return Err(Error::Validation {
                field: "rename.suffix".into(),
                message: "Cannot contain null bytes".into(),
            });
        }
        Ok(())
    }

    fn validate_extensions(extensions: &[String]) -> Result<()> {
        for (i, extension) in extensions.iter().enumerate() {
            if !extension.starts_with('.') || extension.len() < 2 {
                return Err(Error::Validation {
                    field: format!("sidecar_extensions[{i}]"),
                    message: format!("Extension must start with '.': {extension}"),
                });
            }
            if extension.chars().any(is_separator) {
                return Err(Error::Validation {
                    field: format!("sidecar_extensions[{i}]"),
                    message: format!("Extension cannot contain path separators: {extension}"),
                });
            }
        }
        Ok(())
    }

    fn validate_names(field: &str, names: &[String]) -> Result<()> {
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("{field}[{i}]"),
                    message: "Project name cannot be empty or only whitespace".into(),
                });
            }
        }
        Ok(())
    }
}
