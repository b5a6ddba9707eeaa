//! Recipe merging and precedence handling.
//!
//! Later sources override earlier ones field by field, except `remove`,
//! which accumulates across sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, RenameConfig};

/// Merges recipe sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use sln_transform::config::{Config, ConfigMerger};
///
/// let low = Config { relocate_to: Some("a.sln".to_string()), ..Default::default() };
/// let high = Config { relocate_to: Some("b.sln".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.relocate_to, Some("b.sln".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target` (source wins).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - `remove`: accumulated, without case-insensitive duplicates
    /// - `keep` and `sidecar_extensions`: complete replacement
    /// - `rename`: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(remove) = &source.remove {
            let existing = target.remove.get_or_insert_with(Vec::new);
            for name in remove {
                if !existing.iter().any(|e| e.eq_ignore_ascii_case(name)) {
                    existing.push(name.clone());
                }
            }
        }

        if source.keep.is_some() {
            target.keep.clone_from(&source.keep);
        }

        if source.sidecar_extensions.is_some() {
            target.sidecar_extensions.clone_from(&source.sidecar_extensions);
        }

        if source.relocate_to.is_some() {
            target.relocate_to.clone_from(&source.relocate_to);
        }

        if let Some(source_rename) = &source.rename {
            target.rename = Some(match &target.rename {
                Some(target_rename) => Self::merge_rename(target_rename, source_rename),
                None => source_rename.clone(),
            });
        }
    }

    fn merge_rename(target: &RenameConfig, source: &RenameConfig) -> RenameConfig {
        RenameConfig {
            suffix: source.suffix.clone().or_else(|| target.suffix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/tmp/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    fn names(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_remove_accumulates() {
        let merged = ConfigMerger::merge(vec![
            source(1, Config { remove: names(&["A", "B"]), ..Default::default() }),
            source(2, Config { remove: names(&["b", "C"]), ..Default::default() }),
        ]);
        assert_eq!(merged.remove, names(&["A", "B", "C"]));
    }

    #[test]
    fn test_keep_is_replaced() {
        let merged = ConfigMerger::merge(vec![
            source(1, Config { keep: names(&["A", "B"]), ..Default::default() }),
            source(2, Config { keep: names(&["C"]), ..Default::default() }),
        ]);
        assert_eq!(merged.keep, names(&["C"]));
    }

    #[test]
    fn test_none_values_dont_overwrite() {
        let mut target = Config {
            relocate_to: Some("out.sln".to_string()),
            sidecar_extensions: names(&[".user"]),
            rename: Some(RenameConfig { suffix: Some("-A".to_string()) }),
            ..Default::default()
        };
        ConfigMerger::merge_into(
            &mut target,
            &Config { rename: Some(RenameConfig::default()), ..Default::default() },
        );
        assert_eq!(target.relocate_to.as_deref(), Some("out.sln"));
        assert_eq!(target.sidecar_extensions, names(&[".user"]));
        assert_eq!(target.suffix(), Some("-A"));
    }

    #[test]
    fn test_suffix_overridden() {
        let merged = ConfigMerger::merge(vec![
            source(1, Config { rename: Some(RenameConfig { suffix: Some("-A".to_string()) }), ..Default::default() }),
            source(2, Config { rename: Some(RenameConfig { suffix: Some("-B".to_string()) }), ..Default::default() }),
        ]);
        assert_eq!(merged.suffix(), Some("-B"));
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let config = Config {
            remove: names(&["A"]),
            relocate_to: Some("x.sln".to_string()),
            ..Default::default()
        };
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        assert_eq!(merged, config);
    }
}
