//! Reference synchronization.
//!
//! Commands add and remove project chapters without touching the Global
//! chapter. After a batch, the synchronizer compares the project set with a
//! snapshot taken before it and emits the bookkeeping transforms: removed
//! projects lose their configuration and nesting entries, added projects
//! gain configuration entries. Removals run first. A project whose GUID
//! survives under a new path (rebase, relocation) keeps its entries.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::solution::{ProjectKey, SolutionDocument, SolutionGuid};

use super::transform::Transform;

/// The project set of a document at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSnapshot {
    projects: BTreeMap<ProjectKey, String>,
}

impl ProjectSnapshot {
    /// Capture the projects of `document`, keyed by GUID and path.
    #[must_use]
    pub fn capture(document: &SolutionDocument) -> Self {
        Self {
            projects: document
                .projects()
                .map(|project| (project.key(), project.name().to_string()))
                .collect(),
        }
    }

    /// Number of projects captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether no projects were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects present here but not in `other`, with their names.
    pub fn missing_from<'a>(
        &'a self,
        other: &'a ProjectSnapshot,
    ) -> impl Iterator<Item = (&'a ProjectKey, &'a str)> + 'a {
        self.projects
            .iter()
            .filter(move |(key, _)| !other.projects.contains_key(*key))
            .map(|(key, name)| (key, name.as_str()))
    }
}

/// Diffs two snapshots into corrective transforms.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSynchronizer;

impl ReferenceSynchronizer {
    /// The transforms that reconcile the Global chapter with `after`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::operations::{ProjectSnapshot, ReferenceSynchronizer};
    ///
    /// let empty = ProjectSnapshot::default();
    /// assert!(ReferenceSynchronizer::plan(&empty, &empty).is_empty());
    /// ```
    #[must_use]
    pub fn plan(before: &ProjectSnapshot, after: &ProjectSnapshot) -> Vec<Transform> {
        // A GUID on both sides under different paths was rebased or
        // relocated; its Global entries still apply.
        let gone: BTreeSet<&SolutionGuid> = before
            .missing_from(after)
            .map(|(key, _)| &key.guid)
            .collect();
        let moved: BTreeSet<&SolutionGuid> = after
            .missing_from(before)
            .map(|(key, _)| &key.guid)
            .filter(|guid| gone.contains(guid))
            .collect();

        let removed = before
            .missing_from(after)
            .filter(|(key, _)| !moved.contains(&key.guid))
            .map(|(key, name)| {
                log::debug!("project {name} removed, dropping its global entries");
                Transform::ConvertProjectToAssembly(key.guid.clone())
            });
        let added = after
            .missing_from(before)
            .filter(|(key, name)| {
                let is_move = moved.contains(&key.guid);
                if is_move {
                    log::debug!("project {name} moved to {}, keeping its global entries", key.path);
                }
                !is_move
            })
            .map(|(key, name)| {
                log::debug!("project {name} added, wiring its configurations");
                Transform::ConvertAssemblyToProject(key.guid.clone())
            });
        removed.chain(added).collect()
    }

    /// Compute and apply the corrective transforms, returning their
    /// descriptions.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a transform.
    pub fn synchronize(
        document: &mut SolutionDocument,
        before: &ProjectSnapshot,
    ) -> Result<Vec<String>> {
        let after = ProjectSnapshot::capture(document);
        let transforms = Self::plan(before, &after);
        let mut applied = Vec::with_capacity(transforms.len());
        for transform in &transforms {
            transform.apply(document)?;
            applied.push(transform.description());
        }
        Ok(applied)
    }
}
