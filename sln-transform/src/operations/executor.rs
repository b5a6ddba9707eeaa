//! Plan execution engine.
//!
//! This module implements the executor that takes a [`RenamePlan`] and
//! carries it out through the storage boundary.

use crate::error::Result;
use crate::project_file::{ProjectFile, ProjectFileLoader};
use crate::solution::SolutionDocument;
use crate::storage::Storage;

use super::plan::{FileAction, RenamePlan};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Sidecar copies skipped because their source does not exist.
    pub skipped: Vec<String>,
}

impl ExecutionResult {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    fn record(&mut self, action: &FileAction) {
        self.actions_taken.push(action.description());
    }

    fn skip(&mut self, action: &FileAction) {
        log::debug!("skipping missing sidecar: {action}");
        self.skipped.push(action.description());
    }
}

/// Executes rename plans against storage.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (reporting without changes).
///
/// # Examples
///
/// ```
/// use sln_transform::operations::{PlanExecutor, RenamePlan};
/// use sln_transform::path::FilePath;
/// use sln_transform::project_file::VerbatimLoader;
/// use sln_transform::rename::SuffixRename;
/// use sln_transform::solution::SolutionDocument;
/// use sln_transform::storage::MemoryStorage;
///
/// let storage = MemoryStorage::new();
/// let mut doc = SolutionDocument::parse(
///     FilePath::new_file("C:\\work\\All.sln"),
///     "Microsoft Visual Studio Solution File, Format Version 12.00\r\nGlobal\r\nEndGlobal\r\n",
/// )
/// .unwrap();
/// let plan = RenamePlan::compute(&doc, &SuffixRename::new("-Copy"), &[]);
///
/// let result = PlanExecutor::new(&storage, &VerbatimLoader)
///     .execute(&plan, &mut doc)
///     .unwrap();
/// assert!(!result.dry_run);
/// assert_eq!(doc.path().as_str(), "C:\\work\\All-Copy.sln");
/// ```
pub struct PlanExecutor<'a> {
    storage: &'a dyn Storage,
    loader: &'a dyn ProjectFileLoader,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(storage: &'a dyn Storage, loader: &'a dyn ProjectFileLoader) -> Self {
        Self {
            storage,
            loader,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor only reads: it reports which actions
    /// would run and which sidecars would be skipped, and leaves the
    /// document untouched.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// Project files are all loaded before anything is written. Then the
    /// document is renamed, each project file is saved under its new path
    /// followed by its sidecars, and finally the solution is written.
    ///
    /// # Errors
    ///
    /// Returns the first storage error; nothing after it is attempted.
    pub fn execute(
        &self,
        plan: &RenamePlan,
        document: &mut SolutionDocument,
    ) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(self.report(plan));
        }

        let files = plan
            .projects
            .iter()
            .map(|project| self.loader.load(self.storage, &project.path_from))
            .collect::<Result<Vec<Box<dyn ProjectFile>>>>()?;

        plan.rename_document(document)?;

        let mut result = ExecutionResult::new(false);
        for (project, file) in plan.projects.iter().zip(&files) {
            file.save(self.storage, &project.path_to)?;
            result.record(&FileAction::SaveProject {
                from: project.path_from.clone(),
                to: project.path_to.clone(),
            });

            for copy in &project.sidecars {
                let action = FileAction::CopySidecar(copy.clone());
                if self.storage.exists(&copy.from) {
                    self.storage.copy(&copy.from, &copy.to)?;
                    result.record(&action);
                } else {
                    result.skip(&action);
                }
            }
        }

        document.save(self.storage)?;
        result.record(&FileAction::WriteSolution(document.path().clone()));
        log::info!("wrote {}", document.path());
        Ok(result)
    }

    fn report(&self, plan: &RenamePlan) -> ExecutionResult {
        let mut result = ExecutionResult::new(true);
        for action in plan.actions() {
            match &action {
                FileAction::CopySidecar(copy) if !self.storage.exists(&copy.from) => {
                    result.skip(&action);
                }
                _ => result.record(&action),
            }
        }
        result
    }
}
