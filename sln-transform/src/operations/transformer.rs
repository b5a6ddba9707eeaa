//! The end-to-end pipeline: commands, synchronization, finalization.

use crate::error::Result;
use crate::path::FilePath;
use crate::project_file::{ProjectFileLoader, VerbatimLoader};
use crate::rename::RenamePolicy;
use crate::solution::SolutionDocument;
use crate::storage::Storage;

use super::command::Command;
use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::{default_sidecar_extensions, RenamePlan};
use super::sync::{ProjectSnapshot, ReferenceSynchronizer};

/// Whether the finalizer writes files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Write everything.
    #[default]
    Apply,
    /// Transform in memory and report, without writing.
    DryRun,
}

/// What a transformation did.
#[derive(Debug, Clone)]
pub struct TransformReport {
    /// Descriptions of the command transforms, in order.
    pub applied: Vec<String>,
    /// Descriptions of the synchronizer's transforms, in order.
    pub synchronized: Vec<String>,
    /// The rename plan used by the finalizer.
    pub plan: RenamePlan,
    /// The finalizer's execution result.
    pub execution: ExecutionResult,
}

/// Owns one solution document and runs the pipeline over it.
///
/// # Examples
///
/// ```
/// use sln_transform::operations::{Command, ExecutionMode, SolutionTransformer};
/// use sln_transform::path::FilePath;
/// use sln_transform::rename::IdentityRename;
/// use sln_transform::storage::MemoryStorage;
///
/// let storage = MemoryStorage::new().with_file(
///     "C:\\work\\All.sln",
///     "Microsoft Visual Studio Solution File, Format Version 12.00\r\nGlobal\r\nEndGlobal\r\n",
/// );
/// let mut transformer =
///     SolutionTransformer::open(&storage, &FilePath::new_file("C:\\work\\All.sln")).unwrap();
/// let report = transformer
///     .transform(&IdentityRename, &[Command::composite(Vec::new())], ExecutionMode::DryRun)
///     .unwrap();
/// assert!(report.execution.dry_run);
/// ```
pub struct SolutionTransformer<'a> {
    document: SolutionDocument,
    storage: &'a dyn Storage,
    loader: Box<dyn ProjectFileLoader>,
    sidecar_extensions: Vec<String>,
}

impl<'a> SolutionTransformer<'a> {
    /// Wrap an already parsed document.
    #[must_use]
    pub fn new(document: SolutionDocument, storage: &'a dyn Storage) -> Self {
        Self {
            document,
            storage,
            loader: Box::new(VerbatimLoader),
            sidecar_extensions: default_sidecar_extensions(),
        }
    }

    /// Load and parse a solution file.
    ///
    /// # Errors
    ///
    /// Returns a storage or parse error.
    pub fn open(storage: &'a dyn Storage, path: &FilePath) -> Result<Self> {
        Ok(Self::new(SolutionDocument::load(storage, path)?, storage))
    }

    /// Replace the sidecar extensions (default `.cspscc`, `.user`).
    #[must_use]
    pub fn with_sidecar_extensions(mut self, extensions: Vec<String>) -> Self {
        self.sidecar_extensions = extensions;
        self
    }

    /// Replace the project file loader.
    #[must_use]
    pub fn with_loader(mut self, loader: Box<dyn ProjectFileLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// The document in its current state.
    #[must_use]
    pub fn document(&self) -> &SolutionDocument {
        &self.document
    }

    /// Give up the document.
    #[must_use]
    pub fn into_document(self) -> SolutionDocument {
        self.document
    }

    /// Run the commands in order, synchronize references once, then rename
    /// and save.
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage; later stages do not run.
    pub fn transform(
        &mut self,
        policy: &dyn RenamePolicy,
        commands: &[Command],
        mode: ExecutionMode,
    ) -> Result<TransformReport> {
        let before = ProjectSnapshot::capture(&self.document);

        let mut applied = Vec::new();
        for command in commands {
            applied.extend(command.apply(&mut self.document)?);
        }
        log::info!("applied {} transforms", applied.len());

        let synchronized = ReferenceSynchronizer::synchronize(&mut self.document, &before)?;
        log::info!("synchronized {} project references", synchronized.len());

        let plan = RenamePlan::compute(&self.document, policy, &self.sidecar_extensions);
        let executor = PlanExecutor::new(self.storage, self.loader.as_ref());
        let executor = match mode {
            ExecutionMode::Apply => executor,
            ExecutionMode::DryRun => executor.dry_run(),
        };
        let execution = executor.execute(&plan, &mut self.document)?;

        Ok(TransformReport {
            applied,
            synchronized,
            plan,
            execution,
        })
    }
}
