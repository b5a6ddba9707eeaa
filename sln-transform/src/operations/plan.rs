//! The rename plan: what the finalizer will write, computed without I/O.

use std::fmt;

use crate::error::{Error, Result};
use crate::path::FilePath;
use crate::project_file::ProjectFileLoader;
use crate::rename::RenamePolicy;
use crate::solution::{SolutionDocument, SolutionGuid};
use crate::storage::Storage;

use super::executor::{ExecutionResult, PlanExecutor};

/// Sidecar extensions duplicated next to renamed project files.
pub const DEFAULT_SIDECAR_EXTENSIONS: [&str; 2] = [".cspscc", ".user"];

/// The defaults as owned strings.
#[must_use]
pub fn default_sidecar_extensions() -> Vec<String> {
    DEFAULT_SIDECAR_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// How one project is renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRename {
    /// The project's GUID.
    pub guid: SolutionGuid,
    /// Display name before renaming.
    pub name_from: String,
    /// Display name after renaming.
    pub name_to: String,
    /// Absolute project file path before renaming.
    pub path_from: FilePath,
    /// Absolute project file path after renaming.
    pub path_to: FilePath,
    /// `path_to` as stored in the renamed solution.
    pub stored_path: FilePath,
    /// Sidecar copies, skipping those whose source and target coincide.
    pub sidecars: Vec<SidecarCopy>,
}

/// A sidecar file to duplicate, if it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarCopy {
    /// Existing sidecar, e.g. `App.csproj.user`.
    pub from: FilePath,
    /// Duplicate next to the renamed project file.
    pub to: FilePath,
}

/// A single file-system action of a rename plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// Save a project file under its new path.
    SaveProject {
        /// Current location.
        from: FilePath,
        /// New location.
        to: FilePath,
    },

    /// Copy a sidecar file, skipped when the source is missing.
    CopySidecar(SidecarCopy),

    /// Write the serialized solution.
    WriteSolution(FilePath),
}

impl FileAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::SaveProject { from, to } => format!("Save project {from} as {to}"),
            Self::CopySidecar(copy) => format!("Copy {} to {}", copy.from, copy.to),
            Self::WriteSolution(path) => format!("Write solution {path}"),
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Everything a rename policy implies for one document.
///
/// Computing the plan is pure; [`PlanExecutor`](super::PlanExecutor)
/// carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Solution path before renaming.
    pub solution_from: FilePath,
    /// Solution path after renaming.
    pub solution_to: FilePath,
    /// One entry per non-folder project, in document order.
    pub projects: Vec<ProjectRename>,
}

impl RenamePlan {
    /// Compute the plan for `document` under `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::operations::RenamePlan;
    /// use sln_transform::path::FilePath;
    /// use sln_transform::rename::IdentityRename;
    /// use sln_transform::solution::SolutionDocument;
    ///
    /// let doc = SolutionDocument::parse(
    ///     FilePath::new_file("C:\\work\\All.sln"),
    ///     "Microsoft Visual Studio Solution File, Format Version 12.00\r\nGlobal\r\nEndGlobal\r\n",
    /// )
    /// .unwrap();
    /// let plan = RenamePlan::compute(&doc, &IdentityRename, &[".user".to_string()]);
    /// assert_eq!(plan.solution_to, plan.solution_from);
    /// assert_eq!(plan.sidecars().count(), 0);
    /// ```
    #[must_use]
    pub fn compute(
        document: &SolutionDocument,
        policy: &dyn RenamePolicy,
        sidecar_extensions: &[String],
    ) -> Self {
        let solution_from = document.path().clone();
        let solution_to = FilePath::new_file(&policy.rename_sln(solution_from.as_str()));

        let mut projects = Vec::new();
        for project in document.projects().filter(|project| !project.is_folder()) {
            let path_from = document.project_file_path(project);
            let path_to = FilePath::new_file(&policy.rename_csproj(path_from.as_str()));

            let mut sidecars = Vec::new();
            for extension in sidecar_extensions {
                let from = format!("{}{extension}", path_from.as_str());
                let to = format!("{}{extension}", path_to.as_str());
                if from.to_lowercase() == to.to_lowercase() {
                    continue;
                }
                sidecars.push(SidecarCopy {
                    from: FilePath::new_file(&from),
                    to: FilePath::new_file(&to),
                });
            }

            projects.push(ProjectRename {
                guid: project.id().clone(),
                name_from: project.name().to_string(),
                name_to: policy.rename_solution_project_name(project.name()),
                stored_path: path_to.relative_to(&solution_to),
                path_from,
                path_to,
                sidecars,
            });
        }

        Self {
            solution_from,
            solution_to,
            projects,
        }
    }

    /// All sidecar copies, in project order.
    pub fn sidecars(&self) -> impl Iterator<Item = &SidecarCopy> {
        self.projects.iter().flat_map(|project| project.sidecars.iter())
    }

    /// File actions in execution order: project saves with their sidecars,
    /// then the solution.
    #[must_use]
    pub fn actions(&self) -> Vec<FileAction> {
        let mut actions = Vec::new();
        for project in &self.projects {
            actions.push(FileAction::SaveProject {
                from: project.path_from.clone(),
                to: project.path_to.clone(),
            });
            actions.extend(project.sidecars.iter().cloned().map(FileAction::CopySidecar));
        }
        actions.push(FileAction::WriteSolution(self.solution_to.clone()));
        actions
    }

    /// Apply the renames to the document model: project names, stored
    /// paths and the solution path.
    ///
    /// Stored paths are only rewritten when they change, so an identity
    /// plan leaves the document's text untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectNotFound`] if a planned project is no longer
    /// in the document.
    pub fn rename_document(&self, document: &mut SolutionDocument) -> Result<()> {
        for rename in &self.projects {
            let project = document
                .projects_mut()
                .find(|project| project.id() == &rename.guid)
                .ok_or_else(|| Error::ProjectNotFound {
                    name: rename.name_from.clone(),
                })?;
            if project.name() != rename.name_to {
                project.set_name(rename.name_to.clone());
            }
            if project.path() != &rename.stored_path {
                project.set_path(rename.stored_path.clone());
            }
        }
        document.set_path(self.solution_to.clone());
        Ok(())
    }

    /// Carry the plan out against `storage`: rename the document, save
    /// every project file and its sidecars, then write the solution.
    ///
    /// Shorthand for [`PlanExecutor::execute`](super::PlanExecutor::execute).
    ///
    /// # Errors
    ///
    /// Returns the first storage error; nothing after it is attempted.
    pub fn apply(
        &self,
        storage: &dyn Storage,
        loader: &dyn ProjectFileLoader,
        document: &mut SolutionDocument,
    ) -> Result<ExecutionResult> {
        PlanExecutor::new(storage, loader).execute(self, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::{IdentityRename, SuffixRename};

    const SOLUTION: &str = "Microsoft Visual Studio Solution File, Format Version 12.00\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App/App.csproj\", \"{5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F}\"\r\n\
EndProject\r\n\
Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"Libraries\", \"Libraries\", \"{6D6B9F4C-2B3C-4D4E-9F0A-1B2C3D4E5F60}\"\r\n\
EndProject\r\n\
Global\r\n\
EndGlobal\r\n";

    fn document() -> SolutionDocument {
        SolutionDocument::parse(FilePath::new_file("C:\\work\\All.sln"), SOLUTION).unwrap()
    }

    #[test]
    fn test_compute_with_suffix() {
        let plan = RenamePlan::compute(
            &document(),
            &SuffixRename::new("-Modified"),
            &default_sidecar_extensions(),
        );
        assert_eq!(plan.solution_to.as_str(), "C:\\work\\All-Modified.sln");
        assert_eq!(plan.projects.len(), 1);

        let app = &plan.projects[0];
        assert_eq!(app.name_to, "App-Modified");
        assert_eq!(app.path_from.as_str(), "C:\\work\\App\\App.csproj");
        assert_eq!(app.path_to.as_str(), "C:\\work\\App\\App-Modified.csproj");
        assert_eq!(app.stored_path.as_str(), "App\\App-Modified.csproj");

        let sidecars: Vec<_> = plan.sidecars().map(|s| s.to.as_str()).collect();
        assert_eq!(
            sidecars,
            vec![
                "C:\\work\\App\\App-Modified.csproj.cspscc",
                "C:\\work\\App\\App-Modified.csproj.user",
            ]
        );
    }

    #[test]
    fn test_identity_plan_has_no_sidecars() {
        let plan = RenamePlan::compute(&document(), &IdentityRename, &default_sidecar_extensions());
        assert_eq!(plan.sidecars().count(), 0);
        assert_eq!(plan.projects[0].path_from, plan.projects[0].path_to);
    }

    #[test]
    fn test_identity_rename_keeps_text() {
        let mut doc = document();
        RenamePlan::compute(&doc, &IdentityRename, &[])
            .rename_document(&mut doc)
            .unwrap();
        assert_eq!(doc.to_text(), SOLUTION);
    }

    #[test]
    fn test_actions_order() {
        let plan = RenamePlan::compute(
            &document(),
            &SuffixRename::new("-M"),
            &[".user".to_string()],
        );
        let descriptions: Vec<String> = plan.actions().iter().map(FileAction::description).collect();
        assert_eq!(
            descriptions,
            vec![
                "Save project C:\\work\\App\\App.csproj as C:\\work\\App\\App-M.csproj",
                "Copy C:\\work\\App\\App.csproj.user to C:\\work\\App\\App-M.csproj.user",
                "Write solution C:\\work\\All-M.sln",
            ]
        );
    }

    #[test]
    fn test_rename_document_missing_project() {
        let plan = RenamePlan::compute(&document(), &SuffixRename::new("-M"), &[]);
        let mut other = SolutionDocument::parse(
            FilePath::new_file("C:\\work\\All.sln"),
            "Microsoft Visual Studio Solution File, Format Version 12.00\r\nGlobal\r\nEndGlobal\r\n",
        )
        .unwrap();
        assert!(matches!(
            plan.rename_document(&mut other),
            Err(Error::ProjectNotFound { .. })
        ));
    }

    #[test]
    fn test_apply_writes_renamed_files() {
        use crate::project_file::VerbatimLoader;
        use crate::storage::MemoryStorage;

        let storage = MemoryStorage::new()
            .with_file("C:\\work\\App\\App.csproj", "<Project />");
        let mut doc = document();
        let plan = RenamePlan::compute(&doc, &SuffixRename::new("-M"), &[".user".to_string()]);

        let result = plan.apply(&storage, &VerbatimLoader, &mut doc).unwrap();

        assert_eq!(result.skipped.len(), 1);
        assert!(storage.exists(&FilePath::new_file("C:\\work\\App\\App-M.csproj")));
        assert!(storage.exists(&FilePath::new_file("C:\\work\\All-M.sln")));
        assert!(doc.find_project("App-M").is_some());
    }
}
