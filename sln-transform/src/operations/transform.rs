//! Single mutations of a solution document.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::path::FilePath;
use crate::rename::RenamePolicy;
use crate::solution::{ProjectChapter, SolutionDocument, SolutionGuid, CSHARP_PROJECT_TYPE};

use super::plan::RenamePlan;

/// One mutation of a [`SolutionDocument`].
///
/// Adding and removing projects only touches project chapters; the Global
/// chapter bookkeeping is done by the two `Convert*` variants, which the
/// reference synchronizer emits after a batch.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Insert a project chapter.
    AddProject(ProjectChapter),

    /// Remove the project with this name.
    RemoveProject(String),

    /// Rename every non-folder project and the solution.
    RenameProjects(Arc<dyn RenamePolicy>),

    /// Drop a project's configuration and nesting entries.
    ConvertProjectToAssembly(SolutionGuid),

    /// Give a project configuration entries for every solution configuration.
    ConvertAssemblyToProject(SolutionGuid),

    /// Point a project at a new file.
    RebaseProject {
        /// Project name.
        name: String,
        /// New location; absolute paths are stored relative to the solution.
        path: FilePath,
    },

    /// Move the solution file, keeping every project where it is on disk.
    RelocateSolution(FilePath),
}

impl Transform {
    /// Add a C# project with a fresh GUID.
    ///
    /// # Errors
    ///
    /// Never fails for the well-known type GUID; the `Result` covers
    /// GUID parsing.
    pub fn add_csharp_project(name: impl Into<String>, path: FilePath) -> Result<Self> {
        let type_guid = SolutionGuid::parse(CSHARP_PROJECT_TYPE)?;
        Ok(Self::AddProject(ProjectChapter::new(
            type_guid,
            name,
            path,
            SolutionGuid::new_v4(),
        )))
    }

    /// Returns a human-readable description of this transform.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::AddProject(project) => {
                format!("Add project {} ({})", project.name(), project.path())
            }
            Self::RemoveProject(name) => format!("Remove project {name}"),
            Self::RenameProjects(policy) => format!("Rename projects with {policy:?}"),
            Self::ConvertProjectToAssembly(guid) => {
                format!("Convert project {guid} to an assembly reference")
            }
            Self::ConvertAssemblyToProject(guid) => {
                format!("Convert assembly reference {guid} to a project")
            }
            Self::RebaseProject { name, path } => format!("Rebase project {name} onto {path}"),
            Self::RelocateSolution(path) => format!("Relocate solution to {path}"),
        }
    }

    /// Apply the transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectNotFound`] for unknown project names or
    /// GUIDs, [`Error::DuplicateProject`] when adding an existing project,
    /// and structural errors from the Global chapter.
    pub fn apply(&self, document: &mut SolutionDocument) -> Result<()> {
        log::debug!("{}", self.description());
        match self {
            Self::AddProject(project) => {
                let mut project = project.clone();
                if project.path().is_absolute() {
                    project.set_path(project.path().relative_to(document.path()));
                }
                document.insert_project(project)
            }
            Self::RemoveProject(name) => {
                let guid = document.require_project(name)?.id().clone();
                document.remove_project(&guid);
                Ok(())
            }
            Self::RenameProjects(policy) => {
                RenamePlan::compute(document, policy.as_ref(), &[]).rename_document(document)
            }
            Self::ConvertProjectToAssembly(guid) => {
                document.global_mut()?.remove_project(guid).map(|_| ())
            }
            Self::ConvertAssemblyToProject(guid) => {
                let project = document
                    .find_project_by_guid(guid)
                    .ok_or_else(|| Error::ProjectNotFound {
                        name: guid.to_string(),
                    })?;
                if project.is_folder() {
                    return Ok(());
                }
                document.global_mut()?.add_project(guid).map(|_| ())
            }
            Self::RebaseProject { name, path } => {
                let guid = document.require_project(name)?.id().clone();
                let stored = if path.is_absolute() {
                    path.relative_to(document.path())
                } else {
                    path.clone()
                };
                if let Some(project) = document.projects_mut().find(|p| p.id() == &guid) {
                    project.set_path(stored);
                }
                Ok(())
            }
            Self::RelocateSolution(target) => {
                relocate(document, target);
                Ok(())
            }
        }
    }
}

fn relocate(document: &mut SolutionDocument, target: &FilePath) {
    let target = target.to_absolute(document.path());
    let moves: Vec<(SolutionGuid, FilePath)> = document
        .projects()
        .filter(|project| !project.is_folder())
        .map(|project| {
            let absolute = document.project_file_path(project);
            (project.id().clone(), absolute.relative_to(&target))
        })
        .collect();

    for project in document.projects_mut() {
        if let Some((_, path)) = moves.iter().find(|(guid, _)| guid == project.id()) {
            project.set_path(path.clone());
        }
    }
    document.set_path(target);
}
