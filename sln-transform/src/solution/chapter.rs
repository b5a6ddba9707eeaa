//! Chapters: the top-level `Project` … `EndProject` and `Global` …
//! `EndGlobal` blocks of a solution file, plus anything unrecognized.

use std::fmt;

use super::guid::SolutionGuid;
use super::section::{Section, SectionBody, SOLUTION_CONFIGURATION_PLATFORMS};
use crate::error::{Error, Result};
use crate::path::FilePath;

/// Identity of a project for reference synchronization.
///
/// Ordered by GUID, then by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectKey {
    /// The project's identity GUID.
    pub guid: SolutionGuid,
    /// The project path relative to the solution.
    pub path: FilePath,
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.guid)
    }
}

/// A `Project(...) = ...` chapter.
///
/// The path is kept both as a [`FilePath`] and as the text that was parsed,
/// so an untouched project serializes exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChapter {
    type_guid: SolutionGuid,
    name: String,
    path: FilePath,
    path_text: String,
    id: SolutionGuid,
    sections: Vec<Section>,
}

impl ProjectChapter {
    /// Create a project chapter without sections.
    #[must_use]
    pub fn new(type_guid: SolutionGuid, name: impl Into<String>, path: FilePath, id: SolutionGuid) -> Self {
        Self {
            type_guid,
            name: name.into(),
            path_text: path.as_str().to_string(),
            path,
            id,
            sections: Vec::new(),
        }
    }

    /// Create a project chapter from parsed parts, keeping the raw path text.
    #[must_use]
    pub(crate) fn from_parts(
        type_guid: SolutionGuid,
        name: String,
        path_text: String,
        id: SolutionGuid,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            type_guid,
            name,
            path: FilePath::new_file(&path_text),
            path_text,
            id,
            sections,
        }
    }

    /// The project type GUID.
    #[must_use]
    pub fn type_guid(&self) -> &SolutionGuid {
        &self.type_guid
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the project.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The project path, usually relative to the solution.
    #[must_use]
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// The path as it will be written.
    #[must_use]
    pub fn path_text(&self) -> &str {
        &self.path_text
    }

    /// Point the project somewhere else.
    pub fn set_path(&mut self, path: FilePath) {
        self.path_text = path.as_str().to_string();
        self.path = path;
    }

    /// The identity GUID.
    #[must_use]
    pub fn id(&self) -> &SolutionGuid {
        &self.id
    }

    /// Returns `true` for solution folders.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.type_guid.is_solution_folder_type()
    }

    /// The key used by reference synchronization.
    #[must_use]
    pub fn key(&self) -> ProjectKey {
        ProjectKey {
            guid: self.id.clone(),
            path: self.path.clone(),
        }
    }

    /// Sections inside the chapter, such as `ProjectDependencies`.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections inside the chapter, mutably.
    pub fn sections_mut(&mut self) -> &mut Vec<Section> {
        &mut self.sections
    }

    /// The header line, e.g.
    /// `Project("{FAE0…}") = "App", "App\App.csproj", "{5C5A…}"`.
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "Project(\"{}\") = \"{}\", \"{}\", \"{}\"",
            self.type_guid, self.name, self.path_text, self.id
        )
    }
}

/// The `Global` chapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalChapter {
    sections: Vec<Section>,
}

impl GlobalChapter {
    /// Create a Global chapter from its sections.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// All sections in order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All sections in order, mutably.
    pub fn sections_mut(&mut self) -> &mut Vec<Section> {
        &mut self.sections
    }

    /// The solution's configuration/platform pairs, in order.
    ///
    /// Taken from the keys of `SolutionConfigurationPlatforms`; empty if the
    /// section is absent.
    #[must_use]
    pub fn solution_configurations(&self) -> Vec<String> {
        self.sections
            .iter()
            .find(|section| section.section_type() == SOLUTION_CONFIGURATION_PLATFORMS)
            .map(|section| section.body().keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// The `ProjectConfigurationPlatforms` section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSection`] if absent or
    /// [`Error::DuplicateSection`] if there is more than one.
    pub fn project_configuration_platforms(&self) -> Result<&SectionBody> {
        let mut found = self.sections.iter().filter_map(|section| match section {
            Section::ProjectConfigurationPlatforms(body) => Some(body),
            _ => None,
        });
        let first = found.next().ok_or_else(|| Error::MissingSection {
            section: super::section::PROJECT_CONFIGURATION_PLATFORMS.to_string(),
        })?;
        let extra = found.count();
        if extra > 0 {
            return Err(Error::DuplicateSection {
                section: super::section::PROJECT_CONFIGURATION_PLATFORMS.to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }

    fn project_configuration_platforms_mut(&mut self) -> Result<&mut SectionBody> {
        // Validate uniqueness through the shared accessor first.
        self.project_configuration_platforms()?;
        self.sections
            .iter_mut()
            .find_map(|section| match section {
                Section::ProjectConfigurationPlatforms(body) => Some(body),
                _ => None,
            })
            .ok_or_else(|| Error::MissingSection {
                section: super::section::PROJECT_CONFIGURATION_PLATFORMS.to_string(),
            })
    }

    /// The `NestedProjects` section, if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if there is more than one.
    pub fn nested_projects(&self) -> Result<Option<&SectionBody>> {
        let found: Vec<&SectionBody> = self
            .sections
            .iter()
            .filter_map(|section| match section {
                Section::NestedProjects(body) => Some(body),
                _ => None,
            })
            .collect();
        match found.as_slice() {
            [] => Ok(None),
            [body] => Ok(Some(body)),
            _ => Err(Error::DuplicateSection {
                section: super::section::NESTED_PROJECTS.to_string(),
                count: found.len(),
            }),
        }
    }

    /// The parent folder of `project` according to `NestedProjects`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if `NestedProjects` is duplicated.
    pub fn parent_of(&self, project: &SolutionGuid) -> Result<Option<SolutionGuid>> {
        let Some(nested) = self.nested_projects()? else {
            return Ok(None);
        };
        nested
            .entries
            .iter()
            .find(|entry| project.appears_in(&entry.key))
            .map(|entry| SolutionGuid::parse(&entry.value))
            .transpose()
    }

    /// Add configuration entries for a new project, one pair per solution
    /// configuration. Returns the number of entries added.
    ///
    /// # Errors
    ///
    /// Returns an error if `ProjectConfigurationPlatforms` is missing or
    /// duplicated.
    pub fn add_project(&mut self, project: &SolutionGuid) -> Result<usize> {
        let platforms = self.solution_configurations();
        let body = self.project_configuration_platforms_mut()?;
        let added = body.add_project_configurations(project, &platforms);
        log::debug!("added {added} configuration entries for {project}");
        Ok(added)
    }

    /// Remove every trace of a project from the Global chapter.
    ///
    /// Configuration entries are matched by key; nesting entries are
    /// matched by key or value, so removing a folder also drops its
    /// children's nesting. Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns an error if `ProjectConfigurationPlatforms` is missing or
    /// either specialized section is duplicated.
    pub fn remove_project(&mut self, project: &SolutionGuid) -> Result<usize> {
        self.nested_projects()?;
        let mut removed = self
            .project_configuration_platforms_mut()?
            .remove_project_entries(project, false);
        if let Some(Section::NestedProjects(body)) = self
            .sections
            .iter_mut()
            .find(|section| matches!(section, Section::NestedProjects(_)))
        {
            removed += body.remove_project_entries(project, true);
        }
        log::debug!("removed {removed} global entries for {project}");
        Ok(removed)
    }
}

/// A chapter whose start line is not recognized.
///
/// Kept verbatim so unknown content survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericChapter {
    /// The first line.
    pub start: String,
    /// The closing line, if the chapter spans more than one line.
    pub end: Option<String>,
    /// Sections between the start and end lines.
    pub sections: Vec<Section>,
}

/// A top-level block of a solution file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chapter {
    /// `Project(...)` … `EndProject`.
    Project(ProjectChapter),
    /// `Global` … `EndGlobal`.
    Global(GlobalChapter),
    /// Anything else.
    Generic(GenericChapter),
}

impl Chapter {
    /// The chapter's sections.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        match self {
            Self::Project(project) => project.sections(),
            Self::Global(global) => global.sections(),
            Self::Generic(generic) => &generic.sections,
        }
    }

    /// The project chapter, if this is one.
    #[must_use]
    pub fn as_project(&self) -> Option<&ProjectChapter> {
        match self {
            Self::Project(project) => Some(project),
            _ => None,
        }
    }

    /// The project chapter, mutably, if this is one.
    pub fn as_project_mut(&mut self) -> Option<&mut ProjectChapter> {
        match self {
            Self::Project(project) => Some(project),
            _ => None,
        }
    }

    /// The Global chapter, if this is it.
    #[must_use]
    pub fn as_global(&self) -> Option<&GlobalChapter> {
        match self {
            Self::Global(global) => Some(global),
            _ => None,
        }
    }

    /// The Global chapter, mutably, if this is it.
    pub fn as_global_mut(&mut self) -> Option<&mut GlobalChapter> {
        match self {
            Self::Global(global) => Some(global),
            _ => None,
        }
    }
}
