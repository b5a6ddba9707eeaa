//! The in-memory solution document.

use super::chapter::{Chapter, GlobalChapter, ProjectChapter};
use super::guid::SolutionGuid;
use super::{parser, serializer};
use crate::error::{Error, Result};
use crate::path::FilePath;
use crate::storage::Storage;

/// Line terminator used when writing a document back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n`, as Visual Studio writes.
    #[default]
    CrLf,
    /// `\n`.
    Lf,
}

impl LineEnding {
    /// CRLF if `text` contains any `\r\n`, LF if it has only bare line
    /// feeds, and the default otherwise.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else if text.contains('\n') {
            Self::Lf
        } else {
            Self::default()
        }
    }

    /// The terminator itself.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// A parsed solution: preamble lines followed by chapters.
///
/// Serializing an unmodified document reproduces its input line for line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionDocument {
    path: FilePath,
    preamble: Vec<String>,
    chapters: Vec<Chapter>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl SolutionDocument {
    /// Assemble a document.
    #[must_use]
    pub fn new(path: FilePath, preamble: Vec<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            path,
            preamble,
            chapters,
            line_ending: LineEnding::default(),
            trailing_newline: true,
        }
    }

    /// Parse solution text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on grammar violations.
    pub fn parse(path: FilePath, text: &str) -> Result<Self> {
        parser::parse_str(path, text)
    }

    /// Read and parse a solution file.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a parse error.
    pub fn load(storage: &dyn Storage, path: &FilePath) -> Result<Self> {
        log::debug!("loading solution {path}");
        let text = storage.read_text(path)?;
        Self::parse(path.clone(), &text)
    }

    /// Serialize to the document's own path.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written.
    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        log::debug!("saving solution {}", self.path);
        storage.write_text(&self.path, &self.to_text())
    }

    /// The solution file's location.
    #[must_use]
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// Move the document. Project paths are not touched.
    pub fn set_path(&mut self, path: FilePath) {
        self.path = path;
    }

    /// The directory containing the solution file.
    #[must_use]
    pub fn directory(&self) -> FilePath {
        self.path
            .parent()
            .unwrap_or_else(|| FilePath::new_directory(""))
    }

    /// Lines before the first chapter.
    #[must_use]
    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    /// All chapters in order.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// The terminator used by [`to_text`](Self::to_text).
    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Change the terminator used when writing.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Whether the text ends with a terminator.
    #[must_use]
    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Control whether the text ends with a terminator.
    pub fn set_trailing_newline(&mut self, trailing_newline: bool) {
        self.trailing_newline = trailing_newline;
    }

    /// Project chapters, including solution folders, in order.
    pub fn projects(&self) -> impl Iterator<Item = &ProjectChapter> {
        self.chapters.iter().filter_map(Chapter::as_project)
    }

    /// Project chapters, mutably.
    pub fn projects_mut(&mut self) -> impl Iterator<Item = &mut ProjectChapter> {
        self.chapters.iter_mut().filter_map(Chapter::as_project_mut)
    }

    /// Solution folders only.
    pub fn folders(&self) -> impl Iterator<Item = &ProjectChapter> {
        self.projects().filter(|project| project.is_folder())
    }

    /// Find a project by display name, ignoring case.
    #[must_use]
    pub fn find_project(&self, name: &str) -> Option<&ProjectChapter> {
        let wanted = name.to_lowercase();
        self.projects()
            .find(|project| project.name().to_lowercase() == wanted)
    }

    /// Find a project by identity GUID.
    #[must_use]
    pub fn find_project_by_guid(&self, guid: &SolutionGuid) -> Option<&ProjectChapter> {
        self.projects().find(|project| project.id() == guid)
    }

    /// Look up a project by name, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectNotFound`] if no project has that name.
    pub fn require_project(&self, name: &str) -> Result<&ProjectChapter> {
        self.find_project(name).ok_or_else(|| Error::ProjectNotFound {
            name: name.to_string(),
        })
    }

    /// A project's path resolved against the solution file.
    #[must_use]
    pub fn project_file_path(&self, project: &ProjectChapter) -> FilePath {
        project.path().to_absolute(&self.path)
    }

    /// The Global chapter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingGlobalChapter`] if there is none.
    pub fn global(&self) -> Result<&GlobalChapter> {
        self.chapters
            .iter()
            .find_map(Chapter::as_global)
            .ok_or(Error::MissingGlobalChapter)
    }

    /// The Global chapter, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingGlobalChapter`] if there is none.
    pub fn global_mut(&mut self) -> Result<&mut GlobalChapter> {
        self.chapters
            .iter_mut()
            .find_map(Chapter::as_global_mut)
            .ok_or(Error::MissingGlobalChapter)
    }

    /// Insert a project chapter after the last existing project, or before
    /// the Global chapter when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProject`] if a project with the same GUID
    /// is already present.
    pub fn insert_project(&mut self, project: ProjectChapter) -> Result<()> {
        if let Some(existing) = self.find_project_by_guid(project.id()) {
            return Err(Error::DuplicateProject {
                name: existing.name().to_string(),
            });
        }
        let index = self
            .chapters
            .iter()
            .rposition(|chapter| matches!(chapter, Chapter::Project(_)))
            .map(|last| last + 1)
            .or_else(|| {
                self.chapters
                    .iter()
                    .position(|chapter| matches!(chapter, Chapter::Global(_)))
            })
            .unwrap_or(self.chapters.len());
        self.chapters.insert(index, Chapter::Project(project));
        Ok(())
    }

    /// Remove a project chapter by GUID, returning it.
    ///
    /// Global sections are left untouched.
    pub fn remove_project(&mut self, guid: &SolutionGuid) -> Option<ProjectChapter> {
        let index = self
            .chapters
            .iter()
            .position(|chapter| chapter.as_project().is_some_and(|p| p.id() == guid))?;
        match self.chapters.remove(index) {
            Chapter::Project(project) => Some(project),
            _ => None,
        }
    }

    /// Serialize to lines without terminators.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        serializer::to_lines(self)
    }

    /// Serialize to text using the document's line ending.
    #[must_use]
    pub fn to_text(&self) -> String {
        serializer::to_text(self)
    }
}
