//! Commands sequence transforms against one document.

use crate::error::Result;
use crate::solution::SolutionDocument;

use super::transform::Transform;

/// A unit of work applied to a document.
///
/// Composite commands run their children in order against the same
/// document. There is no rollback: a failing child leaves the earlier
/// children's changes in place.
#[derive(Debug, Clone)]
pub enum Command {
    /// Apply one transform.
    Single(Transform),

    /// Apply commands in order.
    Composite(Vec<Command>),

    /// Keep and remove projects by name, resolved when the command runs.
    ///
    /// With a non-empty `keep` list, every non-folder project not named in
    /// it is removed first. Then every project named in `remove` is removed.
    Modify {
        /// Names to keep; empty keeps everything.
        keep: Vec<String>,
        /// Names to remove.
        remove: Vec<String>,
    },
}

impl Command {
    /// Wrap a list of commands.
    #[must_use]
    pub fn composite(commands: Vec<Command>) -> Self {
        Self::Composite(commands)
    }

    /// Remove each named project.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::operations::Command;
    ///
    /// let command = Command::remove_projects(["Tests", "Benchmarks"]);
    /// assert_eq!(command.descriptions(), vec!["Remove project Tests", "Remove project Benchmarks"]);
    /// ```
    pub fn remove_projects<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(
            names
                .into_iter()
                .map(|name| Self::Single(Transform::RemoveProject(name.into())))
                .collect(),
        )
    }

    /// Remove every non-folder project whose name is not listed.
    pub fn keep_only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Modify {
            keep: names.into_iter().map(Into::into).collect(),
            remove: Vec::new(),
        }
    }

    /// Descriptions of the transforms this command is known to contain.
    ///
    /// `Modify` commands are described by their lists, since the projects
    /// they remove depend on the document.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        match self {
            Self::Single(transform) => vec![transform.description()],
            Self::Composite(commands) => commands.iter().flat_map(Self::descriptions).collect(),
            Self::Modify { keep, remove } => {
                vec![format!("Keep {keep:?}, remove {remove:?}")]
            }
        }
    }

    /// Apply the command, returning descriptions of the transforms applied.
    ///
    /// # Errors
    ///
    /// Returns the first transform error; earlier changes are kept.
    pub fn apply(&self, document: &mut SolutionDocument) -> Result<Vec<String>> {
        let mut applied = Vec::new();
        self.apply_into(document, &mut applied)?;
        Ok(applied)
    }

    fn apply_into(&self, document: &mut SolutionDocument, applied: &mut Vec<String>) -> Result<()> {
        match self {
            Self::Single(transform) => {
                transform.apply(document)?;
                applied.push(transform.description());
            }
            Self::Composite(commands) => {
                for command in commands {
                    command.apply_into(document, applied)?;
                }
            }
            Self::Modify { keep, remove } => {
                for transform in modify_transforms(document, keep, remove) {
                    transform.apply(document)?;
                    applied.push(transform.description());
                }
            }
        }
        Ok(())
    }
}

fn modify_transforms(document: &SolutionDocument, keep: &[String], remove: &[String]) -> Vec<Transform> {
    let listed = |names: &[String], name: &str| names.iter().any(|n| n.eq_ignore_ascii_case(name));

    let mut transforms: Vec<Transform> = Vec::new();
    if !keep.is_empty() {
        transforms.extend(
            document
                .projects()
                .filter(|project| !project.is_folder() && !listed(keep, project.name()))
                .map(|project| Transform::RemoveProject(project.name().to_string())),
        );
    }
    for name in remove {
        let already = transforms
            .iter()
            .any(|t| matches!(t, Transform::RemoveProject(n) if n.eq_ignore_ascii_case(name)));
        if !already {
            transforms.push(Transform::RemoveProject(name.clone()));
        }
    }
    transforms
}

impl From<Transform> for Command {
    fn from(transform: Transform) -> Self {
        Self::Single(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::FilePath;
    use crate::solution::ProjectChapter;

    const SOLUTION: &str = "Microsoft Visual Studio Solution File, Format Version 12.00\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"A\\A.csproj\", \"{AAAAAAAA-0000-0000-0000-000000000001}\"\r\n\
EndProject\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"B\", \"B\\B.csproj\", \"{BBBBBBBB-0000-0000-0000-000000000002}\"\r\n\
EndProject\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"C\", \"C\\C.csproj\", \"{CCCCCCCC-0000-0000-0000-000000000003}\"\r\n\
EndProject\r\n\
Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"Folder\", \"Folder\", \"{DDDDDDDD-0000-0000-0000-000000000004}\"\r\n\
EndProject\r\n\
Global\r\n\
EndGlobal\r\n";

    fn document() -> SolutionDocument {
        SolutionDocument::parse(FilePath::new_file("C:\\work\\All.sln"), SOLUTION).unwrap()
    }

    fn names(doc: &SolutionDocument) -> Vec<&str> {
        doc.projects().map(ProjectChapter::name).collect()
    }

    #[test]
    fn test_remove_projects() {
        let mut doc = document();
        let applied = Command::remove_projects(["B", "C"]).apply(&mut doc).unwrap();
        assert_eq!(applied.len(), 2);
        assert_eq!(names(&doc), vec!["A", "Folder"]);
    }

    #[test]
    fn test_keep_only_spares_folders() {
        let mut doc = document();
        Command::keep_only(["a"]).apply(&mut doc).unwrap();
        assert_eq!(names(&doc), vec!["A", "Folder"]);
    }

    #[test]
    fn test_modify_does_not_remove_twice() {
        let mut doc = document();
        let command = Command::Modify {
            keep: vec!["A".to_string(), "B".to_string()],
            remove: vec!["B".to_string(), "C".to_string()],
        };
        let applied = command.apply(&mut doc).unwrap();
        assert_eq!(applied, vec!["Remove project C", "Remove project B"]);
        assert_eq!(names(&doc), vec!["A", "Folder"]);
    }

    #[test]
    fn test_composite_stops_at_first_error() {
        let mut doc = document();
        let command = Command::composite(vec![
            Command::remove_projects(["A"]),
            Command::remove_projects(["Missing"]),
            Command::remove_projects(["B"]),
        ]);
        let err = command.apply(&mut doc).unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound { .. }));
        // No rollback: A is gone, B was never reached.
        assert_eq!(names(&doc), vec!["B", "C", "Folder"]);
    }

    #[test]
    fn test_from_transform() {
        let command: Command = Transform::RemoveProject("A".to_string()).into();
        assert_eq!(command.descriptions(), vec!["Remove project A"]);
    }
}
