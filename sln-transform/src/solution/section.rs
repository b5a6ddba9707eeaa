//! Sections: the `Type(Name) = Position` … `EndType` blocks inside chapters.

use std::fmt;

use super::guid::SolutionGuid;

/// Section type of the Global chapter's per-project configuration map.
pub const PROJECT_CONFIGURATION_PLATFORMS: &str = "ProjectConfigurationPlatforms";

/// Section type of the Global chapter's folder nesting map.
pub const NESTED_PROJECTS: &str = "NestedProjects";

/// Section type listing the solution's configuration/platform pairs.
pub const SOLUTION_CONFIGURATION_PLATFORMS: &str = "SolutionConfigurationPlatforms";

/// One `key = value` line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Text left of the first `=`, trimmed.
    pub key: String,
    /// Text right of the first `=`, trimmed.
    pub value: String,
}

impl Entry {
    /// Create an entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// The data every section carries: its header tags and ordered entries.
///
/// Keys may repeat and order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBody {
    /// The tag before the parenthesis, e.g. `GlobalSection` or `ProjectSection`.
    pub chapter_section_type: String,
    /// The tag inside the parenthesis, e.g. `NestedProjects`.
    pub section_type: String,
    /// The tag after `=`, e.g. `preSolution`.
    pub position: String,
    /// Entries in file order.
    pub entries: Vec<Entry>,
}

impl SectionBody {
    /// Create an empty section body.
    #[must_use]
    pub fn new(
        chapter_section_type: impl Into<String>,
        section_type: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            chapter_section_type: chapter_section_type.into(),
            section_type: section_type.into(),
            position: position.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry::new(key, value));
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// The header line without indentation: `Type(Name) = Position`.
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "{}({}) = {}",
            self.chapter_section_type, self.section_type, self.position
        )
    }

    /// The closing line without indentation: `EndType`.
    #[must_use]
    pub fn footer(&self) -> String {
        format!("End{}", self.chapter_section_type)
    }

    /// Returns `true` if any key mentions `project`.
    #[must_use]
    pub fn mentions(&self, project: &SolutionGuid) -> bool {
        self.entries.iter().any(|entry| project.appears_in(&entry.key))
    }

    /// Append `ActiveCfg` and `Build.0` entries for every platform.
    ///
    /// Produces `{Guid}.<Platform>.ActiveCfg = <Platform>` followed by
    /// `{Guid}.<Platform>.Build.0 = <Platform>` per platform, in order.
    /// Returns the number of entries added.
    pub fn add_project_configurations(
        &mut self,
        project: &SolutionGuid,
        platforms: &[String],
    ) -> usize {
        for platform in platforms {
            for build in ["ActiveCfg", "Build.0"] {
                self.push(format!("{project}.{platform}.{build}"), platform.clone());
            }
        }
        platforms.len() * 2
    }

    /// Remove every entry whose key mentions `project`, and also entries
    /// whose value mentions it when `match_values` is set.
    ///
    /// Returns the number of entries removed.
    pub fn remove_project_entries(&mut self, project: &SolutionGuid, match_values: bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            !(project.appears_in(&entry.key) || (match_values && project.appears_in(&entry.value)))
        });
        before - self.entries.len()
    }
}

/// A section, tagged by how the transforms treat it.
///
/// The specialized variants only occur inside the Global chapter; the
/// behavior that needs the chapter's configuration list lives on
/// [`GlobalChapter`](super::chapter::GlobalChapter), which looks them up when
/// it needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Any section the transforms do not interpret.
    Generic(SectionBody),
    /// `{Guid}.<Platform>.<ActiveCfg|Build.0> = <Platform>` entries.
    ProjectConfigurationPlatforms(SectionBody),
    /// `{Child} = {Parent}` entries.
    NestedProjects(SectionBody),
}

impl Section {
    /// Choose the variant for a parsed body.
    ///
    /// Specialized variants are only chosen when `in_global` is set.
    #[must_use]
    pub fn classify(body: SectionBody, in_global: bool) -> Self {
        if !in_global {
            return Self::Generic(body);
        }
        match body.section_type.as_str() {
            PROJECT_CONFIGURATION_PLATFORMS => Self::ProjectConfigurationPlatforms(body),
            NESTED_PROJECTS => Self::NestedProjects(body),
            _ => Self::Generic(body),
        }
    }

    /// The section's data.
    #[must_use]
    pub fn body(&self) -> &SectionBody {
        match self {
            Self::Generic(body)
            | Self::ProjectConfigurationPlatforms(body)
            | Self::NestedProjects(body) => body,
        }
    }

    /// The section's data, mutably.
    pub fn body_mut(&mut self) -> &mut SectionBody {
        match self {
            Self::Generic(body)
            | Self::ProjectConfigurationPlatforms(body)
            | Self::NestedProjects(body) => body,
        }
    }

    /// Shorthand for `body().section_type`.
    #[must_use]
    pub fn section_type(&self) -> &str {
        &self.body().section_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guid() -> SolutionGuid {
        SolutionGuid::parse("{11111111-2222-3333-4444-555555555555}").unwrap()
    }

    #[test]
    fn test_header_and_footer() {
        let body = SectionBody::new("GlobalSection", "NestedProjects", "preSolution");
        assert_eq!(body.header(), "GlobalSection(NestedProjects) = preSolution");
        assert_eq!(body.footer(), "EndGlobalSection");
    }

    #[test]
    fn test_duplicate_keys_preserved_in_order() {
        let mut body = SectionBody::new("ProjectSection", "SolutionItems", "preProject");
        body.push("a.txt", "a.txt");
        body.push("a.txt", "b.txt");
        let values: Vec<_> = body.entries.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_add_project_configurations() {
        let mut body = SectionBody::new("GlobalSection", PROJECT_CONFIGURATION_PLATFORMS, "postSolution");
        let platforms = vec!["Debug|Any CPU".to_string(), "Release|Any CPU".to_string()];
        assert_eq!(body.add_project_configurations(&guid(), &platforms), 4);

        let lines: Vec<String> = body.entries.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "{11111111-2222-3333-4444-555555555555}.Debug|Any CPU.ActiveCfg = Debug|Any CPU",
                "{11111111-2222-3333-4444-555555555555}.Debug|Any CPU.Build.0 = Debug|Any CPU",
                "{11111111-2222-3333-4444-555555555555}.Release|Any CPU.ActiveCfg = Release|Any CPU",
                "{11111111-2222-3333-4444-555555555555}.Release|Any CPU.Build.0 = Release|Any CPU",
            ]
        );
        assert!(body.mentions(&guid()));
    }

    #[test]
    fn test_remove_project_entries_by_key() {
        let mut body = SectionBody::new("GlobalSection", PROJECT_CONFIGURATION_PLATFORMS, "postSolution");
        body.push("{11111111-2222-3333-4444-555555555555}.Debug|x86.ActiveCfg", "Debug|x86");
        body.push("{AAAAAAAA-2222-3333-4444-555555555555}.Debug|x86.ActiveCfg", "Debug|x86");
        assert_eq!(body.remove_project_entries(&guid(), false), 1);
        assert_eq!(body.entries.len(), 1);
        assert!(!body.mentions(&guid()));
    }

    #[test]
    fn test_remove_project_entries_by_value() {
        let mut body = SectionBody::new("GlobalSection", NESTED_PROJECTS, "preSolution");
        body.push(
            "{AAAAAAAA-2222-3333-4444-555555555555}",
            "{11111111-2222-3333-4444-555555555555}",
        );
        assert_eq!(body.remove_project_entries(&guid(), false), 0);
        assert_eq!(body.remove_project_entries(&guid(), true), 1);
    }

    #[test]
    fn test_classify() {
        let body = SectionBody::new("GlobalSection", NESTED_PROJECTS, "preSolution");
        assert!(matches!(
            Section::classify(body.clone(), true),
            Section::NestedProjects(_)
        ));
        assert!(matches!(Section::classify(body, false), Section::Generic(_)));

        let other = SectionBody::new("GlobalSection", "SolutionProperties", "preSolution");
        assert!(matches!(Section::classify(other, true), Section::Generic(_)));
    }
}
