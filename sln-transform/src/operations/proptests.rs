//! Property-based tests for the transform pipeline.

use super::{Command, ProjectSnapshot, ReferenceSynchronizer, RenamePlan, Transform};
use crate::path::FilePath;
use crate::rename::SuffixRename;
use crate::solution::SolutionDocument;
use proptest::prelude::*;

const GLOBAL: &str = "Global\r\n\
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution\r\n\
\t\tDebug|Any CPU = Debug|Any CPU\r\n\
\t\tRelease|Any CPU = Release|Any CPU\r\n\
\tEndGlobalSection\r\n\
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution\r\n\
\tEndGlobalSection\r\n\
EndGlobal\r\n";

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}"
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(name_strategy(), 1..6).prop_map(|set| set.into_iter().collect())
}

// A solution with one wired project per name.
fn solution(names: &[String]) -> SolutionDocument {
    let mut doc = SolutionDocument::parse(
        FilePath::new_file("C:\\work\\All.sln"),
        &format!("Microsoft Visual Studio Solution File, Format Version 12.00\r\n{GLOBAL}"),
    )
    .unwrap();
    let before = ProjectSnapshot::capture(&doc);
    for name in names {
        Transform::add_csharp_project(name.as_str(), FilePath::new_file(&format!("{name}\\{name}.csproj")))
            .unwrap()
            .apply(&mut doc)
            .unwrap();
    }
    ReferenceSynchronizer::synchronize(&mut doc, &before).unwrap();
    doc
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Removing any subset leaves no trace of the removed GUIDs
    #[test]
    fn removed_projects_leave_no_global_entries(
        names in names_strategy(),
        mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mut doc = solution(&names);
        let removed: Vec<String> = names
            .iter()
            .zip(&mask)
            .filter(|(_, remove)| **remove)
            .map(|(name, _)| name.clone())
            .collect();
        let guids: Vec<_> = removed
            .iter()
            .map(|name| doc.require_project(name).unwrap().id().clone())
            .collect();

        let before = ProjectSnapshot::capture(&doc);
        Command::remove_projects(removed.clone()).apply(&mut doc).unwrap();
        ReferenceSynchronizer::synchronize(&mut doc, &before).unwrap();

        let text = doc.to_text();
        for guid in &guids {
            prop_assert!(!guid.appears_in(&text));
        }
        prop_assert_eq!(doc.projects().count(), names.len() - removed.len());
    }

    // Adding then removing the same project is invisible after sync
    #[test]
    fn add_then_remove_is_noop(names in names_strategy(), extra in "[a-z]{3,8}") {
        let mut doc = solution(&names);
        let original = doc.to_text();
        let before = ProjectSnapshot::capture(&doc);

        let name = format!("Extra{extra}");
        let add = Transform::add_csharp_project(name.as_str(), FilePath::new_file("Extra\\Extra.csproj")).unwrap();
        Command::composite(vec![add.into(), Command::remove_projects([name])])
            .apply(&mut doc)
            .unwrap();
        prop_assert!(ReferenceSynchronizer::synchronize(&mut doc, &before).unwrap().is_empty());
        prop_assert_eq!(doc.to_text(), original);
    }

    // Every project in a rename plan keeps its GUID and gains the suffix
    #[test]
    fn rename_plan_suffixes_every_project(names in names_strategy(), suffix in "-[A-Za-z]{1,6}") {
        let doc = solution(&names);
        let plan = RenamePlan::compute(&doc, &SuffixRename::new(suffix.as_str()), &[]);
        prop_assert_eq!(plan.projects.len(), names.len());
        for (rename, project) in plan.projects.iter().zip(doc.projects()) {
            prop_assert_eq!(&rename.guid, project.id());
            prop_assert_eq!(&rename.name_to, &format!("{}{suffix}", project.name()));
            prop_assert!(rename.path_to.as_str().ends_with(&format!("{suffix}.csproj")));
        }
    }
}
