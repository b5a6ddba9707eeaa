//! Common test utilities for integration tests.
//!
//! This module provides fixture lookup and a temporary solution workspace
//! on the real file system.

use std::fs;
use std::path::{Path, PathBuf};

use sln_transform::FilePath;
use tempfile::TempDir;

/// GUID of project `A` in `Sample.sln`.
#[allow(dead_code)]
pub const A_GUID: &str = "11111111-AAAA-4AAA-8AAA-000000000001";

/// GUID of project `B` in `Sample.sln`.
#[allow(dead_code)]
pub const B_GUID: &str = "22222222-BBBB-4BBB-8BBB-000000000002";

/// GUID of the `Tests` solution folder in `Sample.sln`.
#[allow(dead_code)]
pub const FOLDER_GUID: &str = "33333333-CCCC-4CCC-8CCC-000000000003";

/// GUID of project `A.Tests` in `Sample.sln`.
#[allow(dead_code)]
pub const A_TESTS_GUID: &str = "44444444-DDDD-4DDD-8DDD-000000000004";

/// Project files referenced by `Sample.sln`, relative to the solution.
#[allow(dead_code)]
pub const SAMPLE_PROJECTS: [&str; 3] = [
    "src/A/A.csproj",
    "src/B/B.csproj",
    "tests/A.Tests/A.Tests.csproj",
];

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Contents of a fixture, read verbatim.
#[allow(dead_code)]
pub fn read_fixture(relative: &str) -> String {
    fs::read_to_string(fixture_path(relative)).unwrap()
}

/// A temporary directory holding one solution and its project files.
///
/// # Examples
///
/// ```no_run
/// # mod common;
/// # use common::Workspace;
/// let workspace = Workspace::sample();
/// assert!(workspace.exists("src/A/A.csproj"));
/// ```
#[allow(dead_code)]
pub struct Workspace {
    dir: TempDir,
    solution: String,
}

#[allow(dead_code)]
impl Workspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            solution: String::new(),
        }
    }

    /// `Sample.sln` with its three project files and an `A.csproj.user`.
    pub fn sample() -> Self {
        let mut workspace = Self::new().with_solution("Sample.sln");
        for project in SAMPLE_PROJECTS {
            workspace.write(project, "<Project Sdk=\"Microsoft.NET.Sdk\" />\r\n");
        }
        workspace.write("src/A/A.csproj.user", "<Project />\r\n");
        workspace.solution = "Sample.sln".to_string();
        workspace
    }

    /// Copy a solution fixture into the workspace root.
    pub fn with_solution(mut self, fixture: &str) -> Self {
        let contents = read_fixture(&format!("solutions/{fixture}"));
        self.write(fixture, &contents);
        self.solution = fixture.to_string();
        self
    }

    /// Root of the workspace.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute std path of a workspace file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Absolute solution path of a workspace file.
    pub fn file(&self, relative: &str) -> FilePath {
        FilePath::from_std(&self.path(relative), false)
    }

    /// The solution copied in by [`Workspace::with_solution`].
    pub fn solution(&self) -> FilePath {
        self.file(&self.solution)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Read a file back.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Whether a file exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).is_file()
    }

    /// Every file in the workspace, relative and `/`-separated, sorted.
    pub fn files(&self) -> Vec<String> {
        fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(root, &path, out);
                } else {
                    let relative = path.strip_prefix(root).unwrap();
                    out.push(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        let mut files = Vec::new();
        walk(self.root(), self.root(), &mut files);
        files.sort();
        files
    }
}
