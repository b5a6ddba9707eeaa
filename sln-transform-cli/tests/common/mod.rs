//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated workspace holding a copy of the
//! library's sample solution, plus a command builder that keeps the
//! user's own recipes and environment out of the way.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Project files referenced by `Sample.sln`, relative to the solution.
pub const SAMPLE_PROJECTS: [&str; 3] = [
    "src/A/A.csproj",
    "src/B/B.csproj",
    "tests/A.Tests/A.Tests.csproj",
];

/// Environment variables the binary reads.
const ENV_VARS: [&str; 4] = [
    "SLN_TRANSFORM_SUFFIX",
    "SLN_TRANSFORM_SIDECAR_EXTENSIONS",
    "SLN_TRANSFORM_LOG_MODE",
    "SLN_TRANSFORM_USER_DIR",
];

/// Path to a solution or recipe fixture shared with the library tests.
pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../sln-transform/tests/fixtures")
        .join(relative)
}

/// Test environment with a solution workspace and an empty user directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// User recipe directory passed with `--user-dir`
    pub user_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let user_dir = temp_path.join("user");

        Self {
            temp_dir,
            temp_path,
            user_dir,
        }
    }

    /// `Sample.sln` with its project files and an `A.csproj.user`.
    pub fn sample() -> Self {
        let env = Self::new();
        env.copy_fixture("solutions/Sample.sln", "Sample.sln");
        for project in SAMPLE_PROJECTS {
            env.write(project, "<Project Sdk=\"Microsoft.NET.Sdk\" />\r\n");
        }
        env.write("src/A/A.csproj.user", "<Project />\r\n");
        env
    }

    /// A command with the binary, `--user-dir` set and no inherited
    /// sln-transform environment variables.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sln-transform").expect("Failed to find binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd.arg("--user-dir").arg(&self.user_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute path of a workspace file.
    pub fn file(&self, relative: &str) -> PathBuf {
        self.temp_path.join(relative)
    }

    /// Copy a fixture into the workspace.
    pub fn copy_fixture(&self, fixture_name: &str, relative: &str) {
        let contents = fs::read(fixture(fixture_name)).expect("Failed to read fixture");
        let path = self.file(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).expect("Failed to write fixture");
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.file(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).expect("Failed to write file");
    }

    /// Read a file back.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.file(relative)).expect("Failed to read file")
    }

    /// Whether a file exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.file(relative).is_file()
    }
}
