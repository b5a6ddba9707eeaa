//! List command implementation.

use crate::error::CliError;
use crate::utils::{resolve_solution, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use sln_transform::{FileSystem, ProjectChapter, SolutionDocument};
use std::io::{self, Write};
use std::path::PathBuf;

/// Output format for the project listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per project
    Text,
    /// A JSON array of project objects
    Json,
}

/// List the projects of a solution.
#[derive(Args)]
pub struct ListCommand {
    /// Solution file
    #[arg(value_name = "SLN")]
    pub solution: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ProjectRow<'a> {
    name: &'a str,
    path: &'a str,
    guid: String,
    type_guid: String,
    folder: bool,
}

impl<'a> From<&'a ProjectChapter> for ProjectRow<'a> {
    fn from(project: &'a ProjectChapter) -> Self {
        Self {
            name: project.name(),
            path: project.path_text(),
            guid: project.id().canonical(),
            type_guid: project.type_guid().canonical(),
            folder: project.is_folder(),
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_solution(&self.solution)?;
        let document = SolutionDocument::load(&FileSystem, &path)?;
        let rows: Vec<ProjectRow<'_>> = document.projects().map(ProjectRow::from).collect();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Text => {
                for row in &rows {
                    let kind = if row.folder { "folder" } else { "project" };
                    writeln!(out, "{}\t{}\t{}\t{kind}", row.name, row.path, row.guid)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &rows)
                    .map_err(|e| CliError::Io(io::Error::other(e)))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
