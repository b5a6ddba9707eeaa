//! Validate command implementation.

use crate::error::CliError;
use crate::utils::{resolve_solution, GlobalOptions};
use clap::Args;
use sln_transform::{FileSystem, SolutionDocument, Storage};
use std::path::PathBuf;

/// Check that a solution parses and serializes back unchanged.
#[derive(Args)]
pub struct ValidateCommand {
    /// Solution file
    #[arg(value_name = "SLN")]
    pub solution: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_solution(&self.solution)?;
        let original = FileSystem.read_text(&path)?;
        let document = SolutionDocument::parse(path.clone(), &original)?;

        let written = document.to_text();
        if let Some(line) = first_difference(&original, &written) {
            return Err(CliError::SemanticFailure(format!(
                "{path} does not round-trip: first difference on line {line}"
            )));
        }

        if !global.quiet {
            println!("Solution round-trips unchanged");
            if global.verbose {
                println!(
                    "{} projects, {} chapters",
                    document.projects().count(),
                    document.chapters().len()
                );
            }
        }
        Ok(())
    }
}

/// One-based line number of the first difference, if any.
fn first_difference(original: &str, written: &str) -> Option<usize> {
    if original == written {
        return None;
    }
    let differing = original
        .split('\n')
        .zip(written.split('\n'))
        .position(|(a, b)| a != b);
    let line = differing.unwrap_or_else(|| {
        original
            .split('\n')
            .count()
            .min(written.split('\n').count())
    });
    Some(line + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_difference() {
        assert_eq!(first_difference("a\nb\n", "a\nb\n"), None);
        assert_eq!(first_difference("a\nb\n", "a\nc\n"), Some(2));
        assert_eq!(first_difference("a\r\n", "a\n"), Some(1));
        assert_eq!(first_difference("a\nb", "a\nb\nc"), Some(3));
    }
}
