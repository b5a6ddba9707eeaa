//! Error types for the sln-transform library.
//!
//! This module provides the error hierarchy for parsing, transforming and
//! persisting solution files, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a sln-transform error.
///
/// # Examples
///
/// ```
/// use sln_transform::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sln-transform library.
///
/// Grammar violations, structural invariant violations and I/O failures are
/// all fatal; the pipeline never continues past one of them.
#[derive(Debug, Error)]
pub enum Error {
    /// A solution file line did not match the expected grammar.
    #[error("parse error at line {line}: {reason} (`{content}`)")]
    Parse {
        /// One-based line number of the offending line.
        line: usize,
        /// The offending line as read.
        content: String,
        /// What the parser expected.
        reason: String,
    },

    /// A required specialized section is missing from the Global chapter.
    #[error("Global chapter has no {section} section")]
    MissingSection {
        /// The section type that was looked up.
        section: String,
    },

    /// A specialized section that must be unique appears more than once.
    #[error("Global chapter has {count} {section} sections, expected exactly one")]
    DuplicateSection {
        /// The section type that was looked up.
        section: String,
        /// How many were found.
        count: usize,
    },

    /// The solution has no Global chapter but one is required.
    #[error("solution has no Global chapter")]
    MissingGlobalChapter,

    /// A transform referred to a project that is not in the solution.
    #[error("project not found: {name}")]
    ProjectNotFound {
        /// Name or GUID used for the lookup.
        name: String,
    },

    /// A project with the same identity is already part of the solution.
    #[error("project already present: {name}")]
    DuplicateProject {
        /// Name of the conflicting project.
        name: String,
    },

    /// A GUID could not be parsed.
    #[error("invalid GUID `{value}`: {reason}")]
    InvalidGuid {
        /// The text that failed to parse.
        value: String,
        /// The parser's complaint.
        reason: String,
    },

    /// A path operation could not be carried out.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be deserialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// The storage collaborator failed on a specific path.
    #[error("storage error on {path}: {source}")]
    Storage {
        /// The path being read, written or copied.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a parse error for a one-based line number.
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn storage(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.to_string(),
            source,
        }
    }

    /// Check if the error is a grammar violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::Error;
    ///
    /// let err = Error::Parse { line: 3, content: "x".into(), reason: "bad".into() };
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if the error came from the storage boundary.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Storage { .. })
    }
}
