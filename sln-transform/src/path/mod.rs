//! Path algebra for solution and project files.
//!
//! Solution files store project locations as backslash-separated paths
//! relative to the solution's directory. [`FilePath`] is the immutable value
//! type used to manipulate them.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Paths are normalized on construction:
//! - Both `\` and `/` are accepted; `\` is used in the normalized form
//! - `.` segments, repeated separators and trailing separators are dropped
//! - `segment\..` pairs collapse left to right; a leading `..` is kept
//!
//! ## Flags
//!
//! Every path carries a directory flag and an absolute flag. Operations that
//! need a directory (`file`, `directory`, `to_absolute`, `relative_to`) fall
//! back to a file's parent directory.
//!
//! ## Equality
//!
//! Equality and hashing are case-insensitive on the normalized string and
//! exact on the flags.
//!
//! # Examples
//!
//! ```
//! use sln_transform::path::FilePath;
//!
//! let solution = FilePath::new_file("C:\\work\\All.sln");
//! let project = FilePath::new_file("C:\\work\\src\\App\\App.csproj");
//!
//! let relative = project.relative_to(&solution);
//! assert_eq!(relative.as_str(), "src\\App\\App.csproj");
//! assert_eq!(relative.to_absolute(&solution), project);
//! ```

pub mod normalize;
pub mod relative;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::FilePath;
