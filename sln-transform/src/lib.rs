#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sln-transform
//!
//! A library for reading, editing and rewriting Visual Studio solution
//! (`.sln`) files.
//!
//! A solution is parsed into a [`SolutionDocument`] that serializes back
//! byte for byte. Transforms add, remove, rebase and rename projects; the
//! reference synchronizer keeps the Global chapter consistent; the finalizer
//! renames files on disk through a [`RenamePolicy`] and writes the result.
//!
//! ## Core Types
//!
//! - [`FilePath`]: Windows-style path algebra
//! - [`SolutionDocument`]: the parsed solution
//! - [`Transform`], [`Command`]: document edits
//! - [`SolutionTransformer`]: commands, synchronization and finalization
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sln_transform::{FilePath, SolutionDocument};
//!
//! let text = "Microsoft Visual Studio Solution File, Format Version 12.00\r\n\
//! Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App\\App.csproj\", \"{5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F}\"\r\n\
//! EndProject\r\n\
//! Global\r\n\
//! EndGlobal\r\n";
//!
//! let doc = SolutionDocument::parse(FilePath::new_file("C:\\work\\All.sln"), text).unwrap();
//! assert_eq!(doc.projects().count(), 1);
//! assert_eq!(doc.to_text(), text);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod path;
pub mod project_file;
pub mod rename;
pub mod solution;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    Command, ExecutionMode, ExecutionResult, PlanExecutor, ReferenceSynchronizer, RenamePlan,
    SolutionTransformer, Transform, TransformReport,
};
pub use path::FilePath;
pub use project_file::{ProjectFile, ProjectFileLoader, VerbatimLoader};
pub use rename::{IdentityRename, RenamePolicy, SuffixRename};
pub use solution::{Chapter, ProjectChapter, SolutionDocument, SolutionGuid};
pub use storage::{FileSystem, MemoryStorage, Storage};
