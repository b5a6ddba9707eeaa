//! The transform pipeline, using a plan-execute pattern for the final save.
//!
//! # Architecture
//!
//! A transformation runs in three stages:
//! 1. **Commands**: [`Command`]s apply [`Transform`]s to the document in
//!    order, editing project chapters only
//! 2. **Synchronization**: the [`ReferenceSynchronizer`] diffs the project
//!    set against a snapshot taken before the commands and fixes up the
//!    Global chapter
//! 3. **Finalization**: a [`RenamePlan`] is computed without I/O, then the
//!    [`PlanExecutor`] saves project files, duplicates sidecars and writes
//!    the solution
//!
//! [`SolutionTransformer`] drives all three.
//!
//! # Examples
//!
//! ```
//! use sln_transform::operations::{Command, ExecutionMode, SolutionTransformer};
//! use sln_transform::path::FilePath;
//! use sln_transform::rename::SuffixRename;
//! use sln_transform::storage::{MemoryStorage, Storage};
//!
//! let storage = MemoryStorage::new()
//!     .with_file(
//!         "C:\\work\\All.sln",
//!         "Microsoft Visual Studio Solution File, Format Version 12.00\r\n\
//! Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App\\App.csproj\", \"{5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F}\"\r\n\
//! EndProject\r\n\
//! Global\r\n\
//! EndGlobal\r\n",
//!     )
//!     .with_file("C:\\work\\App\\App.csproj", "<Project />");
//!
//! let mut transformer =
//!     SolutionTransformer::open(&storage, &FilePath::new_file("C:\\work\\All.sln")).unwrap();
//! transformer
//!     .transform(&SuffixRename::new("-Copy"), &[Command::composite(Vec::new())], ExecutionMode::Apply)
//!     .unwrap();
//!
//! assert!(storage.exists(&FilePath::new_file("C:\\work\\All-Copy.sln")));
//! assert!(storage.exists(&FilePath::new_file("C:\\work\\App\\App-Copy.csproj")));
//! ```

pub mod command;
pub mod executor;
pub mod plan;
pub mod sync;
pub mod transform;
pub mod transformer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use command::Command;
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{
    default_sidecar_extensions, FileAction, ProjectRename, RenamePlan, SidecarCopy,
    DEFAULT_SIDECAR_EXTENSIONS,
};
pub use sync::{ProjectSnapshot, ReferenceSynchronizer};
pub use transform::Transform;
pub use transformer::{ExecutionMode, SolutionTransformer, TransformReport};
