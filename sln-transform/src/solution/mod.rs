//! The solution document model.
//!
//! A solution file is a preamble followed by chapters; chapters contain
//! sections; sections contain ordered `key = value` entries. The model keeps
//! enough of the original text that an unmodified document serializes back
//! to exactly what was read.
//!
//! # Examples
//!
//! ```
//! use sln_transform::path::FilePath;
//! use sln_transform::solution::SolutionDocument;
//!
//! let text = "\
//! Microsoft Visual Studio Solution File, Format Version 12.00\r\n\
//! Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"App\\App.csproj\", \"{5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F}\"\r\n\
//! EndProject\r\n\
//! Global\r\n\
//! EndGlobal\r\n";
//!
//! let doc = SolutionDocument::parse(FilePath::new_file("C:\\work\\All.sln"), text).unwrap();
//! let app = doc.find_project("App").unwrap();
//! assert_eq!(doc.project_file_path(app).as_str(), "C:\\work\\App\\App.csproj");
//! assert_eq!(doc.to_text(), text);
//! ```

mod chapter;
mod document;
mod guid;
pub mod parser;
mod section;
pub mod serializer;

pub use chapter::{Chapter, GenericChapter, GlobalChapter, ProjectChapter, ProjectKey};
pub use document::{LineEnding, SolutionDocument};
pub use guid::{SolutionGuid, CSHARP_PROJECT_TYPE, CSHARP_SDK_PROJECT_TYPE, SOLUTION_FOLDER_TYPE};
pub use section::{
    Entry, Section, SectionBody, NESTED_PROJECTS, PROJECT_CONFIGURATION_PLATFORMS,
    SOLUTION_CONFIGURATION_PLATFORMS,
};
