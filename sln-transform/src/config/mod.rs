//! Recipe configuration for sln-transform.
//!
//! A recipe names the projects to drop, the rename suffix and the sidecar
//! files to carry along. Recipes come from:
//! - YAML files (a user recipe and the recipes next to a solution)
//! - Environment variable overrides
//! - Programmatic configuration via the builder
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SLN_TRANSFORM_*`)
//! 3. Private solution recipe (`sln-transform.local.yaml`)
//! 4. Solution recipe (`sln-transform.yaml`), or an explicit recipe file
//! 5. User recipe (`config.yaml` in the user directory)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use sln_transform::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_solution_dir(Path::new("/path/to/solution"))
//!     .build()
//!     .unwrap();
//! println!("{} commands", config.commands().len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, RenameConfig};
pub use validator::ConfigValidator;
