//! Command implementations for the sln-transform CLI.

mod apply;
mod list;
mod remove;
mod validate;

pub use apply::ApplyCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use validate::ValidateCommand;
