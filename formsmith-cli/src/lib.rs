//! Formsmith CLI library.
//!
//! The `formsmith` binary edits form definition files from the shell using
//! the same designer session and submission pipeline a UI would drive:
//!
//! - `place` / `move` / `remove` replay palette and reorder drops
//! - `check` runs every field's properties check
//! - `validate` runs the submission pipeline over a values file
//! - `table` renders stored submissions

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;

pub use cli::{Cli, Commands, HalfArg};
pub use config::FormsmithConfig;
pub use document::FormDocument;
