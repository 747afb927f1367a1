//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! poseboard binary.

mod commands;
mod library;
mod run;

pub use commands::{Cli, Commands, LibraryCommands, RunOptions};
pub use library::handle_library_command;
pub use run::run_story;
