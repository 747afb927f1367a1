//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Poseboard - interactive storyboard generation from poses, themes, and prompts
#[derive(Parser, Debug)]
#[command(name = "poseboard")]
#[command(about = "Generate storyboards from captured poses and a theme", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full story session: capture, generate, persist
    Run(RunOptions),

    /// Story library commands
    #[command(subcommand)]
    Library(LibraryCommands),
}

/// Options for a full story run.
#[derive(Args, Debug)]
pub struct RunOptions {
    /// Story theme, e.g. "Sci-fi space exploration"
    #[arg(long)]
    pub theme: String,

    /// Character description, e.g. "A grizzled space marine"
    #[arg(long)]
    pub character: String,

    /// Number of beats in the story
    #[arg(long, default_value = "4")]
    pub beats: usize,

    /// Directory of stills to use as the capture source instead of the
    /// built-in test pattern
    #[arg(long)]
    pub frames: Option<PathBuf>,

    /// Synthesize narration audio for each beat after the storyboard is
    /// saved
    #[arg(long)]
    pub narrate: bool,
}

/// Story library subcommands
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List saved stories
    List,

    /// Show one story's script and beat statuses
    Show {
        /// Story identity
        id: Uuid,
    },

    /// Delete a story
    Delete {
        /// Story identity
        id: Uuid,
    },
}
