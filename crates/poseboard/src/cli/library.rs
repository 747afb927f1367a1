//! Story library command handlers.

use super::commands::LibraryCommands;
use poseboard::{FileSystemLibrary, PoseboardConfig, PoseboardResult, StoryLibrary};

/// Handle `poseboard library ...` subcommands.
pub async fn handle_library_command(command: LibraryCommands) -> PoseboardResult<()> {
    let config = PoseboardConfig::load()?;
    let library = FileSystemLibrary::new(&config.library_dir)?;

    match command {
        LibraryCommands::List => {
            let stories = library.list().await?;
            if stories.is_empty() {
                println!("No saved stories in {}", config.library_dir.display());
                return Ok(());
            }
            for story in stories {
                println!(
                    "{}  {}  {} beats  {}",
                    story.id(),
                    story.created_at().format("%Y-%m-%d %H:%M"),
                    story.beats().len(),
                    story.theme(),
                );
            }
        }

        LibraryCommands::Show { id } => {
            let story = library.load(id).await?;
            println!("{} ({} beats, created {})", story.theme(), story.beats().len(), story.created_at());
            for beat in story.beats() {
                println!("  Beat {} [{}]", beat.id() + 1, beat.status());
                println!("    direction: {}", beat.structure().acting_direction());
                println!("    narration: {}", beat.structure().story_text());
            }
        }

        LibraryCommands::Delete { id } => {
            library.delete(id).await?;
            println!("Deleted story {id}");
        }
    }

    Ok(())
}
