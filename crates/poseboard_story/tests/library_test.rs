//! Filesystem story library tests.

use poseboard_story::{FileSystemLibrary, ProcessedBeat, SavedStory, StoryLibrary, StoryStructure};
use std::path::PathBuf;

fn temp_library_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("poseboard_library_{name}"));
    std::fs::remove_dir_all(&dir).ok();
    dir
}

fn finished_story(theme: &str) -> SavedStory {
    let mut beat = ProcessedBeat::new(
        0,
        StoryStructure::new("look left", "paint the harbor", "the tide turned"),
    );
    beat.begin_processing(vec![1, 2, 3]);
    beat.complete(vec![4, 5, 6]);
    SavedStory::assemble(theme, vec![7, 8], vec![beat]).unwrap()
}

#[tokio::test]
async fn save_load_round_trip() {
    let dir = temp_library_dir("round_trip");
    let library = FileSystemLibrary::new(&dir).unwrap();

    let story = finished_story("film noir");
    library.save(&story).await.unwrap();

    let loaded = library.load(*story.id()).await.unwrap();
    assert_eq!(loaded, story);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn list_returns_stories_oldest_first_and_skips_corrupt_files() {
    let dir = temp_library_dir("list");
    let library = FileSystemLibrary::new(&dir).unwrap();

    let first = finished_story("noir");
    let second = finished_story("space opera");
    library.save(&first).await.unwrap();
    library.save(&second).await.unwrap();

    // A torn write from some other process should not hide the library.
    std::fs::write(dir.join("garbage.json"), "{ not json").unwrap();

    let listed = library.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].created_at() <= listed[1].created_at());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn delete_removes_the_story() {
    let dir = temp_library_dir("delete");
    let library = FileSystemLibrary::new(&dir).unwrap();

    let story = finished_story("dragon quest");
    library.save(&story).await.unwrap();
    library.delete(*story.id()).await.unwrap();

    assert!(library.load(*story.id()).await.is_err());
    assert!(library.delete(*story.id()).await.is_err());
    assert!(library.list().await.unwrap().is_empty());

    std::fs::remove_dir_all(&dir).ok();
}
