//! Story persistence.

use crate::model::SavedStory;
use async_trait::async_trait;
use poseboard_error::{JsonError, LibraryError, LibraryErrorKind, PoseboardResult};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Pluggable persistence for finished stories.
///
/// Stories are immutable once saved; the only mutation the trait permits is
/// deletion.
#[async_trait]
pub trait StoryLibrary: Send + Sync {
    /// Persist a finished story.
    async fn save(&self, story: &SavedStory) -> PoseboardResult<()>;

    /// All saved stories, oldest first.
    async fn list(&self) -> PoseboardResult<Vec<SavedStory>>;

    /// Load one story by identity.
    async fn load(&self, id: Uuid) -> PoseboardResult<SavedStory>;

    /// Delete one story by identity.
    async fn delete(&self, id: Uuid) -> PoseboardResult<()>;
}

/// Filesystem-backed story library.
///
/// One pretty-printed JSON document per story at `{dir}/{id}.json`, with
/// binary payloads as base64 strings. Writes go to a temp file first and
/// rename into place so a crash mid-write never leaves a torn story.
pub struct FileSystemLibrary {
    base_dir: PathBuf,
}

impl FileSystemLibrary {
    /// Create a library rooted at `base_dir`, creating the directory if
    /// needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> PoseboardResult<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir).map_err(|e| {
            LibraryError::new(LibraryErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_dir.display(),
                e
            )))
        })?;
        info!(path = %base_dir.display(), "Opened story library");
        Ok(Self { base_dir })
    }

    fn story_path(&self, id: Uuid) -> PathBuf {
        self.base_dir.join(format!("{id}.json"))
    }
}

#[async_trait]
impl StoryLibrary for FileSystemLibrary {
    #[tracing::instrument(skip(self, story), fields(id = %story.id(), beats = story.beats().len()))]
    async fn save(&self, story: &SavedStory) -> PoseboardResult<()> {
        let path = self.story_path(*story.id());
        let contents = serde_json::to_string_pretty(story)
            .map_err(|e| JsonError::new(format!("Failed to serialize story: {e}")))?;

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, contents).await.map_err(|e| {
            LibraryError::new(LibraryErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            LibraryError::new(LibraryErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        info!(path = %path.display(), "Saved story");
        Ok(())
    }

    async fn list(&self) -> PoseboardResult<Vec<SavedStory>> {
        let mut entries = tokio::fs::read_dir(&self.base_dir).await.map_err(|e| {
            LibraryError::new(LibraryErrorKind::FileRead(format!(
                "{}: {}",
                self.base_dir.display(),
                e
            )))
        })?;

        let mut stories = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            LibraryError::new(LibraryErrorKind::FileRead(e.to_string()))
        })? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_story(&path).await {
                Ok(story) => stories.push(story),
                // One corrupt file should not hide the rest of the library.
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable story"),
            }
        }

        stories.sort_by_key(|s| *s.created_at());
        debug!(count = stories.len(), "Listed stories");
        Ok(stories)
    }

    async fn load(&self, id: Uuid) -> PoseboardResult<SavedStory> {
        let path = self.story_path(id);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(LibraryError::new(LibraryErrorKind::NotFound(id.to_string())).into());
        }
        read_story(&path).await
    }

    async fn delete(&self, id: Uuid) -> PoseboardResult<()> {
        let path = self.story_path(id);
        tokio::fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LibraryError::new(LibraryErrorKind::NotFound(id.to_string()))
            } else {
                LibraryError::new(LibraryErrorKind::FileWrite(format!(
                    "delete {}: {}",
                    path.display(),
                    e
                )))
            }
        })?;
        info!(id = %id, "Deleted story");
        Ok(())
    }
}

async fn read_story(path: &Path) -> PoseboardResult<SavedStory> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        LibraryError::new(LibraryErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    let story = serde_json::from_str(&contents)
        .map_err(|e| JsonError::new(format!("Failed to parse story file: {e}")))?;
    Ok(story)
}

/// In-memory story library for tests and demos.
#[derive(Default)]
pub struct InMemoryLibrary {
    stories: Mutex<Vec<SavedStory>>,
}

impl InMemoryLibrary {
    /// Create an empty in-memory library.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoryLibrary for InMemoryLibrary {
    async fn save(&self, story: &SavedStory) -> PoseboardResult<()> {
        self.stories.lock().unwrap().push(story.clone());
        Ok(())
    }

    async fn list(&self) -> PoseboardResult<Vec<SavedStory>> {
        Ok(self.stories.lock().unwrap().clone())
    }

    async fn load(&self, id: Uuid) -> PoseboardResult<SavedStory> {
        self.stories
            .lock()
            .unwrap()
            .iter()
            .find(|s| *s.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::new(LibraryErrorKind::NotFound(id.to_string())).into())
    }

    async fn delete(&self, id: Uuid) -> PoseboardResult<()> {
        let mut stories = self.stories.lock().unwrap();
        let before = stories.len();
        stories.retain(|s| *s.id() != id);
        if stories.len() == before {
            return Err(LibraryError::new(LibraryErrorKind::NotFound(id.to_string())).into());
        }
        Ok(())
    }
}
