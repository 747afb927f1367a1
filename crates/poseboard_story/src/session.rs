//! The story orchestrator.
//!
//! [`StorySession`] owns the in-progress story context and is the only
//! place [`AppState`] changes. Every gateway call is sequenced here, one at
//! a time; failures record an error message, return the machine to a stable
//! state, and keep already-captured inputs so a manual retry never asks the
//! user to pose again.

use crate::debug::{BeatArtifacts, DebugSnapshot};
use crate::gateway::StoryGateway;
use crate::library::StoryLibrary;
use crate::model::{BeatStatus, ProcessedBeat, SavedStory};
use crate::state::{AppState, SessionEvent, transition};
use poseboard_core::GenerationDriver;
use poseboard_error::{PoseboardError, PoseboardResult, SessionError, SessionErrorKind};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Everything accumulated while a story is in progress.
#[derive(Debug, Default)]
struct StoryContext {
    theme: String,
    beat_count: usize,
    character_description: String,
    pose_photo: Option<Vec<u8>>,
    character_image: Option<Vec<u8>>,
    style_image: Option<Vec<u8>>,
    beats: Vec<ProcessedBeat>,
    current_beat: usize,
}

/// Drives a user from theme selection to a persisted storyboard.
pub struct StorySession<D: GenerationDriver> {
    gateway: StoryGateway<D>,
    library: Box<dyn StoryLibrary>,
    state: AppState,
    context: StoryContext,
    completed: Option<SavedStory>,
    last_error: Option<String>,
}

impl<D: GenerationDriver> StorySession<D> {
    /// Create a session starting in the story library.
    pub fn new(gateway: StoryGateway<D>, library: Box<dyn StoryLibrary>) -> Self {
        Self {
            gateway,
            library,
            state: AppState::StoryLibrary,
            context: StoryContext::default(),
            completed: None,
            last_error: None,
        }
    }

    /// The current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// The most recent surfaced error message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The beats of the in-progress story.
    pub fn beats(&self) -> &[ProcessedBeat] {
        &self.context.beats
    }

    /// Index of the beat currently being captured.
    pub fn current_beat_index(&self) -> usize {
        self.context.current_beat
    }

    /// The story persisted by the last completed run, if any.
    pub fn completed_story(&self) -> Option<&SavedStory> {
        self.completed.as_ref()
    }

    /// Read-only view of cached artifacts for the debug overlay.
    pub fn debug_snapshot(&self) -> DebugSnapshot<'_> {
        DebugSnapshot {
            character_image: self.context.character_image.as_deref(),
            style_image: self.context.style_image.as_deref(),
            current_beat: self
                .context
                .beats
                .get(self.context.current_beat)
                .map(|beat| BeatArtifacts {
                    id: *beat.id(),
                    status: *beat.status(),
                    captured_image: beat.captured_image().as_deref(),
                    generated_image: beat.generated_image().as_deref(),
                }),
        }
    }

    fn fire(&mut self, event: SessionEvent) -> PoseboardResult<()> {
        self.state = transition(self.state, event)?;
        Ok(())
    }

    fn record_error(&mut self, error: &PoseboardError) {
        self.last_error = Some(error.to_string());
    }

    /// Leave the library and begin a new story.
    pub fn start_new_story(&mut self) -> PoseboardResult<()> {
        self.fire(SessionEvent::StartNewStory)?;
        self.context = StoryContext::default();
        self.completed = None;
        self.last_error = None;
        Ok(())
    }

    /// Record the chosen theme and beat count.
    pub fn choose_theme(&mut self, theme: &str, beat_count: usize) -> PoseboardResult<()> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(
                SessionError::new(SessionErrorKind::MissingAsset("theme".to_string())).into(),
            );
        }
        self.fire(SessionEvent::ThemeChosen)?;
        self.context.theme = theme.to_string();
        self.context.beat_count = beat_count;
        Ok(())
    }

    /// Record the character description.
    pub fn submit_description(&mut self, description: &str) -> PoseboardResult<()> {
        let description = description.trim();
        if description.is_empty() {
            return Err(SessionError::new(SessionErrorKind::MissingAsset(
                "character description".to_string(),
            ))
            .into());
        }
        self.fire(SessionEvent::DescriptionSubmitted)?;
        self.context.character_description = description.to_string();
        Ok(())
    }

    /// Accept the captured pose photo and generate the story assets:
    /// character image, style image, and script, in that order.
    ///
    /// Any failure returns the machine to character capture with the error
    /// surfaced; the pose photo stays cached so the user does not re-pose.
    #[instrument(skip(self, pose_photo), fields(theme = %self.context.theme))]
    pub async fn submit_pose(&mut self, pose_photo: Vec<u8>) -> PoseboardResult<()> {
        self.fire(SessionEvent::PoseCaptured)?;
        self.context.pose_photo = Some(pose_photo);

        match self.generate_assets().await {
            Ok(()) => {
                self.last_error = None;
                self.fire(SessionEvent::AssetsReady)?;
                info!(beats = self.context.beats.len(), "Story assets ready");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Story asset generation failed");
                self.record_error(&e);
                self.fire(SessionEvent::AssetsFailed)?;
                Err(e)
            }
        }
    }

    async fn generate_assets(&mut self) -> PoseboardResult<()> {
        let photo = self.require_pose_photo()?;

        let character_image = self
            .gateway
            .synthesize_character_image(&self.context.character_description, &photo)
            .await?;
        self.context.character_image = Some(character_image);

        let style_image = self.gateway.synthesize_style_image(&self.context.theme).await?;
        self.context.style_image = Some(style_image);

        let script = self
            .gateway
            .synthesize_script(
                &self.context.theme,
                self.context.beat_count,
                &self.context.character_description,
            )
            .await?;

        self.context.beats = script
            .into_iter()
            .enumerate()
            .map(|(id, structure)| ProcessedBeat::new(id, structure))
            .collect();
        self.context.current_beat = 0;
        Ok(())
    }

    /// Capture a pose photo for the current beat and synthesize its
    /// composite image. On success the beat is done and the index advances;
    /// on failure the beat enters the error state and the loop halts until
    /// [`Self::retry_current_beat`].
    #[instrument(skip(self, photo), fields(beat = self.context.current_beat))]
    pub async fn capture_beat(&mut self, photo: Vec<u8>) -> PoseboardResult<()> {
        self.ensure_state(AppState::Capturing, "capture beat")?;
        let index = self.context.current_beat;
        self.beat_mut(index)?.begin_processing(photo.clone());
        self.process_current_beat(photo).await
    }

    /// Re-issue the failed current beat's synthesis call with the photo
    /// captured earlier. Identity and order are untouched.
    #[instrument(skip(self), fields(beat = self.context.current_beat))]
    pub async fn retry_current_beat(&mut self) -> PoseboardResult<()> {
        self.ensure_state(AppState::Capturing, "retry beat")?;
        let index = self.context.current_beat;
        let beat = self.beat_mut(index)?;
        beat.retry()?;
        let photo = beat
            .captured_image()
            .clone()
            .ok_or_else(|| {
                SessionError::new(SessionErrorKind::MissingAsset(format!(
                    "captured photo for beat {index}"
                )))
            })?;
        self.process_current_beat(photo).await
    }

    async fn process_current_beat(&mut self, photo: Vec<u8>) -> PoseboardResult<()> {
        let index = self.context.current_beat;
        let image_prompt = self.beat_mut(index)?.structure().image_prompt().clone();
        let style_image = self.require_asset(|c| c.style_image.as_deref(), "style image")?;
        let character_image =
            self.require_asset(|c| c.character_image.as_deref(), "character image")?;

        let result = self
            .gateway
            .synthesize_beat_image(&image_prompt, &photo, &style_image, &character_image)
            .await;

        match result {
            Ok(image) => {
                self.beat_mut(index)?.complete(image);
                self.last_error = None;
                if index + 1 == self.context.beats.len() {
                    self.fire(SessionEvent::AllBeatsDone)?;
                    self.finalize().await
                } else {
                    self.context.current_beat = index + 1;
                    self.fire(SessionEvent::BeatCompleted)
                }
            }
            Err(e) => {
                warn!(beat = index, error = %e, "Beat synthesis failed");
                self.beat_mut(index)?.fail();
                self.record_error(&e);
                Err(e)
            }
        }
    }

    async fn finalize(&mut self) -> PoseboardResult<()> {
        let character_image = self.require_asset(|c| c.character_image.as_deref(), "character image")?;
        let story = SavedStory::assemble(
            self.context.theme.clone(),
            character_image,
            std::mem::take(&mut self.context.beats),
        )?;

        match self.library.save(&story).await {
            Ok(()) => {
                info!(id = %story.id(), beats = story.beats().len(), "Storyboard persisted");
                self.completed = Some(story);
                self.fire(SessionEvent::StoryboardSaved)
            }
            Err(e) => {
                // Keep the beats so the user's work survives a failed save.
                self.context.beats = story.beats().clone();
                self.record_error(&e);
                Err(e)
            }
        }
    }

    /// Regenerate the character image from the cached description and pose
    /// photo, overwriting the previous result in place.
    #[instrument(skip(self))]
    pub async fn retry_character_image(&mut self) -> PoseboardResult<()> {
        let photo = self.require_pose_photo()?;
        let image = self
            .gateway
            .synthesize_character_image(&self.context.character_description, &photo)
            .await?;
        self.context.character_image = Some(image);
        Ok(())
    }

    /// Regenerate the style image from the cached theme, overwriting the
    /// previous result in place.
    #[instrument(skip(self))]
    pub async fn retry_style_image(&mut self) -> PoseboardResult<()> {
        if self.context.theme.is_empty() {
            return Err(
                SessionError::new(SessionErrorKind::MissingAsset("theme".to_string())).into(),
            );
        }
        let image = self.gateway.synthesize_style_image(&self.context.theme).await?;
        self.context.style_image = Some(image);
        Ok(())
    }

    /// Synthesize narration audio for one beat's story text.
    pub async fn narrate_beat(&self, index: usize) -> PoseboardResult<Vec<u8>> {
        let beat = self
            .context
            .beats
            .get(index)
            .or_else(|| self.completed.as_ref().and_then(|s| s.beats().get(index)))
            .ok_or_else(|| SessionError::new(SessionErrorKind::BeatIndex(index)))?;
        self.gateway
            .synthesize_narration(beat.structure().story_text())
            .await
    }

    /// Return to the story library, dropping the in-progress context.
    pub fn exit_to_library(&mut self) -> PoseboardResult<()> {
        self.fire(SessionEvent::ExitToLibrary)?;
        self.context = StoryContext::default();
        Ok(())
    }

    /// All stories in the library, oldest first.
    pub async fn list_stories(&self) -> PoseboardResult<Vec<SavedStory>> {
        self.library.list().await
    }

    /// Delete a story from the library.
    pub async fn delete_story(&self, id: Uuid) -> PoseboardResult<()> {
        self.library.delete(id).await
    }

    fn ensure_state(&self, expected: AppState, action: &str) -> PoseboardResult<()> {
        if self.state != expected {
            return Err(SessionError::new(SessionErrorKind::InvalidTransition {
                state: self.state.to_string(),
                event: action.to_string(),
            })
            .into());
        }
        Ok(())
    }

    fn beat_mut(&mut self, index: usize) -> PoseboardResult<&mut ProcessedBeat> {
        self.context
            .beats
            .get_mut(index)
            .ok_or_else(|| SessionError::new(SessionErrorKind::BeatIndex(index)).into())
    }

    fn require_pose_photo(&self) -> PoseboardResult<Vec<u8>> {
        self.context.pose_photo.clone().ok_or_else(|| {
            SessionError::new(SessionErrorKind::MissingAsset("pose photo".to_string())).into()
        })
    }

    fn require_asset(
        &self,
        get: impl Fn(&StoryContext) -> Option<&[u8]>,
        name: &str,
    ) -> PoseboardResult<Vec<u8>> {
        get(&self.context).map(|b| b.to_vec()).ok_or_else(|| {
            SessionError::new(SessionErrorKind::MissingAsset(name.to_string())).into()
        })
    }

    /// Count of beats that have reached `Done`.
    pub fn done_beats(&self) -> usize {
        self.context
            .beats
            .iter()
            .filter(|b| *b.status() == BeatStatus::Done)
            .count()
    }
}
