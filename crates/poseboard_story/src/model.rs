//! Story data model.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use poseboard_error::{PoseboardResult, SessionError, SessionErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a beat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum BeatStatus {
    /// Created from the script, nothing captured yet
    #[display("pending")]
    Pending,
    /// Pose captured, composite synthesis in flight
    #[display("processing")]
    Processing,
    /// Composite image synthesized
    #[display("done")]
    Done,
    /// Synthesis failed; waiting on a manual retry
    #[display("error")]
    Error,
}

/// The script triple describing one beat before any assets exist.
///
/// Field names follow the script-generation JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StoryStructure {
    /// Short instruction for the actor's pose
    acting_direction: String,
    /// Detailed instruction for composite-image synthesis
    image_prompt: String,
    /// Narration text read aloud for the scene
    story_text: String,
}

impl StoryStructure {
    /// Construct a story structure.
    pub fn new(
        acting_direction: impl Into<String>,
        image_prompt: impl Into<String>,
        story_text: impl Into<String>,
    ) -> Self {
        Self {
            acting_direction: acting_direction.into(),
            image_prompt: image_prompt.into(),
            story_text: story_text.into(),
        }
    }

    /// Whether all three fields carry non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.acting_direction.trim().is_empty()
            && !self.image_prompt.trim().is_empty()
            && !self.story_text.trim().is_empty()
    }
}

/// One beat moving through the capture/generate loop.
///
/// Fields are private and every status change goes through a lifecycle
/// method, so the invariant *generated image is present iff the status is
/// [`BeatStatus::Done`]* holds for every reachable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ProcessedBeat {
    /// Sequence index, assigned in generation order, unique within a story
    id: usize,
    /// The script triple for this beat
    #[serde(flatten)]
    structure: StoryStructure,
    /// Captured pose photo (JPEG), present once capture has happened
    #[serde(with = "serde_base64::option")]
    captured_image: Option<Vec<u8>>,
    /// Synthesized composite image, present iff status is `Done`
    #[serde(with = "serde_base64::option")]
    generated_image: Option<Vec<u8>>,
    /// Lifecycle status
    status: BeatStatus,
}

impl ProcessedBeat {
    /// Create a pending beat from a script entry.
    pub fn new(id: usize, structure: StoryStructure) -> Self {
        Self {
            id,
            structure,
            captured_image: None,
            generated_image: None,
            status: BeatStatus::Pending,
        }
    }

    /// Record the captured pose photo and enter `Processing`.
    pub fn begin_processing(&mut self, photo: Vec<u8>) {
        self.captured_image = Some(photo);
        self.generated_image = None;
        self.status = BeatStatus::Processing;
    }

    /// Re-enter `Processing` for a manual retry, reusing the captured photo.
    ///
    /// # Errors
    ///
    /// Fails if the beat is not in the `Error` state or has no captured
    /// photo to reuse.
    pub fn retry(&mut self) -> PoseboardResult<()> {
        if self.status != BeatStatus::Error {
            return Err(SessionError::new(SessionErrorKind::BeatNotFailed(self.id)).into());
        }
        if self.captured_image.is_none() {
            return Err(SessionError::new(SessionErrorKind::MissingAsset(format!(
                "captured photo for beat {}",
                self.id
            )))
            .into());
        }
        self.status = BeatStatus::Processing;
        Ok(())
    }

    /// Record the synthesized composite image and enter `Done`.
    pub fn complete(&mut self, image: Vec<u8>) {
        self.generated_image = Some(image);
        self.status = BeatStatus::Done;
    }

    /// Record a synthesis failure and enter `Error`.
    pub fn fail(&mut self) {
        self.generated_image = None;
        self.status = BeatStatus::Error;
    }

    /// Whether this beat has finished successfully.
    pub fn is_done(&self) -> bool {
        self.status == BeatStatus::Done
    }
}

/// A finished, persisted story.
///
/// Created only once every beat is `Done`; immutable afterwards except for
/// deletion through the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SavedStory {
    /// Story identity
    id: Uuid,
    /// The theme the story was generated for
    theme: String,
    /// Character reference image (JPEG)
    #[serde(with = "serde_base64")]
    character_image: Vec<u8>,
    /// The ordered, fully processed beats
    beats: Vec<ProcessedBeat>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl SavedStory {
    /// Assemble a story from completed beats.
    ///
    /// # Errors
    ///
    /// Fails if any beat has not reached `Done`.
    pub fn assemble(
        theme: impl Into<String>,
        character_image: Vec<u8>,
        beats: Vec<ProcessedBeat>,
    ) -> PoseboardResult<Self> {
        if let Some(unfinished) = beats.iter().find(|b| !b.is_done()) {
            return Err(SessionError::new(SessionErrorKind::MissingAsset(format!(
                "beat {} is not done",
                unfinished.id()
            )))
            .into());
        }
        Ok(Self {
            id: Uuid::new_v4(),
            theme: theme.into(),
            character_image,
            beats,
            created_at: Utc::now(),
        })
    }
}

/// Base64 serde helpers for binary payloads inside JSON documents.
mod serde_base64 {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::BASE64;
        use base64::Engine as _;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            bytes: &Option<Vec<u8>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match bytes {
                Some(data) => serializer.serialize_some(&BASE64.encode(data)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Vec<u8>>, D::Error> {
            let encoded: Option<String> = Option::deserialize(deserializer)?;
            encoded
                .map(|s| BASE64.decode(s.as_bytes()).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
