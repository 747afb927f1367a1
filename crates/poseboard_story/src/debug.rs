//! Read-only artifact views for the debug overlay.
//!
//! The overlay is pure presentation over orchestrator state: it borrows the
//! cached artifacts and holds nothing of its own. The matching retry hooks
//! live on [`crate::StorySession`].

use crate::model::BeatStatus;

/// Intermediate artifacts for the beat currently in the capture loop.
#[derive(Debug, Clone, Copy)]
pub struct BeatArtifacts<'a> {
    /// Beat identity
    pub id: usize,
    /// Current lifecycle status
    pub status: BeatStatus,
    /// The captured pose photo, if capture has happened
    pub captured_image: Option<&'a [u8]>,
    /// The synthesized composite image, if the beat is done
    pub generated_image: Option<&'a [u8]>,
}

/// Snapshot of every cached artifact the overlay can show.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugSnapshot<'a> {
    /// The character reference image, once synthesized
    pub character_image: Option<&'a [u8]>,
    /// The style reference image, once synthesized
    pub style_image: Option<&'a [u8]>,
    /// Artifacts of the current beat, when a story is in progress
    pub current_beat: Option<BeatArtifacts<'a>>,
}
