//! The application state machine.
//!
//! All screen sequencing flows through [`transition`]; nothing else in the
//! workspace assigns an [`AppState`]. Undefined (state, event) pairs are
//! typed errors rather than silent no-ops so a misbehaving caller is caught
//! at the seam.

use poseboard_error::{SessionError, SessionErrorKind};
use serde::{Deserialize, Serialize};

/// The current orchestration phase. Exactly one is active at a time.
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
pub enum AppState {
    /// Browsing previously saved stories
    #[display("story library")]
    StoryLibrary,
    /// Choosing a theme and beat count
    #[display("theme selection")]
    ThemeSelection,
    /// Describing the character
    #[display("character creation")]
    CharacterCreation,
    /// Posing for the character reference photo
    #[display("character capture")]
    CharacterCapture,
    /// Character image, style image, and script synthesis in flight
    #[display("generating story assets")]
    GeneratingStoryAssets,
    /// Per-beat capture/generate loop
    #[display("capturing")]
    Capturing,
    /// Assembling and persisting the finished storyboard
    #[display("creating storyboard")]
    CreatingStoryboard,
    /// Viewing the finished storyboard
    #[display("viewing storyboard")]
    ViewingStoryboard,
}

/// Events that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionEvent {
    /// User starts a new story from the library
    #[display("start new story")]
    StartNewStory,
    /// Theme and beat count chosen
    #[display("theme chosen")]
    ThemeChosen,
    /// Character description submitted
    #[display("description submitted")]
    DescriptionSubmitted,
    /// Character pose photo captured
    #[display("pose captured")]
    PoseCaptured,
    /// All three story assets generated
    #[display("assets ready")]
    AssetsReady,
    /// Asset generation failed
    #[display("assets failed")]
    AssetsFailed,
    /// One beat finished, more remain
    #[display("beat completed")]
    BeatCompleted,
    /// Every beat reached done
    #[display("all beats done")]
    AllBeatsDone,
    /// The storyboard was assembled and persisted
    #[display("storyboard saved")]
    StoryboardSaved,
    /// User returns to the library
    #[display("exit to library")]
    ExitToLibrary,
}

/// The single transition function.
///
/// # Errors
///
/// Returns [`SessionErrorKind::InvalidTransition`] for any undefined pair.
///
/// # Examples
///
/// ```
/// use poseboard_story::{AppState, SessionEvent, transition};
///
/// let next = transition(AppState::StoryLibrary, SessionEvent::StartNewStory).unwrap();
/// assert_eq!(next, AppState::ThemeSelection);
/// assert!(transition(AppState::StoryLibrary, SessionEvent::PoseCaptured).is_err());
/// ```
pub fn transition(state: AppState, event: SessionEvent) -> Result<AppState, SessionError> {
    use AppState::*;
    use SessionEvent::*;

    let next = match (state, event) {
        (StoryLibrary, StartNewStory) => ThemeSelection,
        (ThemeSelection, ThemeChosen) => CharacterCreation,
        (CharacterCreation, DescriptionSubmitted) => CharacterCapture,
        (CharacterCapture, PoseCaptured) => GeneratingStoryAssets,
        (GeneratingStoryAssets, AssetsReady) => Capturing,
        (GeneratingStoryAssets, AssetsFailed) => CharacterCapture,
        (Capturing, BeatCompleted) => Capturing,
        (Capturing, AllBeatsDone) => CreatingStoryboard,
        (CreatingStoryboard, StoryboardSaved) => ViewingStoryboard,
        (ViewingStoryboard, ExitToLibrary) => StoryLibrary,
        (state, event) => {
            return Err(SessionError::new(SessionErrorKind::InvalidTransition {
                state: state.to_string(),
                event: event.to_string(),
            }));
        }
    };
    Ok(next)
}
