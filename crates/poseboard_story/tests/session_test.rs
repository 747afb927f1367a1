//! End-to-end orchestrator tests over a scripted mock driver.

use async_trait::async_trait;
use poseboard_core::{GenerateRequest, GenerateResponse, GenerationDriver, Part};
use poseboard_error::{PoseboardErrorKind, PoseboardResult};
use poseboard_story::{
    AppState, BeatStatus, InMemoryLibrary, StoryGateway, StorySession,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const THEME: &str = "Sci-fi space exploration";
const CHARACTER: &str = "A grizzled space marine with a cybernetic eye";

/// What kind of gateway operation a request belongs to, inferred from its
/// shape the same way the real backend would see it.
fn classify(req: &GenerateRequest) -> &'static str {
    if req.config.voice.is_some() {
        return "narration";
    }
    if req.config.response_schema.is_some() {
        return "script";
    }
    let inline_parts = req
        .parts
        .iter()
        .filter(|p| matches!(p, Part::Inline { .. }))
        .count();
    match inline_parts {
        3 => "beat",
        1 => "character",
        _ => "style",
    }
}

/// Scripted driver: answers each operation kind deterministically and
/// records every request for later inspection.
struct MockDriver {
    script_json: String,
    /// Fail this many beat-image calls (no image part) before succeeding.
    beat_failures: AtomicUsize,
    /// Fail character-image calls when set.
    fail_character: bool,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    fn new(script_json: impl Into<String>) -> Self {
        Self {
            script_json: script_json.into(),
            beat_failures: AtomicUsize::new(0),
            fail_character: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded requests, usable after the driver moves into
    /// a session.
    fn calls_handle(&self) -> Arc<Mutex<Vec<GenerateRequest>>> {
        Arc::clone(&self.calls)
    }

    fn with_beat_failures(mut self, count: usize) -> Self {
        self.beat_failures = AtomicUsize::new(count);
        self
    }

    fn with_failing_character(mut self) -> Self {
        self.fail_character = true;
        self
    }

    fn image_response(data: Vec<u8>) -> GenerateResponse {
        GenerateResponse {
            parts: vec![
                Part::Text("here you go".to_string()),
                Part::inline("image/png", data),
            ],
        }
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> PoseboardResult<GenerateResponse> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(req.clone());
        let call_number = calls.len();
        drop(calls);

        let response = match classify(req) {
            "script" => GenerateResponse {
                parts: vec![Part::Text(self.script_json.clone())],
            },
            "narration" => GenerateResponse {
                parts: vec![Part::inline("audio/wav", b"narration-audio".to_vec())],
            },
            "character" if self.fail_character => GenerateResponse {
                parts: vec![Part::Text("safety block".to_string())],
            },
            "character" => {
                Self::image_response(format!("character-image-{call_number}").into_bytes())
            }
            "style" => Self::image_response(b"style-image".to_vec()),
            "beat" => {
                let remaining = self.beat_failures.load(Ordering::SeqCst);
                if remaining > 0 {
                    self.beat_failures.store(remaining - 1, Ordering::SeqCst);
                    GenerateResponse {
                        parts: vec![Part::Text("no image this time".to_string())],
                    }
                } else {
                    Self::image_response(format!("beat-image-{call_number}").into_bytes())
                }
            }
            other => panic!("unexpected operation kind: {other}"),
        };
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

fn script_json(beat_count: usize) -> String {
    let scenes: Vec<serde_json::Value> = (0..beat_count)
        .map(|i| {
            serde_json::json!({
                "actingDirection": format!("pose dramatically, scene {i}"),
                "imagePrompt": format!("edit the third image, scene {i}"),
                "storyText": format!("and then, scene {i} happened"),
            })
        })
        .collect();
    serde_json::to_string(&scenes).unwrap()
}

fn session_with(driver: MockDriver) -> StorySession<MockDriver> {
    StorySession::new(StoryGateway::new(driver), Box::new(InMemoryLibrary::new()))
}

/// Drive a fresh session up to the capturing state.
async fn reach_capturing(session: &mut StorySession<MockDriver>, beat_count: usize) {
    session.start_new_story().unwrap();
    session.choose_theme(THEME, beat_count).unwrap();
    session.submit_description(CHARACTER).unwrap();
    session.submit_pose(b"pose-photo".to_vec()).await.unwrap();
    assert_eq!(session.state(), AppState::Capturing);
}

#[tokio::test]
async fn full_happy_path_persists_a_four_beat_story() {
    let mut session = session_with(MockDriver::new(script_json(4)));
    reach_capturing(&mut session, 4).await;
    assert_eq!(session.beats().len(), 4);

    for i in 0..4 {
        session
            .capture_beat(format!("beat-pose-{i}").into_bytes())
            .await
            .unwrap();
    }

    assert_eq!(session.state(), AppState::ViewingStoryboard);
    let story = session.completed_story().expect("story should be persisted");
    assert_eq!(story.beats().len(), 4);
    assert_eq!(story.theme(), THEME);
    assert!(story.beats().iter().all(|b| b.is_done()));
    // Identities are unique and in generation order.
    let ids: Vec<usize> = story.beats().iter().map(|b| *b.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    let library = session.list_stories().await.unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library[0].beats().len(), 4);
}

#[tokio::test]
async fn gateway_calls_are_issued_once_per_asset() {
    let driver = MockDriver::new(script_json(4));
    let calls = driver.calls_handle();
    let mut session = session_with(driver);
    reach_capturing(&mut session, 4).await;
    for i in 0..4 {
        session
            .capture_beat(format!("beat-pose-{i}").into_bytes())
            .await
            .unwrap();
    }

    let calls = calls.lock().unwrap();
    let count = |kind: &str| calls.iter().filter(|r| classify(r) == kind).count();
    assert_eq!(count("character"), 1);
    assert_eq!(count("style"), 1);
    assert_eq!(count("script"), 1);
    assert_eq!(count("beat"), 4);
}

#[tokio::test]
async fn beat_image_request_carries_parts_in_fixed_order() {
    let driver = MockDriver::new(script_json(4));
    let calls = driver.calls_handle();
    let mut session = session_with(driver);
    reach_capturing(&mut session, 4).await;
    session.capture_beat(b"actor-pose".to_vec()).await.unwrap();

    let calls = calls.lock().unwrap();
    let beat_call = calls.iter().find(|r| classify(r) == "beat").unwrap();
    // [style, character, actor photo, prompt] and nothing else.
    assert_eq!(beat_call.parts.len(), 4);
    match &beat_call.parts[0] {
        Part::Inline { data, .. } => assert_eq!(data, b"style-image"),
        other => panic!("expected style image first, got {other:?}"),
    }
    match &beat_call.parts[1] {
        Part::Inline { data, .. } => {
            assert!(data.starts_with(b"character-image-"))
        }
        other => panic!("expected character image second, got {other:?}"),
    }
    match &beat_call.parts[2] {
        Part::Inline { data, .. } => assert_eq!(data, b"actor-pose"),
        other => panic!("expected actor photo third, got {other:?}"),
    }
    assert!(matches!(&beat_call.parts[3], Part::Text(_)));
}

#[tokio::test]
async fn script_synthesis_yields_requested_beat_counts() {
    for beat_count in [4usize, 6, 8] {
        let gateway = StoryGateway::new(MockDriver::new(script_json(beat_count)));
        let script = gateway
            .synthesize_script(THEME, beat_count, CHARACTER)
            .await
            .unwrap();
        assert_eq!(script.len(), beat_count);
        assert!(script.iter().all(|s| s.is_complete()));
    }
}

#[tokio::test]
async fn non_array_script_is_a_parse_failure_and_state_returns() {
    let mut session = session_with(MockDriver::new(r#"{"not": "an array"}"#));
    session.start_new_story().unwrap();
    session.choose_theme(THEME, 4).unwrap();
    session.submit_description(CHARACTER).unwrap();

    let err = session.submit_pose(b"pose".to_vec()).await.unwrap_err();
    assert!(err.to_string().contains("parse failure"));
    assert_eq!(session.state(), AppState::CharacterCapture);
    assert!(session.last_error().is_some());
}

#[tokio::test]
async fn field_incomplete_script_is_a_parse_failure() {
    let missing_field = r#"[{"actingDirection": "pose", "imagePrompt": "paint"}]"#;
    let mut session = session_with(MockDriver::new(missing_field));
    session.start_new_story().unwrap();
    session.choose_theme(THEME, 1).unwrap();
    session.submit_description(CHARACTER).unwrap();

    assert!(session.submit_pose(b"pose".to_vec()).await.is_err());
    assert_eq!(session.state(), AppState::CharacterCapture);
}

#[tokio::test]
async fn miscounted_script_fails_the_asset_phase() {
    let mut session = session_with(MockDriver::new(script_json(3)));
    session.start_new_story().unwrap();
    session.choose_theme(THEME, 4).unwrap();
    session.submit_description(CHARACTER).unwrap();

    let err = session.submit_pose(b"pose".to_vec()).await.unwrap_err();
    assert!(err.to_string().contains("expected 4"));
    assert_eq!(session.state(), AppState::CharacterCapture);
}

#[tokio::test]
async fn missing_character_image_surfaces_no_image_error() {
    let mut session = session_with(MockDriver::new(script_json(4)).with_failing_character());
    session.start_new_story().unwrap();
    session.choose_theme(THEME, 4).unwrap();
    session.submit_description(CHARACTER).unwrap();

    let err = session.submit_pose(b"pose".to_vec()).await.unwrap_err();
    match err.kind() {
        PoseboardErrorKind::Generation(g) => {
            assert_eq!(g.kind, poseboard_error::GenerationErrorKind::NoImage)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.state(), AppState::CharacterCapture);
}

#[tokio::test]
async fn failed_beat_retry_reuses_the_captured_photo() {
    let driver = MockDriver::new(script_json(4)).with_beat_failures(1);
    let calls = driver.calls_handle();
    let mut session = session_with(driver);
    reach_capturing(&mut session, 4).await;

    let err = session.capture_beat(b"original-pose".to_vec()).await.unwrap_err();
    assert!(err.to_string().contains("no image returned"));
    assert_eq!(session.state(), AppState::Capturing);
    assert_eq!(session.current_beat_index(), 0);

    {
        let beat = &session.beats()[0];
        assert_eq!(*beat.status(), BeatStatus::Error);
        assert!(beat.generated_image().is_none());
        assert_eq!(beat.captured_image().as_deref(), Some(&b"original-pose"[..]));
    }

    session.retry_current_beat().await.unwrap();
    {
        let beat = &session.beats()[0];
        assert_eq!(*beat.id(), 0);
        assert_eq!(*beat.status(), BeatStatus::Done);
        assert!(beat.generated_image().is_some());
    }
    assert_eq!(session.current_beat_index(), 1);

    // Both beat-image requests carried the same actor photo.
    let calls = calls.lock().unwrap();
    let actor_photos: Vec<Vec<u8>> = calls
        .iter()
        .filter(|r| classify(r) == "beat")
        .map(|r| match &r.parts[2] {
            Part::Inline { data, .. } => data.clone(),
            other => panic!("expected inline actor photo, got {other:?}"),
        })
        .collect();
    assert_eq!(actor_photos, vec![b"original-pose".to_vec(); 2]);
}

#[tokio::test]
async fn retry_is_rejected_unless_the_beat_failed() {
    let mut session = session_with(MockDriver::new(script_json(4)));
    reach_capturing(&mut session, 4).await;
    assert!(session.retry_current_beat().await.is_err());
}

#[tokio::test]
async fn debug_retries_overwrite_assets_in_place() {
    let mut session = session_with(MockDriver::new(script_json(4)));
    reach_capturing(&mut session, 4).await;

    let before = session.debug_snapshot().character_image.unwrap().to_vec();
    session.retry_character_image().await.unwrap();
    let after = session.debug_snapshot().character_image.unwrap().to_vec();
    assert_ne!(before, after);
    assert_eq!(session.state(), AppState::Capturing);

    assert!(session.debug_snapshot().style_image.is_some());
    session.retry_style_image().await.unwrap();
    assert!(session.debug_snapshot().style_image.is_some());
}

#[tokio::test]
async fn narration_returns_audio_for_a_finished_beat() {
    let mut session = session_with(MockDriver::new(script_json(4)));
    reach_capturing(&mut session, 4).await;
    for i in 0..4 {
        session.capture_beat(format!("p{i}").into_bytes()).await.unwrap();
    }

    let audio = session.narrate_beat(0).await.unwrap();
    assert_eq!(audio, b"narration-audio");
    assert!(session.narrate_beat(99).await.is_err());
}

#[tokio::test]
async fn exit_returns_to_the_library_and_clears_context() {
    let mut session = session_with(MockDriver::new(script_json(4)));
    reach_capturing(&mut session, 4).await;
    for i in 0..4 {
        session.capture_beat(format!("p{i}").into_bytes()).await.unwrap();
    }

    session.exit_to_library().unwrap();
    assert_eq!(session.state(), AppState::StoryLibrary);
    assert!(session.beats().is_empty());
    assert_eq!(session.list_stories().await.unwrap().len(), 1);
}
