//! Full story run handler.

use super::commands::RunOptions;
use poseboard::{
    AppState, CaptureDevice, CaptureSession, FileSystemLibrary, GeminiClient, ImageFolderDevice,
    LibraryError, LibraryErrorKind, PoseboardConfig, PoseboardResult, SessionError,
    SessionErrorKind, StoryGateway, StorySession, TestPatternDevice,
};
use tracing::info;

/// Drive a complete story session from the terminal.
///
/// Frames come from `--frames <dir>` when given, otherwise from the
/// built-in test pattern; either way the captured stills are mirrored and
/// encoded exactly as a live camera capture would be.
pub async fn run_story(options: RunOptions) -> PoseboardResult<()> {
    let config = PoseboardConfig::load()?;

    let device: Box<dyn CaptureDevice> = match &options.frames {
        Some(dir) => Box::new(ImageFolderDevice::new(dir)),
        None => Box::new(TestPatternDevice::new(1280, 720)),
    };
    let mut capture = CaptureSession::open_with_quality(device, config.capture.jpeg_quality)?;

    let client = GeminiClient::new()?;
    let gateway = StoryGateway::with_models(client, config.models.clone());
    let library = FileSystemLibrary::new(&config.library_dir)?;
    let mut session = StorySession::new(gateway, Box::new(library));

    session.start_new_story()?;
    session.choose_theme(&options.theme, options.beats)?;
    session.submit_description(&options.character)?;

    println!("Capturing character pose...");
    let pose = capture.capture_jpeg()?;

    println!("Generating story assets (character image, style image, script)...");
    session.submit_pose(pose).await?;
    info!(beats = session.beats().len(), "Assets generated");

    while session.state() == AppState::Capturing {
        let index = session.current_beat_index();
        let direction = session.beats()[index]
            .structure()
            .acting_direction()
            .clone();
        println!("Beat {}/{}: {direction}", index + 1, options.beats);

        let photo = capture.capture_jpeg()?;
        session.capture_beat(photo).await?;
    }

    let story = session
        .completed_story()
        .ok_or_else(|| SessionError::new(SessionErrorKind::NoActiveStory))?;
    println!(
        "Storyboard {} saved with {} beats:",
        story.id(),
        story.beats().len()
    );
    for beat in story.beats() {
        println!("  {}. {}", beat.id() + 1, beat.structure().story_text());
    }

    if options.narrate {
        for beat in story.beats() {
            let audio = session.narrate_beat(*beat.id()).await?;
            // Raw PCM as returned by the speech model.
            let path = config
                .library_dir
                .join(format!("{}-narration-{}.pcm", story.id(), beat.id()));
            tokio::fs::write(&path, audio).await.map_err(|e| {
                LibraryError::new(LibraryErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            println!("  narration written to {}", path.display());
        }
    }

    Ok(())
}
