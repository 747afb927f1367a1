//! Prompt templates and the script response schema.
//!
//! The wording here is load-bearing: the image-edit instructions must keep
//! the model anchored to the actor's pose and expression, and the script
//! prompt must teach the model how to write per-scene image prompts that
//! reference the three input images by position.

/// Prompt for transforming the actor photo into the described character.
pub fn character_image(description: &str) -> String {
    format!(
        "**Crucially, you must edit the input image of a person.** Transform the person into \
         a new character based on this description: '{description}'. You MUST retain the \
         person's exact facial expression and body pose from the input image. Place the final \
         character on a neutral grey background. The final image must be a cinematic, \
         high-detail, 16:9 aspect ratio shot that clearly defines the character's appearance."
    )
}

/// Prompt for a style reference image defining the story's visual mood.
pub fn style_image(theme: &str) -> String {
    format!(
        "Create a single piece of concept art that defines a unique visual style for a story \
         about '{theme}'. The image should establish the color palette, lighting, texture, and \
         overall mood. Do not include any characters or text. High detail, cinematic, 16:9 \
         aspect ratio."
    )
}

/// Prompt for the per-scene script.
pub fn script(theme: &str, beat_count: usize, character_description: &str) -> String {
    format!(
        "You are a creative director. For a story with the theme '{theme}' and a character \
         described as '{character_description}', create a structure with {beat_count} scenes.\n\
         For each scene, provide:\n\
         1. A short 'actingDirection' for an actor to perform.\n\
         2. A detailed 'imagePrompt' for an AI image generator. The AI will receive THREE \
         input images: the first is a style reference, the second is the character reference \
         sheet, and the third is a photo of an actor. The prompt MUST be an explicit \
         instruction to edit the actor's photo. A good prompt is: '**Crucially, you must edit \
         the third input image which contains a person.** Transform the person into the \
         character shown in the second input image, making them fit the description of \
         '{character_description}'. You MUST retain the actor's exact facial expression and \
         body pose. Use the first input image *only* as a style reference for the overall \
         artistic mood, color palette, and lighting. Place the transformed character into a \
         [environment based on theme] environment, performing the action of [action from \
         actingDirection]. The final image must be a cinematic, high-detail, 16:9 aspect \
         ratio shot.'\n\
         3. A short 'storyText' to be read aloud as a narrative for the scene.\n\n\
         Return a JSON array of objects, each containing 'actingDirection', 'imagePrompt', \
         and 'storyText'."
    )
}

/// Narration framing for text-to-speech.
pub fn narration(text: &str) -> String {
    format!("Read the following story with a clear, narrative voice: {text}")
}

/// JSON schema the script response must conform to: an array of objects
/// with three required string fields.
pub fn script_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "actingDirection": { "type": "STRING" },
                "imagePrompt": { "type": "STRING" },
                "storyText": { "type": "STRING" }
            },
            "required": ["actingDirection", "imagePrompt", "storyText"]
        }
    })
}
