//! Instructions sent to the vision model.

/// System instruction: the model acts as a creative director for video.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert in video generation and creative direction. You receive a \
static image together with the reasoning that produced it, and you write a \
video generation prompt that brings the image to life with motion, dynamics \
and cinematic appeal.

Key principles:
1. Preserve the core visual elements and style of the original image
2. Add motion, camera movement and dynamic elements suited to video
3. Think like a cinematographer: camera angles, pans, zooms, tracking shots, lighting changes
4. Add temporal structure: how things change over time, sequences of actions
5. Keep the tone and atmosphere of the original
6. Be concise but detailed (50-100 words)
7. Write for state-of-the-art text-to-video models";

/// User instruction embedding the reasoning trace and the original prompt.
///
/// ```
/// use stillmotion_compose::user_instruction;
///
/// let text = user_instruction("Chose dusk lighting.", "A lighthouse");
/// assert!(text.contains("Chose dusk lighting."));
/// assert!(text.contains("A lighthouse"));
/// ```
pub fn user_instruction(reasoning: &str, original_prompt: &str) -> String {
    format!(
        "I have a generated image and want to turn it into an interesting video.

ORIGINAL IMAGE CREATION REASONING:
{reasoning}

ORIGINAL IMAGE PROMPT:
{original_prompt}

Analyze the image and write an optimized video generation prompt that:
1. Captures the essence and style of the static image
2. Adds motion and camera dynamics that make it cinematic
3. Stays visually consistent with the original
4. Tells an engaging 3-5 second story
5. Suits the Wan 2.1 video generation model

OUTPUT FORMAT:
Reply with the video generation prompt only. No explanation, no preamble."
    )
}
