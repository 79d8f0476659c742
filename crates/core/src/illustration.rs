//! Illustration records and the text wrapped around each scene prompt.

use serde::Serialize;

use crate::placeholder::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Maximum number of scene characters shown in a caption.
pub const CAPTION_SCENE_CHARS: usize = 50;

/// Image size requested from the image model.
pub const IMAGE_SIZE: &str = "1024x1024";

/// Image quality tier requested from the image model.
pub const IMAGE_QUALITY: &str = "standard";

/// One generated (or substituted) illustration for a scene.
///
/// `url` is either a remote image URL or a local placeholder path; both are
/// valid terminal states for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Illustration {
    /// 1-based position of the scene in the story.
    pub sequence: usize,
    /// The enhanced prompt sent to the image model.
    pub prompt: String,
    pub url: String,
    pub caption: String,
}

impl Illustration {
    pub fn is_placeholder(&self) -> bool {
        self.url == placeholder_reference(self.sequence)
    }
}

/// Wrap a scene description in the fixed storybook style.
pub fn enhance_prompt(scene: &str) -> String {
    format!(
        "Cute children's book illustration: {scene}. Digital art, bright pastel colors, \
friendly cartoon characters, wholesome and magical atmosphere, no scary elements, \
suitable for ages 5-12, storybook style."
    )
}

/// Short caption: `Illustration {n}: {first 50 chars}...`.
pub fn caption(sequence: usize, scene: &str) -> String {
    let head: String = scene.chars().take(CAPTION_SCENE_CHARS).collect();
    format!("Illustration {sequence}: {head}...")
}

/// Deterministic fallback image reference for a scene.
pub fn placeholder_reference(sequence: usize) -> String {
    format!("/placeholder.svg?height={DEFAULT_HEIGHT}&width={DEFAULT_WIDTH}&text=Scene+{sequence}")
}
