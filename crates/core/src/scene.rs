//! Scene prompt extraction.
//!
//! The text model is asked to read a finished story and answer with three
//! numbered scene descriptions. Only lines starting with `<integer>.` are
//! kept; everything else in the answer is discarded.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Number of scenes requested from the model and illustrated.
pub const MAX_SCENES: usize = 3;

/// User-safe message returned when scene extraction fails.
pub const ILLUSTRATION_GENERATION_FAILED: &str = "Failed to generate images. Please try again.";

/// Matches the enumeration marker (and any whitespace after it) at line start.
/// Only ASCII digits count; `\d` would also accept other Unicode digits.
static ENUMERATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("valid regex"));

/// A single scene description with its enumeration marker removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePrompt(String);

impl ScenePrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Reject an empty or whitespace-only story before scene extraction.
pub fn validate_story(story: &str) -> Result<(), CoreError> {
    if story.trim().is_empty() {
        return Err(CoreError::Validation(
            "Story is required for image generation".to_string(),
        ));
    }
    Ok(())
}

/// Build the instruction asking the text model for numbered scene prompts.
pub fn build_scene_prompt_request(story: &str) -> String {
    format!(
        "Based on this children's story, create {MAX_SCENES} detailed image prompts for cute, \
kid-friendly illustrations. Each prompt should be suitable for image generation and describe \
a key scene from the story.

Story: {story}

Please provide exactly {MAX_SCENES} image prompts in this format:
1. [First scene description]
2. [Second scene description]
3. [Third scene description]

Make sure each prompt describes:
- Cute, colorful, kid-friendly style
- Specific characters and settings from the story
- Clear visual details
- Appropriate for children aged 5-12"
    )
}

/// Parse the model answer into scene prompts, preserving order.
///
/// Lines must begin with the marker itself; indented lines do not match.
/// A marker with nothing after it yields no prompt. The result is not
/// truncated, callers decide how many to use.
pub fn extract_scene_prompts(response: &str) -> Vec<ScenePrompt> {
    response
        .lines()
        .filter_map(|line| {
            let m = ENUMERATION_RE.find(line)?;
            let text = line[m.end()..].trim();
            (!text.is_empty()).then(|| ScenePrompt(text.to_string()))
        })
        .collect()
}
