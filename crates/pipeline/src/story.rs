//! Story generation: story elements in, prose out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use storybook_core::error::CoreError;
use storybook_core::story::{build_story_prompt, StoryElements, STORY_GENERATION_FAILED};
use storybook_genai::TextCompletion;

use crate::upstream::with_deadline;

/// Generates a children's story from user-supplied elements.
pub struct StoryGenerator {
    text: Option<Arc<dyn TextCompletion>>,
    upstream_timeout: Duration,
}

impl StoryGenerator {
    pub fn new(text: Option<Arc<dyn TextCompletion>>, upstream_timeout: Duration) -> Self {
        Self {
            text,
            upstream_timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.text.is_some()
    }

    /// Produce a story that weaves in every non-blank element.
    ///
    /// Checks configuration, then validates the elements, then issues a
    /// single text completion. A non-blank model answer is returned
    /// verbatim; a blank one counts as a failed generation.
    pub async fn generate<S: AsRef<str>>(&self, raw_elements: &[S]) -> Result<String, CoreError> {
        let Some(text) = self.text.as_ref() else {
            tracing::error!("Story requested but GEMINI_API_KEY is not configured");
            return Err(CoreError::Configuration(
                "text model credential is not configured".to_string(),
            ));
        };

        let elements = StoryElements::parse(raw_elements)?;
        let prompt = build_story_prompt(&elements);

        let started = Instant::now();
        match with_deadline(self.upstream_timeout, text.complete(&prompt)).await {
            Ok(story) if story.trim().is_empty() => {
                tracing::error!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Story generation returned blank text"
                );
                Err(CoreError::Generation(STORY_GENERATION_FAILED.to_string()))
            }
            Ok(story) => {
                tracing::info!(
                    elements = elements.len(),
                    story_chars = story.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Generated story"
                );
                Ok(story)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Story generation failed"
                );
                Err(CoreError::Generation(STORY_GENERATION_FAILED.to_string()))
            }
        }
    }
}
