//! Story elements and the story authoring instruction.
//!
//! Story elements are free-text phrases supplied by the user. Blank entries
//! are discarded; at least one non-blank element is required before any
//! upstream request is made.

use crate::error::CoreError;

/// Separator placed between story elements inside the instruction.
pub const ELEMENT_SEPARATOR: &str = ", ";

/// User-safe message returned when the story model call fails.
pub const STORY_GENERATION_FAILED: &str = "Failed to generate story. Please try again.";

/// Fixed authoring constraints appended after the element list.
const STORY_CONSTRAINTS: &str = "\
The story should be:
- Age-appropriate for children (5-12 years old)
- About 1000-1200 words long
- Have a positive message or moral
- Be engaging and imaginative
- Include all the provided elements in a meaningful way
- Have a clear beginning, middle, and end
- Use simple but rich language that children can understand

Please create a complete story with these elements woven naturally into the narrative.";

// ---------------------------------------------------------------------------
// StoryElements
// ---------------------------------------------------------------------------

/// Validated, trimmed, non-blank story elements in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryElements(Vec<String>);

impl StoryElements {
    /// Trim every element, drop blank ones and require at least one survivor.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::Validation(
                "Story elements are required".to_string(),
            ));
        }

        let elements: Vec<String> = raw
            .iter()
            .map(|e| e.as_ref().trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();

        if elements.is_empty() {
            return Err(CoreError::Validation(
                "At least one story element is required".to_string(),
            ));
        }

        Ok(Self(elements))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a successfully parsed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Elements joined with [`ELEMENT_SEPARATOR`].
    pub fn joined(&self) -> String {
        self.0.join(ELEMENT_SEPARATOR)
    }
}

// ---------------------------------------------------------------------------
// Instruction
// ---------------------------------------------------------------------------

/// Build the single instruction sent to the text model for story authoring.
pub fn build_story_prompt(elements: &StoryElements) -> String {
    format!(
        "Create a magical and engaging children's story that includes these elements: {}.\n\n{STORY_CONSTRAINTS}",
        elements.joined()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
