//! Handlers for the two generation stages.
//!
//! The browser calls `generate_story` first and, once the story is shown,
//! `generate_images` with the returned text.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use storybook_pipeline::IllustrationSet;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/generate-story`.
///
/// A missing list is treated as empty and rejected by validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    #[serde(default)]
    pub story_elements: Vec<String>,
}

/// Response body for `POST /api/generate-story`.
#[derive(Debug, Serialize)]
pub struct GenerateStoryResponse {
    pub story: String,
}

/// Request body for `POST /api/generate-images`.
#[derive(Debug, Deserialize)]
pub struct GenerateImagesRequest {
    #[serde(default)]
    pub story: String,
}

// ---------------------------------------------------------------------------
// POST /api/generate-story
// ---------------------------------------------------------------------------

/// Generate a children's story from the supplied story elements.
pub async fn generate_story(
    State(state): State<AppState>,
    body: Result<Json<GenerateStoryRequest>, JsonRejection>,
) -> AppResult<Json<GenerateStoryResponse>> {
    let Json(body) = body?;

    tracing::debug!(elements = body.story_elements.len(), "Story requested");

    let story = state.pipeline.story.generate(body.story_elements.as_slice()).await?;

    Ok(Json(GenerateStoryResponse { story }))
}

// ---------------------------------------------------------------------------
// POST /api/generate-images
// ---------------------------------------------------------------------------

/// Generate up to three illustrations for a finished story.
pub async fn generate_images(
    State(state): State<AppState>,
    body: Result<Json<GenerateImagesRequest>, JsonRejection>,
) -> AppResult<Json<IllustrationSet>> {
    let Json(body) = body?;

    tracing::debug!(story_chars = body.story.len(), "Illustrations requested");

    let set = state.pipeline.illustrations.generate(&body.story).await?;

    Ok(Json(set))
}
