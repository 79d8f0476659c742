//! Route definitions for the story pipeline.
//!
//! ```text
//! POST   /generate-story                  generate_story
//! POST   /generate-images                 generate_images
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::story;
use crate::state::AppState;

/// Generation routes -- mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-story", post(story::generate_story))
        .route("/generate-images", post(story::generate_images))
}
