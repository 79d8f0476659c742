pub mod generation;
pub mod health;
pub mod placeholder;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-story                                  story from elements (POST)
/// /generate-images                                 illustrations for a story (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(generation::router())
}
