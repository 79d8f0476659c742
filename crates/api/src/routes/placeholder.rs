use axum::routing::get;
use axum::Router;

use crate::handlers::placeholder;
use crate::state::AppState;

/// Mount the placeholder image route at root level, where failed scenes
/// point their image references.
pub fn router() -> Router<AppState> {
    Router::new().route("/placeholder.svg", get(placeholder::placeholder_svg))
}
