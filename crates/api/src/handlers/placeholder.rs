use axum::extract::Query;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use storybook_core::placeholder::{render_svg, PlaceholderParams};

/// GET /placeholder.svg -- the fallback image for scenes whose image failed.
pub async fn placeholder_svg(Query(params): Query<PlaceholderParams>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "image/svg+xml"),
            (CACHE_CONTROL, "public, max-age=86400"),
        ],
        render_svg(&params),
    )
}
