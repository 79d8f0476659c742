use storybook_pipeline::Pipeline;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the generators are behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Story and illustration generators with their upstream clients.
    pub pipeline: Pipeline,
}
