/// Domain-level error shared by every crate in the workspace.
///
/// Messages carried by `Validation` and `Generation` are safe to show to end
/// users. `Configuration` and `Internal` carry operator-facing detail that is
/// logged but never returned over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
