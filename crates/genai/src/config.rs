use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OPENAI_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Upstream service configuration loaded from environment variables.
///
/// Credentials are optional: an absent or blank key leaves the matching
/// capability unconfigured, which the pipeline reports per request.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub openai_api_key: Option<String>,
    pub openai_image_model: String,
    pub openai_api_base: String,
    /// Deadline applied to each upstream call.
    pub upstream_timeout: Duration,
}

impl GenAiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                            |
    /// |-------------------------|----------------------------------------------------|
    /// | `GEMINI_API_KEY`        | unset                                              |
    /// | `GEMINI_MODEL`          | `gemini-1.5-flash`                                 |
    /// | `GEMINI_API_BASE`       | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `OPENAI_API_KEY`        | unset                                              |
    /// | `OPENAI_IMAGE_MODEL`    | `dall-e-3`                                         |
    /// | `OPENAI_API_BASE`       | `https://api.openai.com/v1`                        |
    /// | `UPSTREAM_TIMEOUT_SECS` | `60`                                               |
    pub fn from_env() -> Self {
        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        Self {
            gemini_api_key: credential("GEMINI_API_KEY"),
            gemini_model: var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: var_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            openai_api_key: credential("OPENAI_API_KEY"),
            openai_image_model: var_or("OPENAI_IMAGE_MODEL", DEFAULT_OPENAI_IMAGE_MODEL),
            openai_api_base: var_or("OPENAI_API_BASE", DEFAULT_OPENAI_API_BASE),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

/// Read a credential, treating blank values as absent.
fn credential(name: &str) -> Option<String> {
    normalize_credential(std::env::var(name).ok())
}

fn normalize_credential(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
