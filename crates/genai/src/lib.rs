//! Clients for the upstream generative services.
//!
//! Defines the two capabilities the pipeline depends on ([`TextCompletion`]
//! and [`ImageGeneration`]) and concrete HTTP implementations for Google
//! Gemini and the OpenAI Images API using [`reqwest`].

pub mod config;
pub mod gemini;
pub mod http;
pub mod openai;

use async_trait::async_trait;

pub use config::GenAiConfig;
pub use gemini::GeminiClient;
pub use openai::OpenAiImageClient;

/// Errors from the upstream client layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream service returned a non-2xx status code.
    #[error("Upstream API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered successfully but with nothing usable.
    #[error("Upstream returned an empty response")]
    EmptyResponse,
}

/// A text-generation model: free-form instruction in, free-form text out.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenAiError>;
}

/// Parameters for a single image-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    /// Square size such as `1024x1024`.
    pub size: String,
    pub quality: String,
    pub count: u8,
}

/// One image descriptor returned by the image model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

/// An image-generation model.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GeneratedImage>, GenAiError>;
}
