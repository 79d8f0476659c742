//! OpenAI Images API client (`POST /images/generations`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::http::parse_response;
use crate::{GenAiError, GeneratedImage, ImageGeneration, ImageRequest};

/// HTTP client for the OpenAI image model.
pub struct OpenAiImageClient {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    n: u8,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    revised_prompt: Option<String>,
}

impl From<ImageData> for GeneratedImage {
    fn from(data: ImageData) -> Self {
        Self {
            url: data.url,
            revised_prompt: data.revised_prompt,
        }
    }
}

impl OpenAiImageClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// * `api_base` - e.g. `https://api.openai.com/v1`.
    pub fn with_client(
        client: reqwest::Client,
        api_base: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageGeneration for OpenAiImageClient {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GeneratedImage>, GenAiError> {
        let body = ImagesRequest {
            model: &self.model,
            prompt: &request.prompt,
            size: &request.size,
            quality: &request.quality,
            n: request.count,
        };

        tracing::debug!(model = %self.model, size = %request.size, "Sending image generation request");

        let response = self
            .client
            .post(format!("{}/images/generations", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: ImagesResponse = parse_response(response).await?;
        Ok(parsed.data.into_iter().map(GeneratedImage::from).collect())
    }
}
