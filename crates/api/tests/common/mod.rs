#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use storybook_api::config::ServerConfig;
use storybook_api::router::build_app_router;
use storybook_api::state::AppState;
use storybook_genai::{GenAiError, GeneratedImage, ImageGeneration, ImageRequest, TextCompletion};
use storybook_pipeline::Pipeline;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router around the given pipeline, using the
/// same middleware stack as production.
pub fn build_test_app(pipeline: Pipeline) -> Router {
    build_app_router(AppState { pipeline }, &test_config())
}

/// Same as [`build_test_app`] but with a custom whole-request timeout.
pub fn build_test_app_with_timeout(pipeline: Pipeline, request_timeout_secs: u64) -> Router {
    let config = ServerConfig {
        request_timeout_secs,
        ..test_config()
    };
    build_app_router(AppState { pipeline }, &config)
}

/// Pipeline wired to the given fakes with a short upstream deadline.
pub fn pipeline(text: Option<Arc<FakeText>>, images: Option<Arc<FakeImages>>) -> Pipeline {
    Pipeline::new(
        text.map(|t| t as Arc<dyn TextCompletion>),
        images.map(|i| i as Arc<dyn ImageGeneration>),
        Duration::from_secs(5),
    )
}

// ---------------------------------------------------------------------------
// Fake upstream clients
// ---------------------------------------------------------------------------

/// Text model returning a fixed reply (or a 500 when `reply` is `None`).
pub struct FakeText {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl FakeText {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextCompletion for FakeText {
    async fn complete(&self, _prompt: &str) -> Result<String, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(|| GenAiError::Api {
            status: 500,
            body: "upstream exploded: secret-trace-id".to_string(),
        })
    }
}

/// Image model that fails for prompts containing `fail_on`, otherwise
/// returns `https://images.test/{n}.png` numbered by call order.
pub struct FakeImages {
    fail_on: Option<&'static str>,
    hang: bool,
    calls: AtomicUsize,
    dropped: AtomicUsize,
}

/// Counts a request as dropped when its future is cancelled mid-flight.
struct DropCounter<'a>(&'a AtomicUsize);

impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl FakeImages {
    fn build(fail_on: Option<&'static str>, hang: bool) -> Arc<Self> {
        Arc::new(Self {
            fail_on,
            hang,
            calls: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Self::build(None, false)
    }

    pub fn failing_on(needle: &'static str) -> Arc<Self> {
        Self::build(Some(needle), false)
    }

    /// Every request waits for an hour before answering.
    pub fn hanging() -> Arc<Self> {
        Self::build(None, true)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests whose futures were dropped before they answered.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGeneration for FakeImages {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GeneratedImage>, GenAiError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.hang {
            let guard = DropCounter(&self.dropped);
            tokio::time::sleep(Duration::from_secs(3600)).await;
            std::mem::forget(guard);
        }
        if self.fail_on.is_some_and(|needle| request.prompt.contains(needle)) {
            return Err(GenAiError::EmptyResponse);
        }
        Ok(vec![GeneratedImage {
            url: Some(format!("https://images.test/{n}.png")),
            revised_prompt: None,
        }])
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
