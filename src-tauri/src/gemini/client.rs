//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! One request per call. No retry and no backoff; the caller decides what the
//! user sees when a call fails.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::GatewayError;

pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Media type attached to inline image parts. Images are re-encoded to JPEG first.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Status and body of an HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam for the client so tests can answer without a server.
pub trait GeminiTransport {
    fn post_json(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<HttpReply, GatewayError>> + Send;

    fn get(&self, url: &str) -> impl Future<Output = Result<HttpReply, GatewayError>> + Send;
}

/// `reqwest`-backed transport with a 60-second timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

/// The request URL carries the API key, so it is stripped before the error is shown or logged.
fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Transport(format!("timed out after {}s", REQUEST_TIMEOUT.as_secs()))
    } else {
        GatewayError::Transport(e.without_url().to_string())
    }
}

impl GeminiTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<HttpReply, GatewayError> {
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpReply { status, body })
    }

    async fn get(&self, url: &str) -> Result<HttpReply, GatewayError> {
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpReply { status, body })
    }
}

// -- Wire types --

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'static str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
}

/// Build the `generateContent` body: one text part, plus a JPEG part when an image is given.
fn build_request_body(prompt: &str, image_base64: Option<&str>) -> serde_json::Value {
    let mut parts = vec![RequestPart::Text { text: prompt }];
    if let Some(data) = image_base64 {
        parts.push(RequestPart::InlineData {
            inline_data: InlineData {
                mime_type: IMAGE_MIME_TYPE,
                data,
            },
        });
    }
    let request = GenerateRequest {
        contents: vec![RequestContent { parts }],
    };
    serde_json::to_value(request).unwrap_or_default()
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
pub fn extract_text(body: &str) -> Result<String, GatewayError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidAiResponse(format!("response is not valid JSON: {}", e)))?;

    let text = response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .and_then(|p| p.text.clone());

    match (text, response.error) {
        (Some(text), _) => Ok(text),
        (None, Some(err)) => Err(GatewayError::InvalidAiResponse(err.message)),
        (None, None) => Err(GatewayError::InvalidAiResponse(
            "missing candidates[0].content.parts[0].text".to_string(),
        )),
    }
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GenerateResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .map(|e| e.message)
        .unwrap_or_else(|| truncate(body, 512))
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

pub struct GeminiClient<T> {
    transport: T,
    api_key: String,
    model: String,
    base_url: String,
}

impl<T: GeminiTransport> GeminiClient<T> {
    pub fn new(transport: T, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn models_url(&self) -> String {
        format!("{}/v1beta/models?key={}", self.base_url, self.api_key)
    }

    /// Send `prompt`, with an optional base64 JPEG, and return the reply text.
    pub async fn analyze(&self, prompt: &str, image_base64: Option<&str>) -> Result<String, GatewayError> {
        info!(
            "Calling Gemini model '{}' (image: {})",
            self.model,
            image_base64.is_some()
        );
        let body = build_request_body(prompt, image_base64);
        let reply = self.transport.post_json(&self.generate_url(), body).await?;

        if !reply.is_success() {
            let message = api_error_message(&reply.body);
            warn!("Gemini returned HTTP {}: {}", reply.status, message);
            return Err(GatewayError::InvalidAiResponse(format!(
                "HTTP {}: {}",
                reply.status, message
            )));
        }

        let text = extract_text(&reply.body).map_err(|e| {
            warn!("Unexpected Gemini response shape: {}", e);
            e
        })?;
        info!("Gemini replied with {} chars", text.len());
        Ok(text)
    }

    /// Models available to this key that support `generateContent`, sorted by id.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, GatewayError> {
        let reply = self.transport.get(&self.models_url()).await?;
        if !reply.is_success() {
            return Err(GatewayError::Api {
                status: reply.status,
                message: api_error_message(&reply.body),
            });
        }

        let parsed: ModelsResponse = serde_json::from_str(&reply.body)
            .map_err(|e| GatewayError::InvalidAiResponse(format!("model list is not valid JSON: {}", e)))?;

        let mut models: Vec<ModelInfo> = parsed
            .models
            .into_iter()
            .filter(|m| m.supported_generation_methods.iter().any(|g| g == "generateContent"))
            .map(|m| {
                let id = m.name.strip_prefix("models/").unwrap_or(&m.name).to_string();
                let name = m.display_name.unwrap_or_else(|| id.clone());
                ModelInfo { id, name }
            })
            .collect();
        models.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(models)
    }
}

/// Models offered when the live list cannot be fetched.
pub fn builtin_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo {
            id: DEFAULT_MODEL.to_string(),
            name: "Gemini 1.5 Flash".to_string(),
        },
        ModelInfo {
            id: "gemini-1.5-pro".to_string(),
            name: "Gemini 1.5 Pro".to_string(),
        },
    ]
}
