//! Generative coaching client for the Google generative language API.
//!
//! Both operations are one-shot `generateContent` calls: chat sends the turn
//! history as `contents` entries, media analysis sends an `inline_data` part
//! followed by the text prompt. Request building and response parsing are
//! plain functions so they can be tested without a network.

use base64::Engine;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::config::CoachConfig;
use crate::error::Fault;
use crate::services::{CoachingService, Role, TurnPayload};

/// Fixed persona sent with every chat request.
pub const SYSTEM_INSTRUCTION: &str = "You are SportDev AI, a world-class fitness coach and exercise specialist. Help the user with training plans, form tips, and health advice. Keep responses encouraging, scientific, and concise.";

/// Bound on how long a single request may stay in flight (native targets).
/// Without it a hung call would hold the session's in-flight flag forever.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Coaching service backed by the hosted generative API.
pub struct GeminiCoach {
    client: reqwest::Client,
    config: CoachConfig,
}

impl GeminiCoach {
    pub fn new(config: CoachConfig) -> Result<Self, Fault> {
        Ok(Self {
            client: build_api_client()?,
            config,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// POST a `generateContent` body and pull the reply text out of the
    /// first candidate.
    async fn generate(&self, body: Value) -> Result<String, Fault> {
        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let fault = if e.is_timeout() {
                    Fault::Network(format!(
                        "coaching API timed out after {REQUEST_TIMEOUT_SECS}s"
                    ))
                } else {
                    Fault::Network(format!("coaching API request failed: {e}"))
                };
                error!("{}", fault);
                fault
            })?;

        let body_text = handle_api_response(response).await?;

        let response_json: Value = serde_json::from_str(&body_text).map_err(|e| {
            let fault = Fault::Protocol(format!("failed to parse coaching API response: {e}"));
            error!("{}", fault);
            fault
        })?;

        extract_reply_text(&response_json).ok_or_else(|| {
            let fault = Fault::Protocol("no text content in coaching API response".to_string());
            error!("{}", fault);
            fault
        })
    }
}

#[async_trait::async_trait(?Send)]
impl CoachingService for GeminiCoach {
    async fn chat(&self, message: &str, history: &[TurnPayload]) -> Result<String, Fault> {
        info!(
            "Sending chat message ({} prior turns) to model '{}'",
            history.len(),
            self.config.model
        );
        self.generate(chat_request_body(message, history)).await
    }

    async fn analyze_media(
        &self,
        media: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, Fault> {
        info!(
            "Requesting media analysis ({} bytes, {}) from model '{}'",
            media.len(),
            mime_type,
            self.config.model
        );
        let encoded = base64::engine::general_purpose::STANDARD.encode(media);
        self.generate(media_request_body(&encoded, mime_type, prompt))
            .await
    }
}

/// Build the request body for a chat turn: the prior history in original
/// order, then the new user message, plus the coaching persona.
fn chat_request_body(message: &str, history: &[TurnPayload]) -> Value {
    let mut contents: Vec<Value> = history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "model",
            };
            json!({
                "role": role,
                "parts": [{"text": turn.text}],
            })
        })
        .collect();
    contents.push(json!({
        "role": "user",
        "parts": [{"text": message}],
    }));

    json!({
        "system_instruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
        "contents": contents,
    })
}

/// Build the request body for media analysis: inline data first, prompt after.
fn media_request_body(media_base64: &str, mime_type: &str, prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [
                {"inline_data": {"mime_type": mime_type, "data": media_base64}},
                {"text": prompt},
            ],
        }],
    })
}

/// Pull the reply text from a `generateContent` response, joining multi-part
/// candidates. `None` when the response has no text at all.
fn extract_reply_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text: Vec<&str> = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}

/// Build a client with a bounded timeout for hosted API calls.
///
/// The timeout only applies off-wasm; in the browser the fetch call is
/// bounded by the user agent instead.
fn build_api_client() -> Result<reqwest::Client, Fault> {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS));
    builder
        .build()
        .map_err(|e| Fault::Network(format!("failed to build HTTP client: {e}")))
}

/// Check status and read the body, truncating long error bodies.
async fn handle_api_response(response: reqwest::Response) -> Result<String, Fault> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        let truncated = if body.len() > 1024 {
            format!("{}...", &body[..1024])
        } else {
            body
        };
        let fault = Fault::Service(format!("coaching API error: {status} - {truncated}"));
        error!("{}", fault);
        return Err(fault);
    }
    response
        .text()
        .await
        .map_err(|e| Fault::Network(format!("failed to read coaching API response body: {e}")))
}
