//! OpenAI backend implementation.
//!
//! Sends the analysis prompt to an OpenAI-compatible `/chat/completions`
//! endpoint with a blocking HTTP client.

use super::{parse_retry_after, AnalysisClient, BackendError, BackendResult, RateLimitInfo};
use crate::analyzer::prompt::build_analyze_prompt;
use crate::config::ServiceConfig;
use reqwest::blocking::Client;
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend for the OpenAI chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl OpenAiBackend {
    /// Create a backend from the service configuration.
    ///
    /// The API key is read from the configured environment variable. A
    /// missing key is reported per call, not here.
    pub fn from_config(config: &ServiceConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            client,
            endpoint: chat_completions_url(&config.api_base),
            model: config.model.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
        })
    }
}

impl AnalysisClient for OpenAiBackend {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn analyze(&self, chunk_text: &str) -> BackendResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::MissingApiKey(self.api_key_env.clone()))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_analyze_prompt(chunk_text),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = if status == StatusCode::TOO_MANY_REQUESTS {
            // A rate limit stays retryable even if its body can't be read
            response.text().unwrap_or_default()
        } else {
            response.text()?
        };

        classify_response(status, retry_after.as_deref(), &body)
    }
}

/// Map an HTTP status and body to the analysis text or a backend error.
///
/// 429 is a rate limit; any other non-2xx status is a service error
/// carrying the provider's message when the body has one.
fn classify_response(
    status: StatusCode,
    retry_after: Option<&str>,
    body: &str,
) -> BackendResult<String> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(BackendError::RateLimited(RateLimitInfo {
            retry_after: retry_after.and_then(parse_retry_after),
            message: extract_error_message(body)
                .unwrap_or_else(|| "Too many requests".to_string()),
        }));
    }

    if !status.is_success() {
        return Err(BackendError::Service {
            status: status.as_u16(),
            message: extract_error_message(body).unwrap_or_else(|| body.to_string()),
        });
    }

    parse_completion(body)
}

/// Build the chat completions URL from an API base such as
/// `https://api.openai.com/v1`.
fn chat_completions_url(api_base: &str) -> String {
    format!("{}/chat/completions", api_base.trim_end_matches('/'))
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the analysis text from a chat completions response body.
fn parse_completion(body: &str) -> BackendResult<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| BackendError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| BackendError::MalformedResponse("response has no choices".to_string()))
}

/// Extract the error message from an OpenAI error body, if it has one.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorWrapper>(body.trim())
        .ok()
        .map(|wrapper| wrapper.error.message)
        .filter(|message| !message.is_empty())
}
