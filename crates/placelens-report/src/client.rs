//! Chat-completions HTTP client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::prompt::Tier;

/// Thin client over `POST {base}/v1/chat/completions`.
///
/// One instance per process; the API key is fixed at construction and the
/// request timeout bounds the external call so a slow upstream degrades to a
/// typed error instead of hanging the request.
pub struct ReportClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ReportClient {
    /// Create a `ReportClient`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, ReportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/v1/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Generate the report text for a filled prompt.
    ///
    /// # Errors
    ///
    /// - [`ReportError::Http`] — network failure or timeout.
    /// - [`ReportError::Status`] — non-2xx from the completion API.
    /// - [`ReportError::Shape`] — 2xx but no usable message content.
    pub async fn generate(&self, tier: Tier, prompt: &str) -> Result<String, ReportError> {
        let request = CompletionRequest {
            model: &self.model,
            temperature: tier.temperature(),
            messages: vec![
                Message {
                    role: "system",
                    content: tier.system_instruction(),
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        tracing::debug!(model = %self.model, ?tier, prompt_chars = prompt.len(), "requesting completion");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: CompletionResponse =
            response.json().await.map_err(|e| ReportError::Shape {
                reason: e.to_string(),
            })?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ReportError::Shape {
                reason: "no non-empty message content in first choice".to_string(),
            })?;

        Ok(text)
    }
}
