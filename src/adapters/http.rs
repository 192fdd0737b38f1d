use crate::domain::ports::{CompletionClient, CompletionRequest};
use crate::utils::error::{NarrativeFailure, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "HuggingFaceH4/zephyr-7b-alpha";
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://router.huggingface.co/v1/chat/completions";

const MAX_TOKENS: u32 = 512;
const ERROR_BODY_LIMIT: usize = 500;

/// Chat-completion client for the Hugging Face inference router (any
/// OpenAI-compatible endpoint works).
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for HuggingFaceClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<String, NarrativeFailure> {
        let body = ChatCompletionBody {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!("POST {} (model {})", self.endpoint, request.model);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(NarrativeFailure::from_transport)?;

        let status = response.status();
        tracing::debug!("Inference response status: {}", status);

        if !status.is_success() {
            let mut text = response.text().await.unwrap_or_default();
            if text.len() > ERROR_BODY_LIMIT {
                let mut cut = ERROR_BODY_LIMIT;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                text.truncate(cut);
            }
            return Err(NarrativeFailure::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                NarrativeFailure::Timeout
            } else {
                NarrativeFailure::MalformedResponse(e.to_string())
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                NarrativeFailure::MalformedResponse(
                    "response contained no message content".to_string(),
                )
            })
    }
}
