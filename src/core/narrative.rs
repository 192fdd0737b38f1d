use crate::domain::ports::{CompletionClient, CompletionRequest};
use crate::utils::error::{NarrativeFailure, Result, TarotError};
use std::sync::Arc;

pub const PROPHECY_TEMPERATURE: f64 = 0.7;

const PROMPT_PREAMBLE: &str = "You are a mystical political oracle. Based on the following three tarot cards and their meanings, \
generate a short political prophecy (3-5 sentences) that describes possible future global or geopolitical events. \
Do not mention the cards directly in the text. \
Use simple english speech with easy-reading constructions. \
Here are the cards:\n\n";

const PROMPT_CUE: &str = "\n\nProphecy:";

/// Builds the oracle prompt. Pure: the same descriptions always yield the
/// same text.
pub fn build_prompt(card_descriptions: &[String]) -> String {
    format!(
        "{}{}{}",
        PROMPT_PREAMBLE,
        card_descriptions.join("\n"),
        PROMPT_CUE
    )
}

/// Turns card descriptions into a prophecy through a remote completion
/// client. No retries: failures go straight back to the caller.
pub struct NarrativeGenerator {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl NarrativeGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn generate(&self, card_descriptions: &[String]) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(card_descriptions),
            temperature: PROPHECY_TEMPERATURE,
        };

        tracing::info!("Generating AI prophecy...");
        let outcome = self
            .client
            .complete(request)
            .await
            .and_then(|text| {
                let prophecy = text.trim();
                if prophecy.is_empty() {
                    Err(NarrativeFailure::EmptyCompletion)
                } else {
                    Ok(prophecy.to_string())
                }
            });

        match outcome {
            Ok(prophecy) => {
                tracing::info!("AI prophecy generated successfully");
                Ok(prophecy)
            }
            Err(failure) => {
                tracing::error!("Error generating prophecy: {}", failure);
                tracing::debug!("Prophecy failure details: {:?}", failure);
                Err(TarotError::NarrativeGeneration { source: failure })
            }
        }
    }
}
