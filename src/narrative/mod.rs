//! Narrative generation collaborator
//!
//! Posts a flattened projection of the proposal record to an
//! OpenAI-compatible chat endpoint and returns the generated narrative text.
//! The record is passed by reference and is never mutated here; any failure
//! surfaces as a [`NarrativeError`] with a human-readable message.

mod prompt;

pub use prompt::build_prompt;

use crate::proposal::ProposalRecord;
use serde_json::json;
use thiserror::Error;

/// Environment variable holding the service credential
pub const API_KEY_VAR: &str = "PROPOSAL_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

const SYSTEM_INSTRUCTION: &str = "你是一位私人银行的资深财富规划顾问。根据提供的建议书数据，\
用专业、沉稳的语气撰写一段给客户的建议书导言，概述三个情境的安排与推广优惠。不要编造数据。";

/// Failures reported by the narrative service
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative API key is missing, set {API_KEY_VAR}")]
    MissingApiKey,
    #[error("narrative service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("narrative service returned no content")]
    EmptyResponse,
}

/// Client for the narrative generation endpoint
pub struct NarrativeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl NarrativeClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Build a client from the environment
    ///
    /// `PROPOSAL_API_KEY` is required; `PROPOSAL_API_URL` and
    /// `PROPOSAL_MODEL` override the defaults.
    pub fn from_env() -> Result<Self, NarrativeError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| NarrativeError::MissingApiKey)?;
        let base_url =
            std::env::var("PROPOSAL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("PROPOSAL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(base_url, api_key, model))
    }

    /// Generate the narrative text for a finished proposal record
    pub async fn generate(&self, record: &ProposalRecord) -> Result<String, NarrativeError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": build_prompt(record) },
            ],
            "temperature": 0.2,
        });

        log::info!("Requesting narrative for client '{}'", record.client.name);

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .filter(|text| !text.is_empty())
            .ok_or(NarrativeError::EmptyResponse)?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_readable() {
        let message = NarrativeError::MissingApiKey.to_string();
        assert!(message.contains(API_KEY_VAR));
        assert!(NarrativeError::EmptyResponse.to_string().contains("no content"));
    }
}
