//! Summarizer backed by an OpenAI-compatible `chat/completions` endpoint.

use crate::engine::{SYSTEM_PROMPT, Summarizer};
use crate::error::{SummarizeError, SummarizeErrorExt};
use crate::spreadsheet::Workbook;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sheetwise_domain::config::SummarizeConfig;
use std::time::Duration;
use tracing::{debug, instrument};

/// Upstream error bodies are cut to this many characters before being logged.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    config: SummarizeConfig,
}

impl OpenAiSummarizer {
    /// Builds the HTTP client. The API key is not needed yet; it is resolved per call.
    ///
    /// # Errors
    /// Returns [`SummarizeError::Http`] when the TLS backend cannot be initialised.
    pub fn new(config: SummarizeConfig) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("building model API client")?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Configured key first, then the fallback environment variable. Blank values count as unset.
    fn api_key(&self) -> Result<String, SummarizeError> {
        self.config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.config.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SummarizeError::Config {
                message: format!(
                    "no API key; set summarize.api_key or {}",
                    self.config.api_key_env
                )
                .into(),
                context: None,
            })
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    #[instrument(skip_all, fields(model = %self.config.model, sheets = workbook.sheets().len()))]
    async fn summarize(&self, workbook: &Workbook) -> Result<String, SummarizeError> {
        let api_key = self.api_key()?;
        let content = workbook.render(self.config.max_rows);

        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: &content },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .context("sending chat completion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Upstream {
                message: format!("model API returned {status}").into(),
                context: Some(body.chars().take(MAX_ERROR_BODY).collect::<String>().into()),
            });
        }

        let completion: ChatCompletion =
            response.json().await.context("decoding chat completion")?;
        debug!(choices = completion.choices.len(), "Received chat completion");

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|summary| summary.trim().to_owned())
            .filter(|summary| !summary.is_empty())
            .ok_or_else(|| SummarizeError::Upstream {
                message: "model returned an empty completion".into(),
                context: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer(base_url: &str) -> OpenAiSummarizer {
        OpenAiSummarizer::new(SummarizeConfig {
            base_url: base_url.to_owned(),
            api_key_env: "SHEETWISE_TEST_UNSET_KEY".to_owned(),
            ..SummarizeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            summarizer("http://model.local/v1/").endpoint(),
            "http://model.local/v1/chat/completions"
        );
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let mut engine = summarizer("http://model.local");
        engine.config.api_key = Some("   ".to_owned());
        let err = engine.api_key().unwrap_err();
        assert!(err.to_string().contains("SHEETWISE_TEST_UNSET_KEY"));
    }

    #[test]
    fn blank_key_falls_back_to_env_var() {
        let mut engine = summarizer("http://model.local");
        engine.config.api_key = Some(String::new());
        engine.config.api_key_env = "PATH".to_owned();
        assert_eq!(engine.api_key().unwrap(), std::env::var("PATH").unwrap());
    }
}
