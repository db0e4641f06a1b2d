//! HTTP chat client speaking the OpenAI-compatible completions API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::ChatClient;
use super::AnalysisError;
use crate::config::ChatConfig;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
/// Works against a local Ollama server or any hosted gateway that speaks
/// the same protocol.
pub struct HttpChatClient {
    client: reqwest::blocking::Client,
    config: ChatConfig,
}

impl HttpChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, AnalysisError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::HttpClient(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl ChatClient for HttpChatClient {
    fn complete(&self, model: &str, prompt: &str, system: &str) -> Result<String, AnalysisError> {
        let body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };

        let mut request = self.client.post(self.completions_url()).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                AnalysisError::Connection(self.config.base_url.clone())
            } else if e.is_timeout() {
                AnalysisError::Timeout(self.config.timeout_secs)
            } else {
                AnalysisError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AnalysisError::ResponseDecoding(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                AnalysisError::ResponseDecoding("reply contained no choices".to_string())
            })
    }
}

/// Scripted client for tests and offline runs. Returns the same canned
/// reply for every call.
pub struct MockChatClient {
    response: String,
}

impl MockChatClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl ChatClient for MockChatClient {
    fn complete(
        &self,
        _model: &str,
        _prompt: &str,
        _system: &str,
    ) -> Result<String, AnalysisError> {
        Ok(self.response.clone())
    }
}
