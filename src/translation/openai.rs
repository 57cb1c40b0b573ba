use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;

use super::error::{TranslateError, TranslateResult};
use super::language::TargetLanguage;
use super::prompt::build_system_prompt;
use super::sse_parser::sse_to_text_stream;
use super::translator::{Translator, require_text};

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Translator backed by an OpenAI-compatible chat completions endpoint.
///
/// The response is streamed and collected, so long outputs do not hit
/// non-streaming response limits on local servers.
pub struct OpenAiTranslator {
    client: Client,
    name: String,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiTranslator {
    pub fn new(name: String, endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            name,
            endpoint,
            model,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> TranslateResult<String> {
        let text = require_text(text)?;
        if target.is_none() {
            return Err(TranslateError::UnsupportedLanguage(
                target.code().to_string(),
            ));
        }

        let url = self.completions_url();
        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(build_system_prompt(target.name())),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: true,
        };

        tracing::debug!(provider = %self.name, model = %self.model, %url, "chat completion request");

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut translated = String::new();

        while let Some(chunk) = stream.next().await {
            translated.push_str(&chunk?);
        }

        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslateError::InvalidResponse(
                "empty completion".to_string(),
            ));
        }

        Ok(translated.to_string())
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn translator(endpoint: &str) -> OpenAiTranslator {
        OpenAiTranslator::new(
            "ollama".to_string(),
            endpoint.to_string(),
            "gemma3:12b".to_string(),
            None,
        )
    }

    #[test]
    fn test_completions_url_trims_slash() {
        assert_eq!(
            translator("http://localhost:11434/").completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
        assert_eq!(
            translator("https://openrouter.ai/api").completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "m",
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed("Hi."),
            }],
            stream: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hi.");
    }

    #[tokio::test]
    async fn test_rejects_none_target_without_request() {
        let result = translator("http://invalid.invalid")
            .translate("Hello.", TargetLanguage::None)
            .await;
        assert!(matches!(
            result,
            Err(TranslateError::UnsupportedLanguage(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_blank_text_without_request() {
        let result = translator("http://invalid.invalid")
            .translate("", TargetLanguage::French)
            .await;
        assert!(matches!(result, Err(TranslateError::EmptyInput)));
    }

    #[test]
    fn test_provider_name_is_configured_name() {
        assert_eq!(translator("http://x").provider_name(), "ollama");
    }
}
