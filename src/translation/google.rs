//! Keyless Google Translate web endpoint.
//!
//! This is the endpoint used by browser extensions and the `translate.google`
//! widget. It needs no API key, has undocumented rate limits and may reject
//! requests at any time, which is fine for best-effort sentence translation.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use super::error::{TranslateError, TranslateResult};
use super::language::TargetLanguage;
use super::translator::{Translator, require_text};

/// Default base URL of the web endpoint.
pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com";

pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(&self, text: &str, target: TargetLanguage) -> TranslateResult<Url> {
        let target_code = provider_code(target)?;
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));

        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_code),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| TranslateError::InvalidResponse(format!("invalid endpoint {base}: {e}")))
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_GOOGLE_ENDPOINT.to_string())
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> TranslateResult<String> {
        let text = require_text(text)?;
        let url = self.request_url(text, target)?;

        tracing::debug!(lang = target.code(), chars = text.len(), "google request");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let body: Value = response.json().await?;
        parse_translation(&body)
    }

    fn provider_name(&self) -> &str {
        "google"
    }
}

/// Maps a language to the code the endpoint expects.
fn provider_code(target: TargetLanguage) -> TranslateResult<&'static str> {
    match target {
        TargetLanguage::None => Err(TranslateError::UnsupportedLanguage(
            target.code().to_string(),
        )),
        TargetLanguage::Chinese => Ok("zh-CN"),
        other => Ok(other.code()),
    }
}

/// Extracts the translated text from a `translate_a/single` response.
///
/// The body is a nested array whose first element lists translated segments,
/// each segment being `[translated, original, ...]`. Long input comes back as
/// several segments that are concatenated in order.
fn parse_translation(body: &Value) -> TranslateResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::InvalidResponse("missing segment list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslateError::InvalidResponse(
            "no translated segments".to_string(),
        ));
    }

    Ok(translated)
}
