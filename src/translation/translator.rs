//! Provider abstraction and the per-sentence translation loop.

use async_trait::async_trait;

use super::error::{TranslateError, TranslateResult};
use super::language::TargetLanguage;

/// Placeholder shown in place of a sentence whose translation failed.
pub const TRANSLATION_ERROR: &str = "[Translation Error]";

/// A translation backend.
///
/// Implementations make one request per call and never retry. Any failure is
/// returned as a [`TranslateError`]; callers decide how to degrade.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`.
    async fn translate(&self, text: &str, target: TargetLanguage) -> TranslateResult<String>;

    /// Name used in logs and status output.
    fn provider_name(&self) -> &str;
}

/// Translates each sentence on its own, in order, keeping every outcome.
///
/// Returns an empty vector without touching the provider when `target` is
/// [`TargetLanguage::None`]. Otherwise the output has one entry per sentence.
pub async fn translate_each(
    translator: &dyn Translator,
    sentences: &[String],
    target: TargetLanguage,
) -> Vec<TranslateResult<String>> {
    if target.is_none() {
        return Vec::new();
    }

    let mut outcomes = Vec::with_capacity(sentences.len());
    for (index, sentence) in sentences.iter().enumerate() {
        let outcome = translator.translate(sentence, target).await;
        if let Err(e) = &outcome {
            tracing::warn!(
                provider = translator.provider_name(),
                index,
                lang = target.code(),
                "translation failed: {e}"
            );
        }
        outcomes.push(outcome);
    }
    outcomes
}

/// Translates each sentence, substituting [`TRANSLATION_ERROR`] for failures.
///
/// One failing sentence never affects the others. The result is empty when
/// `target` is [`TargetLanguage::None`], and has the same length as
/// `sentences` otherwise.
pub async fn translate_sentences(
    translator: &dyn Translator,
    sentences: &[String],
    target: TargetLanguage,
) -> Vec<String> {
    translate_each(translator, sentences, target)
        .await
        .into_iter()
        .map(|outcome| outcome.unwrap_or_else(|_| TRANSLATION_ERROR.to_string()))
        .collect()
}

/// Rejects blank text before a provider is contacted.
pub(crate) fn require_text(text: &str) -> TranslateResult<&str> {
    if text.trim().is_empty() {
        Err(TranslateError::EmptyInput)
    } else {
        Ok(text)
    }
}
