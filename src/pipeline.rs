//! Clean → split → translate → pair.

use serde::Serialize;

use crate::text::{clean_paragraph, split_sentences};
use crate::translation::{TargetLanguage, Translator, translate_sentences};

/// A cleaned sentence shown next to its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentencePair {
    /// Zero-based position in the input.
    pub index: usize,
    pub cleaned: String,
    /// Empty when translation was skipped.
    pub translated: String,
}

/// Pairs each sentence with its translation by index.
///
/// When `translated` is empty (translation skipped) every pair gets an empty
/// translation.
pub fn pair_sentences(sentences: Vec<String>, translated: Vec<String>) -> Vec<SentencePair> {
    let mut translated = translated.into_iter();

    sentences
        .into_iter()
        .enumerate()
        .map(|(index, cleaned)| SentencePair {
            index,
            cleaned,
            translated: translated.next().unwrap_or_default(),
        })
        .collect()
}

/// Runs the whole pipeline over raw input text.
///
/// Holds no state; the same text and language always produce the same
/// cleaned sentences.
pub async fn process(
    raw: &str,
    target: TargetLanguage,
    translator: &dyn Translator,
) -> Vec<SentencePair> {
    let cleaned = clean_paragraph(raw);
    let sentences = split_sentences(&cleaned);

    tracing::info!(
        sentences = sentences.len(),
        lang = target.code(),
        provider = translator.provider_name(),
        "processing text"
    );

    let translated = translate_sentences(translator, &sentences, target).await;
    pair_sentences(sentences, translated)
}
