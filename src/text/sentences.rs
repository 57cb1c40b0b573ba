//! Sentence segmentation on terminal punctuation.

use regex::Regex;
use std::sync::LazyLock;

// unwrap is safe: pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits normalized text into sentences.
///
/// A boundary sits right after a `.`, `!` or `?` that is followed by at least
/// one whitespace character. The punctuation stays with its sentence and the
/// whitespace is dropped. Trailing text without a terminator becomes the last
/// sentence as-is.
///
/// Empty input yields a single empty sentence, the same as any other text
/// without a boundary. Callers that display results should reject empty input
/// before getting here.
///
/// # Example
///
/// ```
/// use tidy_cli::text::split_sentences;
///
/// assert_eq!(split_sentences("Hi. Bye!"), vec!["Hi.", "Bye!"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // terminators are single-byte ASCII, so +1 stays on a char boundary
        let end = boundary.start() + 1;
        sentences.push(text[start..end].to_string());
        start = boundary.end();
    }

    sentences.push(text[start..].to_string());
    sentences
}
