//! Line-break and spacing repair for pasted prose.

use regex::Regex;
use std::sync::LazyLock;

// unwrap is safe: patterns are compile-time constants
#[allow(clippy::unwrap_used)]
static BREAK_BEFORE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r\n|\r|\n)(\w)").unwrap());

#[allow(clippy::unwrap_used)]
static BREAK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

#[allow(clippy::unwrap_used)]
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.!?])").unwrap());

/// Cleans pasted text into a single line of prose.
///
/// Applied in order:
///
/// 1. A line break directly followed by a word character becomes a space,
///    which re-joins hard-wrapped paragraphs.
/// 2. Any remaining run of line breaks becomes a single space.
/// 3. Whitespace in front of `,`, `.`, `!` or `?` is removed.
/// 4. The result is trimmed.
///
/// `\n`, `\r` and `\r\n` all count as line breaks. The function is total and
/// idempotent; empty input gives an empty string.
///
/// # Example
///
/// ```
/// use tidy_cli::text::clean_paragraph;
///
/// assert_eq!(clean_paragraph("Hello\nworld ."), "Hello world.");
/// ```
pub fn clean_paragraph(text: &str) -> String {
    let text = BREAK_BEFORE_WORD.replace_all(text, " $1");
    let text = BREAK_RUN.replace_all(&text, " ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    text.trim().to_string()
}
