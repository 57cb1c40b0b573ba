//! Terminal and JSON rendering of sentence pairs.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt::Write;

use super::Style;
use crate::pipeline::SentencePair;

/// How results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered "Cleaned:" / "Translated:" blocks
    #[default]
    Text,
    /// A JSON array of `{index, cleaned, translated}` objects
    Json,
}

/// Renders pairs in the requested format, ending with a newline.
pub fn render(pairs: &[SentencePair], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(pairs)),
        OutputFormat::Json => render_json(pairs),
    }
}

/// One block per sentence. The translation line is left out when there is
/// no translation.
pub fn render_text(pairs: &[SentencePair]) -> String {
    let width = pairs.len().to_string().len();
    let indent = " ".repeat(width + 2);
    let mut out = String::new();

    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let number = format!("{:>width$}", pair.index + 1);
        let _ = writeln!(
            out,
            "{}  {} {}",
            Style::index(number),
            Style::label("Cleaned:   "),
            pair.cleaned
        );

        if !pair.translated.is_empty() {
            let _ = writeln!(
                out,
                "{indent}{} {}",
                Style::label("Translated:"),
                Style::value(&pair.translated)
            );
        }
    }

    out
}

pub fn render_json(pairs: &[SentencePair]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(pairs).context("Failed to serialize results")?;
    json.push('\n');
    Ok(json)
}
