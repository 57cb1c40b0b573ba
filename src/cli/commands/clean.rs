use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::pipeline;
use crate::status;
use crate::translation::TRANSLATION_ERROR;
use crate::ui::{OutputFormat, Spinner, Style, render};

pub struct CleanOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Cleans, splits and translates one input, then prints or saves the pairs.
pub async fn run_clean(options: CleanOptions) -> Result<()> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to,
            provider: options.provider,
            model: options.model,
        },
        &config_file,
    )?;

    let source_text = InputReader::read(options.file.as_deref())?;

    if source_text.trim().is_empty() {
        status!("{} Enter text to clean and translate.", Style::secondary("Nothing to do:"));
        return Ok(());
    }

    let translator = resolved.build_translator();

    let spinner = (!resolved.target.is_none())
        .then(|| Spinner::new(&format!("Translating to {}...", resolved.target)));
    let pairs = pipeline::process(&source_text, resolved.target, translator.as_ref()).await;
    drop(spinner);

    let failed = pairs
        .iter()
        .filter(|p| p.translated == TRANSLATION_ERROR)
        .count();
    if failed > 0 {
        status!(
            "{} {failed} of {} sentences could not be translated by '{}'",
            Style::warning("Warning:"),
            pairs.len(),
            resolved.provider_name
        );
    }

    let rendered = render(&pairs, options.format)?;

    match options.output {
        Some(path) => {
            atomic_write(&path, &rendered)?;
            status!(
                "{} Wrote {} sentences to {}",
                Style::success("✓"),
                pairs.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
