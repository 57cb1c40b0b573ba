use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, InquireError, Text};
use std::io::{self, Write};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::pipeline;
use crate::translation::{TargetLanguage, Translator, print_languages};
use crate::ui::{Spinner, Style, is_prompt_cancelled, render_text};

/// Each prompt submits a single line, so wrapped paragraphs go through `/edit`.
const PROMPT_HELP: &str = "Type a sentence, /edit to paste a multi-line paragraph, /help for commands";

/// Current selections of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: Option<String>,
    pub target: TargetLanguage,
}

impl From<&ResolvedConfig> for SessionConfig {
    fn from(resolved: &ResolvedConfig) -> Self {
        Self {
            provider_name: resolved.provider_name.clone(),
            endpoint: resolved.endpoint.clone(),
            model: resolved.model.clone(),
            target: resolved.target,
        }
    }
}

impl SessionConfig {
    /// Applies a `/to` argument, returning the new language.
    pub fn set_target(&mut self, value: &str) -> Result<TargetLanguage> {
        self.target = value.parse()?;
        Ok(self.target)
    }
}

/// A prompt loop that cleans and translates each entry from scratch.
pub struct InteractiveSession {
    config: SessionConfig,
    translator: Box<dyn Translator>,
}

impl InteractiveSession {
    pub fn new(config: SessionConfig, translator: Box<dyn Translator>) -> Self {
        Self { config, translator }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(PROMPT_HELP)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(SlashCommand::Quit) => break,
                    Input::Command(SlashCommand::Edit) => {
                        if let Some(text) = Self::open_editor()? {
                            self.process_and_print(&text).await?;
                        }
                    }
                    Input::Command(cmd) => self.handle_command(cmd),
                    Input::Text(text) => self.process_and_print(&text).await?,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) {
        match cmd {
            SlashCommand::To(value) => self.set_to(value.as_deref()),
            SlashCommand::Languages => {
                print_languages();
                println!();
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
            // handled by the prompt loop
            SlashCommand::Edit | SlashCommand::Quit => {}
        }
    }

    fn set_to(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            ui::print_error("Usage: /to <language>");
            return;
        };

        match self.config.set_target(value) {
            Ok(TargetLanguage::None) => {
                println!("{} Translation turned off\n", Style::success("✓"));
            }
            Ok(lang) => {
                println!(
                    "{} Target language set to {}\n",
                    Style::success("✓"),
                    Style::value(lang.name())
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    /// Returns `None` when the editor is cancelled or left empty.
    fn open_editor() -> Result<Option<String>> {
        match Editor::new("Paste text, then save and close the editor").prompt() {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if is_prompt_cancelled(&e) => Ok(None),
            Err(InquireError::IO(e)) => {
                ui::print_error(&format!("Could not open editor: {e}"));
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn process_and_print(&self, text: &str) -> Result<()> {
        let spinner = (!self.config.target.is_none()).then(|| Spinner::new("Translating..."));
        let pairs = pipeline::process(text, self.config.target, self.translator.as_ref()).await;
        drop(spinner);

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", render_text(&pairs))?;
        stdout.flush()?;
        Ok(())
    }
}
