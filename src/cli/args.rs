use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tidy")]
#[command(about = "Clean up pasted text and translate it sentence by sentence")]
#[command(version)]
pub struct Args {
    /// File to clean (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target language code or name (en, es, fr, de, zh-cn, ja, vi, or none)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Provider name (built-in: google)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name for chat-completion providers
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write results to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Suppress status messages and the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported target languages
    Languages,
    /// List translation providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Interactive mode: paste text, see cleaned and translated sentences
    #[command(visible_alias = "i")]
    Interactive {
        /// Target language code or name
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Provider name
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
}
