use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use tidy_cli::cli::commands::{clean, interactive, providers};
use tidy_cli::cli::{Args, Command};
use tidy_cli::logging;
use tidy_cli::output::{self, OutputConfig};
use tidy_cli::translation::{InvalidLanguage, print_languages};
use tidy_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let no_color = args.no_color || args.output.is_some() || !std::io::stdout().is_terminal();
    output::init(OutputConfig::from_flags(args.quiet, no_color));
    logging::init(args.verbose, output::is_no_color());

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Interactive {
            to,
            provider,
            model,
        }) => {
            let options = interactive::InteractiveOptions {
                to,
                provider,
                model,
            };
            interactive::run_interactive(options).await?;
        }
        None => {
            let options = clean::CleanOptions {
                file: args.file,
                to: args.to,
                provider: args.provider,
                model: args.model,
                format: args.format,
                output: args.output,
            };
            clean::run_clean(options).await?;
        }
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.downcast_ref::<InvalidLanguage>().is_some() {
        exitcode::USAGE
    } else {
        exitcode::SOFTWARE
    }
}
