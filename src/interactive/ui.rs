//! Interactive mode UI components.

use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - type a sentence, or /edit to paste a paragraph",
        Style::header("tidy"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Settings"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    if let Some(model) = &config.model {
        println!("  {}      {}", Style::label("model"), Style::value(model));
    }
    println!(
        "  {}         {} {}",
        Style::label("to"),
        Style::value(config.target.name()),
        Style::code(config.target.code())
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/to <lang>", "Change target language, '/to none' to only clean"),
        ("/edit     ", "Open $EDITOR to paste multi-line text"),
        ("/languages", "List target languages"),
        ("/config   ", "Show current settings"),
        ("/help     ", "Show this help"),
        ("/quit     ", "Exit interactive mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
