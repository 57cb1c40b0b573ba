use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/to", "Change target language (or 'none')"),
    ("/edit", "Open $EDITOR to paste multi-line text"),
    ("/languages", "List target languages"),
    ("/config", "Show current settings"),
    ("/help", "Show available commands"),
    ("/quit", "Exit interactive mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(' ') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// `/to <lang>`; `None` when the argument is missing
    To(Option<String>),
    Edit,
    Languages,
    Config,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("to" | "lang") => SlashCommand::To(parts.get(1).map(ToString::to_string)),
        Some("edit" | "paste") => SlashCommand::Edit,
        Some("languages") => SlashCommand::Languages,
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("  \t "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  Hello ,world !  "),
            Input::Text("Hello ,world !".to_string())
        );
    }

    #[test]
    fn test_parse_to_command() {
        assert_eq!(
            parse_input("/to ja"),
            Input::Command(SlashCommand::To(Some("ja".to_string())))
        );
        assert_eq!(
            parse_input("/lang none"),
            Input::Command(SlashCommand::To(Some("none".to_string())))
        );
        assert_eq!(parse_input("/to"), Input::Command(SlashCommand::To(None)));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/edit"), Input::Command(SlashCommand::Edit));
        assert_eq!(parse_input("/paste"), Input::Command(SlashCommand::Edit));
        assert_eq!(
            parse_input("/languages"),
            Input::Command(SlashCommand::Languages)
        );
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_quit_aliases() {
        for input in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(input), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/translate now"),
            Input::Command(SlashCommand::Unknown("translate now".to_string()))
        );
    }

    #[test]
    fn test_completer_ignores_plain_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("hello").unwrap().is_empty());
    }

    #[test]
    fn test_completer_lists_all_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_filters_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/l").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/languages"));

        assert!(completer.get_suggestions("/to ja").unwrap().is_empty());
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/edit  Open $EDITOR to paste multi-line text".to_string();
        let completion = completer.get_completion("/e", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/edit".to_string()));

        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
