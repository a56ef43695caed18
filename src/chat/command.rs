use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show the endpoint and language"),
    ("/help", "Show available commands"),
    ("/quit", "Leave the chat"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string()))
    }
}

/// Session commands typed in the input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
}

/// A line submitted with the confirm key.
///
/// Only the known command names are commands; any other line, including
/// one starting with `/`, is a message.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Text for the concierge, passed on untrimmed; the widget trims it.
    Message(String),
    Command(SlashCommand),
}

pub fn parse_input(line: &str) -> Input {
    line.trim()
        .strip_prefix('/')
        .and_then(parse_slash_command)
        .map_or_else(|| Input::Message(line.to_string()), Input::Command)
}

fn parse_slash_command(cmd: &str) -> Option<SlashCommand> {
    match cmd {
        "config" => Some(SlashCommand::Config),
        "help" | "?" => Some(SlashCommand::Help),
        "quit" | "exit" | "q" => Some(SlashCommand::Quit),
        _ => None,
    }
}
