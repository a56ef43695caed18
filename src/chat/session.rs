use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::terminal::TerminalSurface;
use super::ui;
use crate::remote::RagClient;
use crate::ui::{Style, cancelled_as_none};
use crate::widget::{ChatWidget, Language, SUPPORTED_LANGUAGES};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The RAG proxy chat endpoint URL.
    pub endpoint: String,
    /// A language chosen ahead of time, skipping the selection prompt.
    pub language: Option<Language>,
}

impl SessionConfig {
    pub const fn new(endpoint: String, language: Option<Language>) -> Self {
        Self { endpoint, language }
    }
}

// A language selection control.
struct LanguageChoice(Language);

impl fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.display_name(), self.0.code())
    }
}

/// An interactive chat session in the terminal.
///
/// Shows the language selection first, then a REPL where each line
/// confirmed with Enter is sent through the widget.
pub struct ChatSession {
    widget: ChatWidget<TerminalSurface, RagClient>,
    preselected: Option<Language>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = RagClient::new(config.endpoint);
        Self {
            widget: ChatWidget::new(TerminalSurface::new(), client),
            preselected: config.language,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        crate::status!(
            "{} {}\n",
            Style::label("endpoint"),
            Style::secondary(self.widget.endpoint())
        );

        let language = match self.preselected {
            Some(language) => language,
            None => {
                let Some(language) = cancelled_as_none(prompt_language())? else {
                    println!();
                    ui::print_goodbye();
                    return Ok(());
                };
                language
            }
        };
        self.widget.select_language(language);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let surface = self.widget.surface();
            let placeholder = surface.placeholder().to_string();
            let help = format!(
                "Enter: {}, /help for commands, Ctrl+C to quit",
                surface.send_label()
            );

            let input = Text::new("")
                .with_render_config(render_config)
                .with_placeholder(&placeholder)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(&help)
                .prompt();

            let Some(line) = cancelled_as_none(input)? else {
                println!(); // Clear line before goodbye message
                break;
            };

            match parse_input(&line) {
                Input::Command(cmd) => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                Input::Message(text) => {
                    self.widget.send(&text).await;
                }
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(self.widget.endpoint(), self.widget.language());
                true
            }
            SlashCommand::Help => {
                ui::print_help(self.widget.surface().send_label());
                true
            }
            SlashCommand::Quit => false,
        }
    }
}

fn prompt_language() -> Result<Language, InquireError> {
    let choices = SUPPORTED_LANGUAGES
        .iter()
        .map(|(language, _)| LanguageChoice(*language))
        .collect();

    Select::new("言語を選択してください / Select a language", choices)
        .prompt()
        .map(|choice| choice.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_new() {
        let config = SessionConfig::new(
            "http://localhost:3000/rag-chat".to_string(),
            Some(Language::Ja),
        );

        assert_eq!(config.endpoint, "http://localhost:3000/rag-chat");
        assert_eq!(config.language, Some(Language::Ja));
    }

    #[test]
    fn test_language_choice_display() {
        assert_eq!(LanguageChoice(Language::Ja).to_string(), "日本語 (ja)");
        assert_eq!(LanguageChoice(Language::En).to_string(), "English (en)");
    }

    #[test]
    fn test_new_session_waits_for_language() {
        let session = ChatSession::new(SessionConfig::new(
            "http://localhost:3000/rag-chat".to_string(),
            None,
        ));

        assert_eq!(session.widget.language(), None);
        assert!(session.widget.surface().language_select_visible());
    }
}
