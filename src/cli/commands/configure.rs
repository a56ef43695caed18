//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ChatDefaults, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions, resolve_config,
};
use crate::ui::{Style, handle_prompt_cancellation};
use crate::widget::{Language, SUPPORTED_LANGUAGES};

const ASK_EACH_TIME: &str = "(ask each time)";

/// Runs the configure command to edit default settings.
///
/// With `show`, prints the current defaults and exits. Otherwise prompts
/// for the endpoint and the startup language and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_current_defaults(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_defaults(manager, &config);

    let endpoint = prompt_endpoint(config.chat.endpoint.as_deref())?;
    let lang = select_language(config.chat.lang)?;

    config.chat = ChatDefaults {
        endpoint: Some(endpoint),
        lang,
    };

    // Reject anything the chat command would refuse to start with
    resolve_config(&ResolveOptions::default(), &config)?;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config.chat.endpoint.as_deref().map_or_else(
            || Style::secondary(format!("{DEFAULT_ENDPOINT} (built-in)")),
            Style::value
        )
    );
    println!(
        "  {}      {}",
        Style::label("lang"),
        config
            .chat
            .lang
            .map_or_else(|| Style::secondary(ASK_EACH_TIME), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("RAG proxy endpoint:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Full URL of the chat route, e.g. http://localhost:3000/rag-chat")
        .prompt()?;

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.to_string())
}

fn select_language(default: Option<Language>) -> Result<Option<Language>> {
    // "(ask each time)" first, then "code - Name"
    let mut options = vec![ASK_EACH_TIME.to_string()];
    options.extend(
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(lang, name)| format!("{} - {name}", lang.code())),
    );

    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|(lang, _)| *lang == d))
        .map_or(0, |idx| idx + 1);

    let selection = Select::new("Startup language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    if selection == ASK_EACH_TIME {
        return Ok(None);
    }

    // split() always yields at least one element
    let code = selection.split(" - ").next().unwrap_or(&selection);
    code.parse().map(Some)
}
