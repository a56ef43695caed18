//! Chat mode UI components.

use crate::ui::Style;
use crate::widget::{Language, Message, Sender};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Hotel concierge chat",
        Style::header("rag-chat"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_bubble(message: &Message) {
    let label = match message.sender {
        Sender::User => Style::user("You"),
        Sender::Bot => Style::bot("Bot"),
    };
    println!("{label} {}", message.text);
    println!();
}

pub fn print_config(endpoint: &str, language: Option<Language>) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(endpoint)
    );
    println!(
        "  {}       {}",
        Style::label("lang"),
        language.map_or_else(|| Style::secondary("(not selected)"), Style::value)
    );
    println!();
}

pub fn print_help(send_label: &str) {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("Enter"),
        Style::secondary(send_label)
    );
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show the endpoint and language")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Leave the chat")
    );
    println!();
}
