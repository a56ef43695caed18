//! Interactive terminal front end for the chat widget.
//!
//! Renders the widget with a [`TerminalSurface`] and drives it from a
//! REPL with slash commands.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod terminal;
mod ui;

pub use session::{ChatSession, SessionConfig};
pub use terminal::TerminalSurface;
