//! Subcommand implementations.

/// Interactive chat handler (the default command).
pub mod chat;

/// Configure command handler.
pub mod configure;
