//! # rag-chat - Hotel Concierge Chat Client
//!
//! `rag-chat` is a terminal chat client for a retrieval-augmented
//! generation (RAG) proxy that answers questions about facilities around a
//! hotel. The user picks a language, then each message is posted to the
//! proxy and its reply is shown in the log.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a chat, choosing the language interactively
//! rag-chat
//!
//! # Start directly in Japanese against a local server
//! rag-chat --lang ja --endpoint http://localhost:3000/rag-chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/rag-chat/config.toml`:
//!
//! ```toml
//! [chat]
//! endpoint = "http://localhost:3000/rag-chat"
//! lang = "en"
//! ```
//!
//! ## Embedding the widget
//!
//! [`widget::ChatWidget`] does not depend on the terminal. Give it any
//! [`widget::Surface`] and [`remote::RemoteResponder`]:
//!
//! ```no_run
//! # async fn demo(surface: impl rag_chat::widget::Surface) {
//! use rag_chat::remote::RagClient;
//! use rag_chat::widget::{ChatWidget, Language};
//!
//! let client = RagClient::new("http://localhost:3000/rag-chat".to_string());
//! let mut widget = ChatWidget::new(surface, client);
//! widget.select_language(Language::En);
//! widget.send("Any good ramen nearby?").await;
//! # }
//! ```

/// Interactive terminal front end.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Client for the RAG proxy's chat endpoint.
pub mod remote;

/// Terminal UI components (spinner, colors).
pub mod ui;

/// The chat widget controller.
pub mod widget;
