use tracing::{debug, info};

use super::language::Language;
use super::message::Message;
use super::surface::Surface;
use crate::remote::{QueryError, RemoteResponder};

/// What a call to [`ChatWidget::send`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was empty after trimming; nothing happened.
    Skipped,
    /// The user bubble was shown but no language is selected, so no request was made.
    NoLanguage,
    /// The server replied and its answer was appended.
    Replied,
    /// The request failed and an error bubble was appended.
    Failed,
}

/// The chat widget controller.
///
/// Owns the session state (selected language, loading flag) and drives a
/// [`Surface`]. Replies come from a [`RemoteResponder`]. `send` takes
/// `&mut self`, so a widget never has more than one request in flight.
pub struct ChatWidget<S, R> {
    surface: S,
    responder: R,
    language: Option<Language>,
    loading: bool,
}

impl<S: Surface, R: RemoteResponder> ChatWidget<S, R> {
    /// Creates a widget in the language selection state.
    pub fn new(mut surface: S, responder: R) -> Self {
        surface.set_chat_visible(false);
        surface.set_language_select_visible(true);
        surface.set_loading(false);
        surface.set_send_enabled(true);

        Self {
            surface,
            responder,
            language: None,
            loading: false,
        }
    }

    pub const fn language(&self) -> Option<Language> {
        self.language
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn endpoint(&self) -> &str {
        self.responder.endpoint()
    }

    /// Selects the session language and switches to the chat view.
    ///
    /// The language is set once per session. Later calls are ignored since
    /// the selection controls are hidden after the first one.
    pub fn select_language(&mut self, lang: Language) {
        if let Some(current) = self.language {
            debug!(%current, requested = %lang, "language already selected");
            return;
        }

        info!(%lang, "language selected");
        self.language = Some(lang);

        self.surface.set_language_select_visible(false);
        self.surface.set_chat_visible(true);

        let strings = lang.strings();
        self.surface.set_placeholder(strings.placeholder);
        self.surface.set_send_label(strings.send_label);
        self.surface.set_loading_text(strings.loading);
        self.surface.append_message(&Message::bot(strings.welcome));
    }

    /// Sends the text from the input field.
    ///
    /// Whitespace-only input is ignored. Otherwise the trimmed text is
    /// appended as a user bubble, the input is cleared and the reply is
    /// awaited before returning.
    pub async fn send(&mut self, input: &str) -> SendOutcome {
        let message = input.trim();
        if message.is_empty() {
            return SendOutcome::Skipped;
        }

        self.surface.append_message(&Message::user(message));
        self.surface.clear_input();

        self.query_remote(message).await
    }

    /// Asks the remote responder and appends its reply or an error bubble.
    ///
    /// Does nothing while no language is selected. The loading indicator and
    /// the disabled send control are reset on every path.
    pub async fn query_remote(&mut self, message: &str) -> SendOutcome {
        let Some(lang) = self.language else {
            debug!("no language selected, request dropped");
            return SendOutcome::NoLanguage;
        };

        self.set_busy(true);

        let result = self.responder.query(message, lang).await;
        let outcome = match result {
            Ok(reply) => {
                self.surface.append_message(&Message::bot(reply));
                SendOutcome::Replied
            }
            Err(err) => {
                debug!(error = %err, "fetch error");
                let text = self.error_text(lang, &err);
                self.surface.append_message(&Message::bot(text));
                SendOutcome::Failed
            }
        };

        self.set_busy(false);
        outcome
    }

    fn set_busy(&mut self, busy: bool) {
        self.loading = busy;
        self.surface.set_loading(busy);
        self.surface.set_send_enabled(!busy);
    }

    fn error_text(&self, lang: Language, err: &QueryError) -> String {
        let strings = lang.strings();
        let message = if err.is_connection_failure() {
            strings.connect_failure(self.responder.endpoint())
        } else {
            err.to_string()
        };
        strings.error_message(&message)
    }
}
