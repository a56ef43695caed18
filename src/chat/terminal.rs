//! Terminal rendering of the chat widget.

use crate::ui::Spinner;
use crate::widget::{Message, Surface};

use super::ui;

/// A [`Surface`] that prints bubbles to stdout.
///
/// Placeholder and send label are kept for the next input prompt; the
/// loading indicator is a spinner on stderr.
pub struct TerminalSurface {
    language_select_visible: bool,
    chat_visible: bool,
    placeholder: String,
    send_label: String,
    loading_text: String,
    spinner: Option<Spinner>,
    send_enabled: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            language_select_visible: true,
            chat_visible: false,
            placeholder: String::new(),
            send_label: String::new(),
            loading_text: String::new(),
            spinner: None,
            send_enabled: true,
        }
    }

    pub const fn language_select_visible(&self) -> bool {
        self.language_select_visible
    }

    pub const fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn send_label(&self) -> &str {
        &self.send_label
    }

    pub const fn send_enabled(&self) -> bool {
        self.send_enabled
    }

    pub const fn is_loading(&self) -> bool {
        self.spinner.is_some()
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn set_language_select_visible(&mut self, visible: bool) {
        self.language_select_visible = visible;
    }

    fn set_chat_visible(&mut self, visible: bool) {
        if visible && !self.chat_visible {
            println!();
        }
        self.chat_visible = visible;
    }

    fn set_placeholder(&mut self, text: &str) {
        text.clone_into(&mut self.placeholder);
    }

    fn set_send_label(&mut self, text: &str) {
        text.clone_into(&mut self.send_label);
    }

    fn set_loading_text(&mut self, text: &str) {
        text.clone_into(&mut self.loading_text);
    }

    fn append_message(&mut self, message: &Message) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| ui::print_bubble(message)),
            None => ui::print_bubble(message),
        }
    }

    // Every prompt starts with an empty input line.
    fn clear_input(&mut self) {}

    fn set_loading(&mut self, loading: bool) {
        self.spinner = loading.then(|| Spinner::new(&self.loading_text));
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_shows_language_select() {
        let surface = TerminalSurface::new();
        assert!(surface.language_select_visible());
        assert!(!surface.chat_visible());
        assert!(surface.send_enabled());
        assert!(!surface.is_loading());
    }

    #[test]
    fn test_surface_keeps_prompt_strings() {
        let mut surface = TerminalSurface::new();
        surface.set_placeholder("Enter your question...");
        surface.set_send_label("Send");
        assert_eq!(surface.placeholder(), "Enter your question...");
        assert_eq!(surface.send_label(), "Send");
    }

    #[test]
    fn test_loading_toggles_spinner() {
        let mut surface = TerminalSurface::new();
        surface.set_loading(true);
        assert!(surface.is_loading());
        surface.set_loading(false);
        assert!(!surface.is_loading());
    }
}
