//! The UI elements a [`ChatWidget`](super::ChatWidget) drives.

use super::message::Message;

/// Render target for the widget.
///
/// Each method maps to one pre-existing UI element: the language selection
/// controls, the message log plus input row, the input field, the send
/// control and the loading indicator. Implementations only render; all
/// session state lives in the widget.
pub trait Surface {
    fn set_language_select_visible(&mut self, visible: bool);

    /// Shows or hides the message log together with the input row.
    fn set_chat_visible(&mut self, visible: bool);

    fn set_placeholder(&mut self, text: &str);

    fn set_send_label(&mut self, text: &str);

    /// Text shown next to the loading indicator, if the surface has room for one.
    fn set_loading_text(&mut self, _text: &str) {}

    /// Appends a bubble to the log and keeps it scrolled to the bottom.
    fn append_message(&mut self, message: &Message);

    fn clear_input(&mut self);

    fn set_loading(&mut self, loading: bool);

    fn set_send_enabled(&mut self, enabled: bool);
}
