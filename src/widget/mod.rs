//! The chat widget: language selection, message log and the request cycle.
//!
//! [`ChatWidget`] holds all behavior. It renders through a [`Surface`] and
//! gets answers from a [`RemoteResponder`](crate::remote::RemoteResponder),
//! so it runs the same against a terminal or a recording test double.

mod controller;
mod language;
mod message;
mod surface;

pub use controller::{ChatWidget, SendOutcome};
pub use language::{Language, SUPPORTED_LANGUAGES, Strings, print_languages, validate_language};
pub use message::{Message, Sender};
pub use surface::Surface;
