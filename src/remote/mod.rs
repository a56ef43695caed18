//! Outbound calls to the RAG proxy service.

mod client;
mod error;

pub use client::RagClient;
pub use error::QueryError;

use async_trait::async_trait;

use crate::widget::Language;

/// Something that answers a user message in a given language.
///
/// [`RagClient`] is the HTTP implementation; tests substitute fakes so the
/// widget can be exercised without network I/O.
#[async_trait]
pub trait RemoteResponder: Send + Sync {
    /// Sends one message and returns the bot's reply.
    ///
    /// Exactly one attempt is made; there is no retry.
    async fn query(&self, message: &str, lang: Language) -> Result<String, QueryError>;

    /// Where requests go, shown in connectivity error messages.
    fn endpoint(&self) -> &str;
}
