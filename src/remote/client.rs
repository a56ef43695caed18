use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{QueryError, RemoteResponder};
use crate::widget::Language;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    user_message: &'a str,
    lang: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatReply {
    bot_response: String,
}

// Shown when an error body is JSON but carries no `error` field.
const MISSING_ERROR_FIELD: &str = "unknown error";

/// Extracts the `error` field of a decoded non-2xx body.
///
/// Any JSON body counts as a server-reported error; a missing or
/// non-string field still keeps the status.
fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => MISSING_ERROR_FIELD.to_string(),
        Some(other) => other.to_string(),
    }
}

/// HTTP client for the RAG proxy's chat endpoint.
pub struct RagClient {
    client: Client,
    endpoint: String,
}

impl RagClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl RemoteResponder for RagClient {
    async fn query(&self, message: &str, lang: Language) -> Result<String, QueryError> {
        let chat_request = ChatRequest {
            user_message: message,
            lang,
        };

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| QueryError::Connect(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::Connect(e.to_string()))?;

        if !status.is_success() {
            let reply = serde_json::from_slice::<Value>(&body).map_err(|e| {
                QueryError::InvalidResponse(format!("status {status}, undecodable error body: {e}"))
            })?;
            return Err(QueryError::Server {
                status: status.as_u16(),
                message: error_message(&reply),
            });
        }

        let reply = serde_json::from_slice::<ChatReply>(&body)
            .map_err(|e| QueryError::InvalidResponse(e.to_string()))?;

        Ok(reply.bot_response)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let request = ChatRequest {
            user_message: "こんにちは",
            lang: Language::Ja,
        };
        let value = serde_json::to_value(&request).ok();
        assert_eq!(
            value,
            Some(serde_json::json!({ "userMessage": "こんにちは", "lang": "ja" }))
        );
    }

    #[test]
    fn test_reply_decodes_bot_response() {
        let reply: Option<ChatReply> =
            serde_json::from_str(r#"{"botResponse":"Hello!"}"#).ok();
        assert_eq!(reply.map(|r| r.bot_response).as_deref(), Some("Hello!"));
    }

    #[test]
    fn test_reply_without_bot_response_is_rejected() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"answer":"Hello!"}"#).is_err());
    }

    #[test]
    fn test_error_message_reads_error_field() {
        let body = serde_json::json!({ "error": "internal" });
        assert_eq!(error_message(&body), "internal");
    }

    #[test]
    fn test_error_message_without_error_field() {
        assert_eq!(error_message(&serde_json::json!({})), "unknown error");
        assert_eq!(error_message(&serde_json::json!({ "error": null })), "unknown error");
        assert_eq!(error_message(&serde_json::json!("oops")), "unknown error");
    }

    #[test]
    fn test_error_message_keeps_non_string_error() {
        let body = serde_json::json!({ "error": { "code": 42 } });
        assert_eq!(error_message(&body), r#"{"code":42}"#);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_failure() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RagClient::new(format!("http://{addr}/rag-chat"));
        let result = client.query("hello", Language::En).await;

        assert!(matches!(result, Err(QueryError::Connect(_))));
    }
}
