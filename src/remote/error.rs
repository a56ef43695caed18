use thiserror::Error;

/// Failure of a single query to the RAG proxy.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The server answered with a non-2xx status and an error body.
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// The request never reached the server.
    #[error("Failed to fetch: {0}")]
    Connect(String),

    /// The server answered but the body could not be decoded.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl QueryError {
    /// Returns `true` for transport-level failures, which are shown to the
    /// user as a generic "could not connect" message.
    pub const fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::InvalidResponse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = QueryError::Server {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 500 - internal");
        assert!(!err.is_connection_failure());
    }

    #[test]
    fn test_transport_errors_are_connection_failures() {
        assert!(QueryError::Connect("refused".to_string()).is_connection_failure());
        assert!(QueryError::InvalidResponse("eof".to_string()).is_connection_failure());
    }
}
