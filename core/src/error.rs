//! Error types for the clients API.
//!
//! # Design
//! `BadRequest` gets its own variant because callers render server-side
//! validation themselves and the facade leaves it alone. `NotFound` is split
//! out for the same reason as any REST client: "does not exist" is a normal
//! answer. Every status error keeps the raw body and, when the body is a JSON
//! object with a `message` field, that message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 400. Surfaced to the caller unmodified.
    #[error("bad request: {body}")]
    BadRequest { message: Option<String>, body: String },

    /// HTTP 404.
    #[error("resource not found")]
    NotFound { message: Option<String>, body: String },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// No response was received.
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A record without `id` cannot be addressed by URL.
    #[error("client record has no id")]
    MissingId,
}

impl ApiError {
    /// Map a non-2xx status and its body to the matching variant.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = extract_message(&body);
        match status {
            400 => ApiError::BadRequest { message, body },
            404 => ApiError::NotFound { message, body },
            _ => ApiError::Http {
                status,
                message,
                body,
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        matches!(self, ApiError::BadRequest { .. })
    }

    /// The `message` field the server put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show an end user: the server's message, else our own.
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
