//! Provider call errors.

use crate::retry::StatusCode;
use thiserror::Error;

/// Error returned by a single `generateContent` call.
///
/// Only [`GeminiError::Http`] carries a status; the retry loop uses it to
/// tell throttling apart from fatal failures.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Non-2xx HTTP response.
    #[error("Gemini API error {status}: {body}")]
    Http { status: u16, body: String },

    /// Network-level failure (connect, TLS, timeout).
    #[error("network error calling Gemini: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("unexpected Gemini response: {0}")]
    InvalidResponse(String),

    /// Response decoded but carried no text.
    #[error("Gemini returned no text{}", .reason.as_deref().map(|r| format!(" ({})", r)).unwrap_or_default())]
    EmptyText { reason: Option<String> },

    /// Base URL or model name does not form a valid endpoint.
    #[error("invalid Gemini endpoint: {0}")]
    InvalidEndpoint(String),
}

impl GeminiError {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }
}

impl StatusCode for GeminiError {
    fn status_code(&self) -> Option<u16> {
        match self {
            GeminiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
