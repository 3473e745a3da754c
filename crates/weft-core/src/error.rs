//! Error types for weft.
//!
//! Failures that reach the caller are transport, protocol, envelope decode and
//! input validation errors. Unresolvable references are not errors: the
//! resolver substitutes zero values for them (see [`crate::resolve`]).

use std::fmt;
use thiserror::Error;

/// The unified error type for weft operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, generic HTTP failure).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success responses from the content API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A response envelope that is not valid JSON of the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (invalid IDs, URLs, configuration).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// An error response from the content API.
///
/// Contentful error bodies look like
/// `{"sys": {"type": "Error", "id": "NotFound"}, "message": "...", "requestId": "..."}`;
/// the fields are filled in when the body parses and left empty otherwise.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error code from `sys.id` (e.g. `NotFound`, `AccessTokenInvalid`).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
    /// Request ID reported by the server.
    pub request_id: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        if let Some(ref request_id) = self.request_id {
            write!(f, " (request {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
            request_id: None,
        }
    }

    /// Attach the server-reported request ID.
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.error.as_deref() == Some("AccessTokenInvalid")
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.error.as_deref() == Some("NotFound")
    }
}

/// A response body that could not be decoded.
#[derive(Debug, Error)]
#[error("failed to decode {what}: {source}")]
pub struct DecodeError {
    /// What was being decoded (e.g. "entries page").
    pub what: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Create a new decode error.
    pub fn new(what: &'static str, source: serde_json::Error) -> Self {
        Self { what, source }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid entry or asset ID.
    #[error("invalid entry ID '{value}': {reason}")]
    EntryId { value: String, reason: String },

    /// Invalid content type ID.
    #[error("invalid content type ID '{value}': {reason}")]
    ContentTypeId { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Missing or invalid client configuration.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
