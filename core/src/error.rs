//! Error types for the users API client.
//!
//! # Design
//! One taxonomy covers every way a call can fail, from URL construction to
//! decoding. `Unauthorized` gets a dedicated variant because callers treat
//! a 401 differently from "the server returned something unexpected." All
//! other non-2xx responses land in `UnexpectedStatusCode` with the raw
//! status and body for debugging.

use thiserror::Error;

/// Errors returned by `RequestMapper` and `ApiClient`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Scheme, host, and path do not compose into a valid absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request was sent but no HTTP response came back.
    #[error("no response: {0}")]
    NoResponse(String),

    /// The server returned 401.
    #[error("unauthorized")]
    Unauthorized,

    /// A 2xx body could not be decoded into the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The server returned a status that is neither 2xx nor 401.
    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatusCode { status: u16, body: String },

    /// The endpoint body could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Transport failure that fits no other category.
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Result of a single request: the decoded value or a `RequestError`.
pub type Outcome<T> = Result<T, RequestError>;

/// Errors a `Transport` reports back to the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be assembled (e.g. an invalid header), so
    /// nothing was sent.
    #[error("invalid request: {0}")]
    Request(String),

    /// No HTTP response was received (connect, DNS, TLS, timeout).
    #[error("no response: {0}")]
    NoResponse(String),

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Request(msg) => RequestError::Unknown(msg),
            TransportError::NoResponse(msg) => RequestError::NoResponse(msg),
            TransportError::Body(msg) => RequestError::Unknown(msg),
        }
    }
}
