//! Transport error types.

use thiserror::Error;

/// Errors raised by the HTTP transport layer.
///
/// Request failures always carry the attempted endpoint so a failed step
/// result points at the server that misbehaved.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request to {endpoint} failed: {source}")]
    Request {
        /// The endpoint the request was sent to.
        endpoint: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {endpoint}: {source}")]
    Body {
        /// The endpoint the response came from.
        endpoint: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be constructed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP client could not be built from its configuration.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
