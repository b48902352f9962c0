//! OIDC discovery error types.

use thiserror::Error;

use dcr_http::TransportError;

/// Errors raised while talking to the authorization server's OIDC surface.
#[derive(Debug, Error)]
pub enum OidcError {
    /// The discovery document could not be fetched.
    #[error("failed to fetch openid configuration from {endpoint}: {source}")]
    Fetch {
        /// The well-known endpoint that was queried.
        endpoint: String,
        /// The transport failure.
        #[source]
        source: TransportError,
    },

    /// The discovery endpoint answered with a non-success status.
    #[error("openid configuration endpoint {endpoint} returned status {status}")]
    UnexpectedStatus {
        /// The well-known endpoint that was queried.
        endpoint: String,
        /// The HTTP status code received.
        status: u16,
    },

    /// The discovery document was not valid JSON for the expected shape.
    #[error("failed to decode openid configuration from {endpoint}: {source}")]
    Decode {
        /// The well-known endpoint that was queried.
        endpoint: String,
        /// The JSON decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The discovery request could not be constructed.
    #[error("invalid well-known endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Result type for OIDC operations.
pub type OidcResult<T> = Result<T, OidcError>;
