//! Strategy-layer error types.

use thiserror::Error;

/// Errors raised by the authentication strategy layer.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The claims could not be signed with the configured key.
    #[error("failed to sign claims: {0}")]
    Signing(String),

    /// A key was supplied for an algorithm family it cannot serve.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    /// tls_client_auth was selected but no transport certificate or
    /// subject DN override is configured.
    #[error("transport cert not available")]
    TransportCertNotAvailable,

    /// The transport certificate could not be parsed.
    #[error("failed to parse transport certificate: {0}")]
    CertificateParse(String),

    /// No advertised authentication method matched the supported set.
    #[error("no authoriser was found for openid config")]
    NoAuthoriser,

    /// None of the advertised response types are usable.
    #[error("supported response types must contain `code` and/or `code id_token`")]
    UnsupportedResponseTypes,

    /// The registration response was not valid JSON.
    #[error("failed to decode registration response: {0}")]
    ResponseDecode(#[source] serde_json::Error),

    /// The selected method needs a client secret the server did not issue.
    #[error("registration response did not include a client_secret")]
    MissingClientSecret,

    /// The token endpoint URL cannot be used to build a request.
    #[error("invalid token endpoint {endpoint}: {reason}")]
    InvalidTokenEndpoint {
        /// The offending endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The grant request could not be assembled.
    #[error("failed to build request: {0}")]
    RequestBuild(String),
}

/// Result type for strategy-layer operations.
pub type AuthResult<T> = Result<T, AuthError>;
