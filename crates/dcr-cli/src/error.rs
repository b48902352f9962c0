//! CLI error types.

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("transport error: {0}")]
    Transport(#[from] dcr_http::TransportError),

    /// Discovery error.
    #[error("discovery error: {0}")]
    Discovery(#[from] dcr_oidc::OidcError),

    /// Authoriser error.
    #[error("authoriser error: {0}")]
    Auth(#[from] dcr_auth::AuthError),

    /// Engine error.
    #[error(transparent)]
    Engine(#[from] dcr_core::CoreError),
}
