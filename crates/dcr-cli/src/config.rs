//! Suite configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use dcr_schema::SpecVersion;

use crate::error::{CliError, CliResult};

fn default_signing_algorithm() -> String {
    "PS256".to_string()
}

const fn default_token_expiry_seconds() -> i64 {
    3600
}

const fn default_request_timeout_seconds() -> u64 {
    30
}

/// Suite configuration, loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteSettings {
    /// The server's `.well-known/openid-configuration` URL.
    pub wellknown_endpoint: String,

    /// Software statement assertion to register, in compact JWS form.
    pub ssa: String,

    /// Key id of the registration signing key.
    pub kid: String,

    /// The requesting software's id.
    pub software_id: String,

    /// Redirect URIs to register.
    pub redirect_uris: Vec<String>,

    /// Path to the PEM-encoded registration signing key.
    pub private_key_path: PathBuf,

    /// JWS algorithm the signing key is used with.
    #[serde(default = "default_signing_algorithm")]
    pub signing_algorithm: String,

    /// Path to the PEM-encoded mTLS transport certificate.
    pub transport_cert_path: Option<PathBuf>,

    /// Path to the PEM-encoded mTLS transport key.
    pub transport_key_path: Option<PathBuf>,

    /// Paths to additional PEM-encoded root CAs to trust.
    #[serde(default)]
    pub root_ca_paths: Vec<PathBuf>,

    /// Overrides the subject DN sent for tls_client_auth registrations.
    pub tls_client_auth_subject_dn: Option<String>,

    /// Lifetime of the registration claims in seconds.
    #[serde(default = "default_token_expiry_seconds")]
    pub token_expiry_seconds: i64,

    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// Specification version to validate against.
    pub spec_version: SpecVersion,

    /// Disables server certificate verification.
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

impl SuiteSettings {
    /// Loads and validates configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if a required
    /// field is empty.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> CliResult<()> {
        if self.wellknown_endpoint.is_empty() {
            return Err(CliError::Config("wellknown_endpoint is required".to_string()));
        }
        if self.ssa.is_empty() {
            return Err(CliError::Config("ssa is required".to_string()));
        }
        if self.kid.is_empty() {
            return Err(CliError::Config("kid is required".to_string()));
        }
        if self.software_id.is_empty() {
            return Err(CliError::Config("software_id is required".to_string()));
        }
        if self.redirect_uris.is_empty() {
            return Err(CliError::Config(
                "at least one redirect URI is required".to_string(),
            ));
        }
        if self.transport_cert_path.is_some() != self.transport_key_path.is_some() {
            return Err(CliError::Config(
                "transport_cert_path and transport_key_path must be set together".to_string(),
            ));
        }
        Ok(())
    }
}
