//! Signed JWT claim set for the registration request.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::certificate::TransportIdentity;
use crate::error::AuthResult;
use crate::keys::{algorithm_name, SigningKey};

/// Grant types every registration requests.
const GRANT_TYPES: [&str; 2] = ["authorization_code", "client_credentials"];

/// Scope every registration requests.
const SCOPE: &str = "accounts openid";

/// Immutable signer configuration.
#[derive(Debug, Clone)]
pub struct SignerConfig {
    /// Audience of the claims: the authorization server's issuer.
    pub issuer: String,

    /// Key id of the signing key, placed in the JWS header and claims.
    pub kid: String,

    /// The requesting software's id; becomes the `iss` claim.
    pub software_id: String,

    /// The software statement assertion issued by the trust framework.
    pub ssa: String,

    /// Redirect URIs to register.
    pub redirect_uris: Vec<String>,

    /// Response types already resolved against the allowed set; `None`
    /// omits the claim entirely.
    pub response_types: Option<Vec<String>>,

    /// Claim lifetime added to `iat` to produce `exp`.
    pub expiry: chrono::Duration,
}

/// Builds and signs the registration claim set for one authentication
/// method.
#[derive(Debug, Clone)]
pub struct Signer {
    config: SignerConfig,
    key: SigningKey,
    auth_method: &'static str,
    /// Present only when the method is tls_client_auth.
    transport: Option<TransportIdentity>,
}

#[derive(Serialize)]
struct RegistrationClaims<'a> {
    aud: &'a str,
    iat: i64,
    exp: i64,
    jti: String,
    iss: &'a str,
    kid: &'a str,
    token_endpoint_auth_signing_alg: &'static str,
    grant_types: [&'static str; 2],
    subject_type: &'static str,
    application_type: &'static str,
    redirect_uris: &'a [String],
    token_endpoint_auth_method: &'static str,
    software_statement: &'a str,
    scope: &'static str,
    request_object_signing_alg: &'static str,
    id_token_signed_response_alg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_types: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tls_client_auth_subject_dn: Option<String>,
}

impl Signer {
    /// Creates a signer for the given method. `transport` must be `Some`
    /// exactly when the method is tls_client_auth.
    #[must_use]
    pub fn new(
        config: SignerConfig,
        key: SigningKey,
        auth_method: &'static str,
        transport: Option<TransportIdentity>,
    ) -> Self {
        Self {
            config,
            key,
            auth_method,
            transport,
        }
    }

    /// Builds and signs the registration claim set.
    ///
    /// # Errors
    ///
    /// Returns an error if the key rejects signing, or with "transport
    /// cert not available" when tls_client_auth has no certificate and no
    /// DN override.
    pub fn claims(&self) -> AuthResult<String> {
        let subject_dn = match &self.transport {
            Some(identity) => Some(identity.subject_dn()?),
            None => None,
        };

        let iat = Utc::now().timestamp();
        let alg = algorithm_name(self.key.algorithm());

        let claims = RegistrationClaims {
            aud: &self.config.issuer,
            iat,
            exp: iat + self.config.expiry.num_seconds(),
            jti: Uuid::new_v4().to_string(),
            iss: &self.config.software_id,
            kid: &self.config.kid,
            token_endpoint_auth_signing_alg: alg,
            grant_types: GRANT_TYPES,
            subject_type: "public",
            application_type: "web",
            redirect_uris: &self.config.redirect_uris,
            token_endpoint_auth_method: self.auth_method,
            software_statement: &self.config.ssa,
            scope: SCOPE,
            request_object_signing_alg: "none",
            id_token_signed_response_alg: alg,
            response_types: self.config.response_types.as_deref(),
            tls_client_auth_subject_dn: subject_dn,
        };

        self.key.sign(Some(&self.config.kid), &claims)
    }
}
