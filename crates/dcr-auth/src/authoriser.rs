//! Authoriser selection and behavior.
//!
//! The authoriser is picked once per run from the authentication methods
//! the server advertises, against a fixed priority order. Selection is a
//! pure function over the capability list; the chosen variant then owns a
//! [`Signer`] and a token endpoint and is immutable for the rest of the
//! run.

use serde::Deserialize;

use dcr_oidc::OpenIdConfiguration;

use crate::certificate::TransportIdentity;
use crate::client::Client;
use crate::error::{AuthError, AuthResult};
use crate::keys::SigningKey;
use crate::response_types::resolve_response_types;
use crate::signer::{Signer, SignerConfig};

/// Wire name of the private_key_jwt method.
pub const METHOD_PRIVATE_KEY_JWT: &str = "private_key_jwt";
/// Wire name of the client_secret_jwt method.
pub const METHOD_CLIENT_SECRET_JWT: &str = "client_secret_jwt";
/// Wire name of the tls_client_auth method.
pub const METHOD_TLS_CLIENT_AUTH: &str = "tls_client_auth";
/// Wire name of the client_secret_basic method.
pub const METHOD_CLIENT_SECRET_BASIC: &str = "client_secret_basic";

/// The client-authentication methods this suite can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Asymmetric-key JWT assertion.
    PrivateKeyJwt,
    /// Shared-secret JWT assertion.
    ClientSecretJwt,
    /// Transport-layer mTLS authentication.
    TlsClientAuth,
    /// HTTP Basic authentication.
    ClientSecretBasic,
}

impl AuthMethod {
    /// Total priority order used for selection, strongest first.
    pub const PRIORITY: [Self; 4] = [
        Self::PrivateKeyJwt,
        Self::ClientSecretJwt,
        Self::TlsClientAuth,
        Self::ClientSecretBasic,
    ];

    /// The method's wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrivateKeyJwt => METHOD_PRIVATE_KEY_JWT,
            Self::ClientSecretJwt => METHOD_CLIENT_SECRET_JWT,
            Self::TlsClientAuth => METHOD_TLS_CLIENT_AUTH,
            Self::ClientSecretBasic => METHOD_CLIENT_SECRET_BASIC,
        }
    }
}

/// Picks the highest-priority method present in the advertised list.
#[must_use]
pub fn select_auth_method(advertised: &[String]) -> Option<AuthMethod> {
    AuthMethod::PRIORITY
        .into_iter()
        .find(|method| advertised.iter().any(|a| a == method.name()))
}

/// Everything needed to instantiate an authoriser for one run.
#[derive(Debug, Clone)]
pub struct AuthoriserConfig {
    /// The server's discovery document.
    pub openid: OpenIdConfiguration,

    /// Software statement assertion to register.
    pub ssa: String,

    /// Key id of the registration signing key.
    pub kid: String,

    /// The requesting software's id.
    pub software_id: String,

    /// Redirect URIs to register.
    pub redirect_uris: Vec<String>,

    /// Key the registration claims are signed with.
    pub signing_key: SigningKey,

    /// Lifetime of the registration claims.
    pub expiry: chrono::Duration,

    /// Transport identity, consulted only for tls_client_auth.
    pub transport: TransportIdentity,
}

/// State shared by every concrete authoriser variant.
#[derive(Debug, Clone)]
pub struct Strategy {
    signer: Signer,
    token_endpoint: String,
    key: SigningKey,
}

/// The selected client-authentication strategy.
///
/// `None` is the explicit no-compatible-method sentinel: both operations
/// fail unconditionally.
#[derive(Debug, Clone)]
pub enum Authoriser {
    /// private_key_jwt strategy.
    PrivateKeyJwt(Strategy),
    /// client_secret_jwt strategy.
    ClientSecretJwt(Strategy),
    /// tls_client_auth strategy.
    TlsClientAuth(Strategy),
    /// client_secret_basic strategy.
    ClientSecretBasic(Strategy),
    /// No advertised method is supported.
    None,
}

/// Decoded subset of the registration response an authoriser consumes.
#[derive(Debug, Deserialize)]
struct RegistrationCredentials {
    client_id: String,
    client_secret: Option<String>,
}

impl Authoriser {
    /// Selects and instantiates the authoriser for the server's
    /// capabilities.
    ///
    /// # Errors
    ///
    /// Returns an error if the advertised response types resolve to an
    /// empty set. An unsupported method list is not an error; it yields
    /// the `None` variant.
    pub fn select(config: AuthoriserConfig) -> AuthResult<Self> {
        let advertised = config
            .openid
            .token_endpoint_auth_methods_supported
            .as_deref()
            .unwrap_or(&[]);

        let Some(method) = select_auth_method(advertised) else {
            tracing::warn!(
                methods = ?advertised,
                "no supported token endpoint auth method advertised"
            );
            return Ok(Self::None);
        };

        tracing::info!(method = method.name(), "selected client authentication method");

        let response_types =
            resolve_response_types(config.openid.response_types_supported.as_deref())?;

        let signer_config = SignerConfig {
            issuer: config.openid.issuer.clone(),
            kid: config.kid,
            software_id: config.software_id,
            ssa: config.ssa,
            redirect_uris: config.redirect_uris,
            response_types,
            expiry: config.expiry,
        };

        let transport = (method == AuthMethod::TlsClientAuth).then(|| config.transport.clone());
        let signer = Signer::new(
            signer_config,
            config.signing_key.clone(),
            method.name(),
            transport,
        );

        let strategy = Strategy {
            signer,
            token_endpoint: config.openid.token_endpoint.clone(),
            key: config.signing_key,
        };

        Ok(match method {
            AuthMethod::PrivateKeyJwt => Self::PrivateKeyJwt(strategy),
            AuthMethod::ClientSecretJwt => Self::ClientSecretJwt(strategy),
            AuthMethod::TlsClientAuth => Self::TlsClientAuth(strategy),
            AuthMethod::ClientSecretBasic => Self::ClientSecretBasic(strategy),
        })
    }

    /// The wire name of the selected method, if any.
    #[must_use]
    pub const fn method_name(&self) -> Option<&'static str> {
        match self {
            Self::PrivateKeyJwt(_) => Some(METHOD_PRIVATE_KEY_JWT),
            Self::ClientSecretJwt(_) => Some(METHOD_CLIENT_SECRET_JWT),
            Self::TlsClientAuth(_) => Some(METHOD_TLS_CLIENT_AUTH),
            Self::ClientSecretBasic(_) => Some(METHOD_CLIENT_SECRET_BASIC),
            Self::None => None,
        }
    }

    /// Builds and signs the registration claim set.
    ///
    /// # Errors
    ///
    /// Fails with a signing error, "transport cert not available", or
    /// unconditionally for the `None` variant.
    pub fn claims(&self) -> AuthResult<String> {
        match self {
            Self::PrivateKeyJwt(s)
            | Self::ClientSecretJwt(s)
            | Self::TlsClientAuth(s)
            | Self::ClientSecretBasic(s) => s.signer.claims(),
            Self::None => Err(AuthError::NoAuthoriser),
        }
    }

    /// Decodes a registration response and constructs the matching
    /// [`Client`].
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, on a missing client secret for the
    /// secret-based methods, or unconditionally for the `None` variant.
    pub fn client(&self, response: &[u8]) -> AuthResult<Client> {
        // The sentinel fails before the response is even looked at.
        if matches!(self, Self::None) {
            return Err(AuthError::NoAuthoriser);
        }

        let credentials: RegistrationCredentials =
            serde_json::from_slice(response).map_err(AuthError::ResponseDecode)?;

        match self {
            Self::PrivateKeyJwt(s) => Ok(Client::PrivateKeyJwt {
                client_id: credentials.client_id,
                key: s.key.clone(),
                token_endpoint: s.token_endpoint.clone(),
            }),
            Self::ClientSecretJwt(s) => Ok(Client::ClientSecretJwt {
                client_id: credentials.client_id,
                client_secret: credentials
                    .client_secret
                    .ok_or(AuthError::MissingClientSecret)?,
                token_endpoint: s.token_endpoint.clone(),
            }),
            Self::TlsClientAuth(s) => Ok(Client::TlsClientAuth {
                client_id: credentials.client_id,
                token_endpoint: s.token_endpoint.clone(),
            }),
            Self::ClientSecretBasic(s) => Ok(Client::ClientSecretBasic {
                client_id: credentials.client_id,
                client_secret: credentials
                    .client_secret
                    .ok_or(AuthError::MissingClientSecret)?,
                token_endpoint: s.token_endpoint.clone(),
            }),
            Self::None => Err(AuthError::NoAuthoriser),
        }
    }
}
