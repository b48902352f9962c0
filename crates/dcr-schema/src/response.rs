//! Decoded registration response.

use serde::Deserialize;

/// A DCR registration response with every field optional, so validation
/// can distinguish "absent" from "present but empty".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationResponse {
    /// Issued client identifier.
    pub client_id: Option<String>,

    /// Issued client secret, for secret-based authentication methods.
    pub client_secret: Option<String>,

    /// Registered redirect URIs.
    pub redirect_uris: Option<Vec<String>>,

    /// Registered token endpoint authentication method.
    pub token_endpoint_auth_method: Option<String>,

    /// Registered grant types.
    pub grant_types: Option<Vec<String>>,

    /// Identifier of the registering software.
    pub software_id: Option<String>,

    /// Granted scope.
    pub scope: Option<String>,

    /// The software statement the registration was made with.
    pub software_statement: Option<String>,

    /// Application type, `web` or `mobile`.
    pub application_type: Option<String>,

    /// ID token signing algorithm.
    pub id_token_signed_response_alg: Option<String>,

    /// Request object signing algorithm.
    pub request_object_signing_alg: Option<String>,

    /// Token endpoint authentication signing algorithm.
    pub token_endpoint_auth_signing_alg: Option<String>,

    /// Subject DN registered for tls_client_auth.
    pub tls_client_auth_subject_dn: Option<String>,
}
