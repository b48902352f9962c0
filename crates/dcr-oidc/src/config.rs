//! The subset of `OpenID` Provider Metadata this suite consumes.

use serde::{Deserialize, Serialize};

/// `OpenID` Connect discovery document.
///
/// Only the fields the conformance flows read are modelled; everything
/// else in the server's document is ignored on decode. Optional fields
/// stay `Option` so "not advertised" is distinguishable from empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenIdConfiguration {
    /// URL the server uses as its issuer identifier.
    pub issuer: String,

    /// URL of the token endpoint.
    pub token_endpoint: String,

    /// URL of the dynamic client registration endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_endpoint: Option<String>,

    /// Client authentication methods supported by the token endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_methods_supported: Option<Vec<String>>,

    /// Signing algorithms accepted for request objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_object_signing_alg_values_supported: Option<Vec<String>>,

    /// Response types the server supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_types_supported: Option<Vec<String>>,
}
