//! Versioned registration response validation.

use crate::response::RegistrationResponse;
use crate::rules::{is_ob_url, is_software_id, optional_bounded, require_bounded};
use crate::version::SpecVersion;

/// The five token endpoint authentication methods a server may register.
const AUTH_METHODS: [&str; 5] = [
    "private_key_jwt",
    "client_secret_jwt",
    "client_secret_basic",
    "client_secret_post",
    "tls_client_auth",
];

/// Grant types every spec version allows.
const GRANT_TYPES: [&str; 3] = ["authorization_code", "client_credentials", "refresh_token"];

/// CIBA grant type, allowed from 3.3.
const GRANT_TYPE_CIBA: &str = "urn:openid:params:grant-type:ciba";

/// Decodes and validates a raw registration response body.
///
/// A body that fails to decode yields a single failure carrying the
/// decode error; no structural rules run in that case.
#[must_use]
pub fn validate(version: SpecVersion, body: &[u8]) -> Vec<String> {
    match serde_json::from_slice::<RegistrationResponse>(body) {
        Ok(response) => validate_response(version, &response),
        Err(e) => vec![format!("registration response: invalid JSON: {e}")],
    }
}

/// Validates a decoded registration response.
///
/// Rules are evaluated independently and aggregated; the order of the
/// returned failures is not part of the contract.
#[must_use]
pub fn validate_response(version: SpecVersion, response: &RegistrationResponse) -> Vec<String> {
    let mut failures = Vec::new();

    require_bounded(&mut failures, "client_id", response.client_id.as_deref(), 1, 36);

    match &response.redirect_uris {
        None => failures.push("redirect_uris: is required".to_string()),
        Some(uris) => {
            for uri in uris {
                if uri.is_empty() || uri.len() > 256 {
                    failures.push(format!(
                        "redirect_uris: `{uri}` length must be between 1 and 256"
                    ));
                } else if !is_ob_url(uri) {
                    failures.push(format!("redirect_uris: `{uri}` is not a valid OB URL"));
                }
            }
        }
    }

    match response.token_endpoint_auth_method.as_deref() {
        None => failures.push("token_endpoint_auth_method: is required".to_string()),
        Some(method) if !AUTH_METHODS.contains(&method) => {
            failures.push(format!(
                "token_endpoint_auth_method: `{method}` is not a supported method"
            ));
        }
        Some(_) => {}
    }

    match &response.grant_types {
        None => failures.push("grant_types: is required".to_string()),
        Some(grants) => {
            for grant in grants {
                let allowed = GRANT_TYPES.contains(&grant.as_str())
                    || (version == SpecVersion::V3_3 && grant == GRANT_TYPE_CIBA);
                if !allowed {
                    failures.push(format!("grant_types: `{grant}` is not an allowed grant type"));
                }
            }
        }
    }

    if let Some(software_id) = response.software_id.as_deref() {
        if !is_software_id(software_id) {
            failures.push("software_id: must match ^[0-9a-zA-Z]{1,22}$".to_string());
        }
    }

    require_bounded(&mut failures, "scope", response.scope.as_deref(), 1, 256);
    match response.software_statement.as_deref() {
        None => failures.push("software_statement: is required".to_string()),
        Some("") => failures.push("software_statement: must not be empty".to_string()),
        Some(_) => {}
    }

    match response.application_type.as_deref() {
        None => failures.push("application_type: is required".to_string()),
        Some("web" | "mobile") => {}
        Some(other) => failures.push(format!(
            "application_type: `{other}` must be `web` or `mobile`"
        )),
    }

    require_bounded(
        &mut failures,
        "id_token_signed_response_alg",
        response.id_token_signed_response_alg.as_deref(),
        1,
        5,
    );
    require_bounded(
        &mut failures,
        "request_object_signing_alg",
        response.request_object_signing_alg.as_deref(),
        1,
        5,
    );
    optional_bounded(
        &mut failures,
        "token_endpoint_auth_signing_alg",
        response.token_endpoint_auth_signing_alg.as_deref(),
        1,
        5,
    );
    optional_bounded(
        &mut failures,
        "tls_client_auth_subject_dn",
        response.tls_client_auth_subject_dn.as_deref(),
        1,
        128,
    );

    // Cross-field requirements tied to the registered auth method.
    match response.token_endpoint_auth_method.as_deref() {
        Some(method @ ("private_key_jwt" | "client_secret_jwt"))
            if response.token_endpoint_auth_signing_alg.is_none() =>
        {
            failures.push(format!(
                "token_endpoint_auth_signing_alg: is required when token_endpoint_auth_method is {method}"
            ));
        }
        Some("tls_client_auth") if response.tls_client_auth_subject_dn.is_none() => {
            failures.push(
                "tls_client_auth_subject_dn: is required when token_endpoint_auth_method is tls_client_auth"
                    .to_string(),
            );
        }
        _ => {}
    }

    failures
}
