//! Discovery document retrieval.

use http::header::ACCEPT;
use http::{Method, Request};

use dcr_http::HttpDispatcher;

use crate::config::OpenIdConfiguration;
use crate::error::{OidcError, OidcResult};

/// Fetches and decodes the `.well-known/openid-configuration` document.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body does not decode.
pub fn fetch_openid_configuration(
    dispatcher: &dyn HttpDispatcher,
    well_known_endpoint: &str,
) -> OidcResult<OpenIdConfiguration> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(well_known_endpoint)
        .header(ACCEPT, "application/json")
        .body(Vec::new())
        .map_err(|e| OidcError::InvalidEndpoint(e.to_string()))?;

    let response = dispatcher
        .dispatch(request)
        .map_err(|source| OidcError::Fetch {
            endpoint: well_known_endpoint.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(OidcError::UnexpectedStatus {
            endpoint: well_known_endpoint.to_string(),
            status: response.status().as_u16(),
        });
    }

    let config: OpenIdConfiguration =
        serde_json::from_slice(response.body()).map_err(|source| OidcError::Decode {
            endpoint: well_known_endpoint.to_string(),
            source,
        })?;

    tracing::info!(issuer = %config.issuer, "discovered openid configuration");
    Ok(config)
}
