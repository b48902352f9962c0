//! Resolution of the `response_types` registration claim.

use crate::error::{AuthError, AuthResult};

/// Response types a registration may request.
const ALLOWED_RESPONSE_TYPES: [&str; 2] = ["code", "code id_token"];

/// Filters the server-advertised response types down to the allowed set.
///
/// `None` input means the server did not advertise response types; the
/// claim is then left to the caller's defaulting and `Ok(None)` is
/// returned. Order and duplicates of the input are preserved.
///
/// # Errors
///
/// Returns an error if the advertised list contains none of the allowed
/// values.
pub fn resolve_response_types(advertised: Option<&[String]>) -> AuthResult<Option<Vec<String>>> {
    let Some(advertised) = advertised else {
        return Ok(None);
    };

    let resolved: Vec<String> = advertised
        .iter()
        .filter(|t| ALLOWED_RESPONSE_TYPES.contains(&t.as_str()))
        .cloned()
        .collect();

    if resolved.is_empty() {
        return Err(AuthError::UnsupportedResponseTypes);
    }

    Ok(Some(resolved))
}
