//! Concrete DCR steps.
//!
//! Each step is a small struct constructed with the context keys it reads
//! and writes plus the collaborators it needs. Transport goes through the
//! [`HttpDispatcher`] trait so every step is testable against in-memory
//! stubs.
//!
//! [`HttpDispatcher`]: dcr_http::HttpDispatcher

mod assert_status;
mod claims;
mod delete;
mod grant;
mod register;
mod retrieve;
mod update;
mod validate_response;

pub use assert_status::AssertStatusCode;
pub use claims::GenerateRegistrationClaims;
pub use delete::ClientDelete;
pub use grant::PostCredentialsGrant;
pub use register::PostClientRegister;
pub use retrieve::ClientRetrieve;
pub use update::ClientUpdate;
pub use validate_response::ValidateRegistrationResponse;

/// Joins the registration endpoint and a client id into the per-client
/// resource URL.
fn client_url(registration_endpoint: &str, client_id: &str) -> String {
    format!(
        "{}/{client_id}",
        registration_endpoint.trim_end_matches('/')
    )
}

/// Builds a bearer-authenticated request against a per-client resource.
fn bearer_request(
    method: http::Method,
    url: &str,
    access_token: &str,
) -> Result<http::Request<Vec<u8>>, String> {
    http::Request::builder()
        .method(method)
        .uri(url)
        .header(http::header::AUTHORIZATION, format!("Bearer {access_token}"))
        .header(http::header::ACCEPT, "application/json")
        .body(Vec::new())
        .map_err(|e| format!("unable to build request: {e}"))
}

#[cfg(test)]
mod tests {
    use super::client_url;

    #[test]
    fn client_url_handles_trailing_slash() {
        assert_eq!(
            client_url("https://auth.example.com/register/", "c-1"),
            "https://auth.example.com/register/c-1"
        );
        assert_eq!(
            client_url("https://auth.example.com/register", "c-1"),
            "https://auth.example.com/register/c-1"
        );
    }
}
