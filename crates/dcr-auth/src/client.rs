//! Credential-grant request builders, one per authentication method.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request};
use jsonwebtoken::Algorithm;
use serde::Serialize;
use url::{form_urlencoded, Url};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};
use crate::keys::SigningKey;

/// Client assertion type for JWT-based authentication (RFC 7523).
pub const CLIENT_ASSERTION_TYPE_JWT: &str =
    "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// Lifetime of a client assertion in seconds.
const ASSERTION_LIFETIME_SECS: i64 = 300;

/// An OAuth client produced by a successful registration, able to build a
/// client-credentials grant request in its method's wire format.
///
/// `None` mirrors the no-compatible-method authoriser: every operation
/// fails.
#[derive(Debug, Clone)]
pub enum Client {
    /// Authenticates with `Authorization: Basic`.
    ClientSecretBasic {
        /// Registered client id.
        client_id: String,
        /// Issued client secret.
        client_secret: String,
        /// Token endpoint to post the grant to.
        token_endpoint: String,
    },

    /// Authenticates with an HMAC-signed client assertion.
    ClientSecretJwt {
        /// Registered client id.
        client_id: String,
        /// Issued client secret, used as the HMAC key.
        client_secret: String,
        /// Token endpoint to post the grant to.
        token_endpoint: String,
    },

    /// Authenticates with an asymmetric-key client assertion.
    PrivateKeyJwt {
        /// Registered client id.
        client_id: String,
        /// The private key the registration was signed with.
        key: SigningKey,
        /// Token endpoint to post the grant to.
        token_endpoint: String,
    },

    /// Authenticates at the transport layer via mTLS.
    TlsClientAuth {
        /// Registered client id.
        client_id: String,
        /// Token endpoint to post the grant to.
        token_endpoint: String,
    },

    /// No compatible authentication method was found.
    None,
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    sub: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
    jti: String,
}

impl Client {
    /// Returns the registered client id.
    ///
    /// # Errors
    ///
    /// Fails for the `None` variant.
    pub fn id(&self) -> AuthResult<&str> {
        match self {
            Self::ClientSecretBasic { client_id, .. }
            | Self::ClientSecretJwt { client_id, .. }
            | Self::PrivateKeyJwt { client_id, .. }
            | Self::TlsClientAuth { client_id, .. } => Ok(client_id),
            Self::None => Err(AuthError::NoAuthoriser),
        }
    }

    /// Builds the `client_credentials` grant request for this client's
    /// authentication method.
    ///
    /// # Errors
    ///
    /// Fails if the token endpoint is malformed, assertion signing fails,
    /// or the variant is `None`.
    pub fn credentials_grant_request(&self) -> AuthResult<Request<Vec<u8>>> {
        match self {
            Self::ClientSecretBasic {
                client_id,
                client_secret,
                token_endpoint,
            } => {
                let credentials = STANDARD.encode(format!("{client_id}:{client_secret}"));
                let mut request = form_post(
                    token_endpoint,
                    &[("grant_type", "client_credentials"), ("scope", "openid")],
                )?;
                request.headers_mut().insert(
                    AUTHORIZATION,
                    format!("Basic {credentials}")
                        .parse()
                        .map_err(|_| AuthError::RequestBuild("invalid basic credentials".to_string()))?,
                );
                Ok(request)
            }

            Self::ClientSecretJwt {
                client_id,
                client_secret,
                token_endpoint,
            } => {
                let key = SigningKey::from_secret(Algorithm::HS256, client_secret.as_bytes())?;
                let assertion = sign_assertion(&key, client_id, token_endpoint)?;
                form_post(
                    token_endpoint,
                    &[
                        ("grant_type", "client_credentials"),
                        ("scope", "openid"),
                        ("client_assertion_type", CLIENT_ASSERTION_TYPE_JWT),
                        ("client_assertion", &assertion),
                    ],
                )
            }

            Self::PrivateKeyJwt {
                client_id,
                key,
                token_endpoint,
            } => {
                let assertion = sign_assertion(key, client_id, token_endpoint)?;
                form_post(
                    token_endpoint,
                    &[
                        ("grant_type", "client_credentials"),
                        ("scope", "openid"),
                        ("client_assertion_type", CLIENT_ASSERTION_TYPE_JWT),
                        ("client_assertion", &assertion),
                    ],
                )
            }

            Self::TlsClientAuth {
                client_id,
                token_endpoint,
            } => form_post(
                token_endpoint,
                &[
                    ("client_id", client_id),
                    ("scope", "openid"),
                    ("grant_type", "client_credentials"),
                ],
            ),

            Self::None => Err(AuthError::NoAuthoriser),
        }
    }
}

/// Signs the RFC 7523 client assertion: iss/sub are the client id, aud is
/// the token endpoint.
fn sign_assertion(key: &SigningKey, client_id: &str, token_endpoint: &str) -> AuthResult<String> {
    let iat = Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: client_id,
        sub: client_id,
        aud: token_endpoint,
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
        jti: Uuid::new_v4().to_string(),
    };

    key.sign(None, &claims)
}

/// Builds a form-encoded POST to the token endpoint.
fn form_post(token_endpoint: &str, pairs: &[(&str, &str)]) -> AuthResult<Request<Vec<u8>>> {
    let endpoint = Url::parse(token_endpoint).map_err(|e| AuthError::InvalidTokenEndpoint {
        endpoint: token_endpoint.to_string(),
        reason: e.to_string(),
    })?;

    let mut form = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        form.append_pair(name, value);
    }
    let body = form.finish().into_bytes();

    Request::builder()
        .method(Method::POST)
        .uri(endpoint.as_str())
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(ACCEPT, "application/json")
        .body(body)
        .map_err(|e| AuthError::RequestBuild(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    const TOKEN_ENDPOINT: &str = "https://auth.example.com/token";

    fn form_fields(request: &Request<Vec<u8>>) -> HashMap<String, String> {
        form_urlencoded::parse(request.body())
            .into_owned()
            .collect()
    }

    fn decode_assertion_payload(assertion: &str) -> serde_json::Value {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let payload = assertion.split('.').nth(1).unwrap();
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn basic_client_sends_basic_authorization() {
        let client = Client::ClientSecretBasic {
            client_id: "client-1".to_string(),
            client_secret: "s3cret".to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
        };

        let request = client.credentials_grant_request().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri().to_string(), TOKEN_ENDPOINT);

        let authorization = request.headers().get(AUTHORIZATION).unwrap();
        let encoded = authorization
            .to_str()
            .unwrap()
            .strip_prefix("Basic ")
            .unwrap()
            .to_string();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, "client-1:s3cret");

        let fields = form_fields(&request);
        assert_eq!(fields["grant_type"], "client_credentials");
        assert_eq!(fields["scope"], "openid");
        assert!(!fields.contains_key("client_id"));
    }

    #[test]
    fn secret_jwt_client_sends_hmac_assertion() {
        let client = Client::ClientSecretJwt {
            client_id: "client-2".to_string(),
            client_secret: "s3cret".to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
        };

        let request = client.credentials_grant_request().unwrap();
        let fields = form_fields(&request);
        assert_eq!(fields["client_assertion_type"], CLIENT_ASSERTION_TYPE_JWT);

        let header = jsonwebtoken::decode_header(&fields["client_assertion"]).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);

        let payload = decode_assertion_payload(&fields["client_assertion"]);
        assert_eq!(payload["iss"], "client-2");
        assert_eq!(payload["sub"], "client-2");
        assert_eq!(payload["aud"], TOKEN_ENDPOINT);
        assert!(payload["jti"].as_str().unwrap().len() >= 32);
    }

    #[test]
    fn tls_client_sends_plain_form_body() {
        let client = Client::TlsClientAuth {
            client_id: "client-3".to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
        };

        let request = client.credentials_grant_request().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());

        let fields = form_fields(&request);
        assert_eq!(fields["client_id"], "client-3");
        assert_eq!(fields["grant_type"], "client_credentials");
        assert_eq!(fields["scope"], "openid");
    }

    #[test]
    fn malformed_token_endpoint_is_wrapped() {
        let client = Client::TlsClientAuth {
            client_id: "client-4".to_string(),
            token_endpoint: "not a url".to_string(),
        };

        let error = client.credentials_grant_request().unwrap_err();
        assert!(matches!(error, AuthError::InvalidTokenEndpoint { .. }));
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn none_client_fails_every_operation() {
        let client = Client::None;
        assert!(client.id().is_err());
        assert!(client.credentials_grant_request().is_err());
    }
}
