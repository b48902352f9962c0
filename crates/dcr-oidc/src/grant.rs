//! Token endpoint response for the client-credentials grant.

use serde::{Deserialize, Serialize};

/// Access token obtained from a client-credentials grant.
///
/// Lives for the length of the scenario run that obtained it; later steps
/// read it back out of the scenario context to authorize retrieval and
/// deletion calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantToken {
    /// The access token issued by the server.
    pub access_token: String,

    /// Token type, normally `Bearer`.
    pub token_type: String,

    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_token_endpoint_response() {
        let json = r#"{
            "access_token": "2YotnFZFEjr1zCsicMWpAA",
            "token_type": "Bearer",
            "expires_in": 3600
        }"#;

        let token: GrantToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "2YotnFZFEjr1zCsicMWpAA");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn missing_access_token_fails_decode() {
        let json = r#"{"token_type": "Bearer", "expires_in": 60}"#;
        assert!(serde_json::from_str::<GrantToken>(json).is_err());
    }
}
