//! Per-scenario shared state.
//!
//! Steps in a scenario never reference each other; everything one step
//! produces for another goes through the [`Context`] under a string key.
//! Each value kind lives in its own typed table, so a string and a client
//! stored under the same key never collide. Reads of absent keys are
//! errors the reading step reports as its failure reason.

use std::collections::HashMap;

use http::Response;
use thiserror::Error;

use dcr_auth::Client;
use dcr_oidc::{GrantToken, OpenIdConfiguration};

/// Result alias for context reads.
pub type ContextResult<T> = Result<T, ContextError>;

/// A read of a key no step has written.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("key `{key}` not found in context")]
pub struct ContextError {
    key: String,
}

impl ContextError {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

/// Typed key-value store scoped to one scenario run.
#[derive(Debug, Default)]
pub struct Context {
    strings: HashMap<String, String>,
    ints: HashMap<String, i64>,
    responses: HashMap<String, Response<Vec<u8>>>,
    clients: HashMap<String, Client>,
    grant_tokens: HashMap<String, GrantToken>,
    openid_configs: HashMap<String, OpenIdConfiguration>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a string value, replacing any previous value for the key.
    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.strings.insert(key.to_string(), value.into());
    }

    /// Reads a string value.
    ///
    /// # Errors
    ///
    /// Fails if no string has been stored under the key.
    pub fn get_string(&self, key: &str) -> ContextResult<&str> {
        self.strings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ContextError::new(key))
    }

    /// Stores an integer value, replacing any previous value for the key.
    pub fn set_int(&mut self, key: &str, value: i64) {
        self.ints.insert(key.to_string(), value);
    }

    /// Reads an integer value.
    ///
    /// # Errors
    ///
    /// Fails if no integer has been stored under the key.
    pub fn get_int(&self, key: &str) -> ContextResult<i64> {
        self.ints
            .get(key)
            .copied()
            .ok_or_else(|| ContextError::new(key))
    }

    /// Stores an HTTP response snapshot, replacing any previous value for
    /// the key.
    pub fn set_response(&mut self, key: &str, response: Response<Vec<u8>>) {
        self.responses.insert(key.to_string(), response);
    }

    /// Reads an HTTP response snapshot.
    ///
    /// # Errors
    ///
    /// Fails if no response has been stored under the key.
    pub fn get_response(&self, key: &str) -> ContextResult<&Response<Vec<u8>>> {
        self.responses.get(key).ok_or_else(|| ContextError::new(key))
    }

    /// Stores a registered client, replacing any previous value for the
    /// key.
    pub fn set_client(&mut self, key: &str, client: Client) {
        self.clients.insert(key.to_string(), client);
    }

    /// Reads a registered client.
    ///
    /// # Errors
    ///
    /// Fails if no client has been stored under the key.
    pub fn get_client(&self, key: &str) -> ContextResult<&Client> {
        self.clients.get(key).ok_or_else(|| ContextError::new(key))
    }

    /// Stores a grant token, replacing any previous value for the key.
    pub fn set_grant_token(&mut self, key: &str, token: GrantToken) {
        self.grant_tokens.insert(key.to_string(), token);
    }

    /// Reads a grant token.
    ///
    /// # Errors
    ///
    /// Fails if no grant token has been stored under the key.
    pub fn get_grant_token(&self, key: &str) -> ContextResult<&GrantToken> {
        self.grant_tokens
            .get(key)
            .ok_or_else(|| ContextError::new(key))
    }

    /// Stores a discovery document, replacing any previous value for the
    /// key.
    pub fn set_openid_config(&mut self, key: &str, config: OpenIdConfiguration) {
        self.openid_configs.insert(key.to_string(), config);
    }

    /// Reads a discovery document.
    ///
    /// # Errors
    ///
    /// Fails if no discovery document has been stored under the key.
    pub fn get_openid_config(&self, key: &str) -> ContextResult<&OpenIdConfiguration> {
        self.openid_configs
            .get(key)
            .ok_or_else(|| ContextError::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reports_not_found() {
        let ctx = Context::new();
        let error = ctx.get_string("registration claims").unwrap_err();
        assert_eq!(
            error.to_string(),
            "key `registration claims` not found in context"
        );
    }

    #[test]
    fn string_round_trip() {
        let mut ctx = Context::new();
        ctx.set_string("claims", "a.b.c");
        assert_eq!(ctx.get_string("claims").unwrap(), "a.b.c");
    }

    #[test]
    fn later_write_replaces_earlier() {
        let mut ctx = Context::new();
        ctx.set_int("attempt", 1);
        ctx.set_int("attempt", 2);
        assert_eq!(ctx.get_int("attempt").unwrap(), 2);
    }

    #[test]
    fn tables_are_keyed_independently() {
        let mut ctx = Context::new();
        ctx.set_string("shared", "text");
        ctx.set_int("shared", 7);
        assert_eq!(ctx.get_string("shared").unwrap(), "text");
        assert_eq!(ctx.get_int("shared").unwrap(), 7);
        assert!(ctx.get_response("shared").is_err());
    }

    #[test]
    fn response_snapshot_is_re_readable() {
        let mut ctx = Context::new();
        let response = Response::builder()
            .status(201)
            .body(b"{}".to_vec())
            .unwrap();
        ctx.set_response("registration response", response);

        let stored = ctx.get_response("registration response").unwrap();
        assert_eq!(stored.status(), 201);
        let stored_again = ctx.get_response("registration response").unwrap();
        assert_eq!(stored_again.body(), b"{}");
    }
}
