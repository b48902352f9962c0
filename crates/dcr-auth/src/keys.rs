//! Signing key material for JWT claim sets.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::error::{AuthError, AuthResult};

/// A private key bound to the JWS algorithm it signs with.
#[derive(Clone)]
pub struct SigningKey {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .field("encoding_key", &"[REDACTED]")
            .finish()
    }
}

impl SigningKey {
    /// Creates a signing key from a PEM-encoded RSA private key.
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm is not an RSA family algorithm or
    /// the PEM cannot be parsed.
    pub fn from_rsa_pem(algorithm: Algorithm, private_key_pem: &[u8]) -> AuthResult<Self> {
        match algorithm {
            Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512 => {}
            other => {
                return Err(AuthError::InvalidKey(format!(
                    "{} cannot be signed with an RSA key",
                    algorithm_name(other)
                )))
            }
        }

        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;

        Ok(Self {
            algorithm,
            encoding_key,
        })
    }

    /// Creates an HMAC signing key from a shared secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm is not an HMAC family algorithm.
    pub fn from_secret(algorithm: Algorithm, secret: &[u8]) -> AuthResult<Self> {
        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            other => {
                return Err(AuthError::InvalidKey(format!(
                    "{} cannot be signed with a shared secret",
                    algorithm_name(other)
                )))
            }
        }

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
        })
    }

    /// Returns the algorithm this key signs with.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Signs a claim set into a compact JWS, optionally carrying a `kid`
    /// header.
    ///
    /// # Errors
    ///
    /// Returns an error if the key rejects signing for the configured
    /// algorithm.
    pub fn sign<T: Serialize>(&self, kid: Option<&str>, claims: &T) -> AuthResult<String> {
        let mut header = Header::new(self.algorithm);
        header.kid = kid.map(ToString::to_string);

        encode(&header, claims, &self.encoding_key).map_err(|e| AuthError::Signing(e.to_string()))
    }
}

/// Canonical JWA name of a signing algorithm.
#[must_use]
pub const fn algorithm_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::HS256 => "HS256",
        Algorithm::HS384 => "HS384",
        Algorithm::HS512 => "HS512",
        Algorithm::ES256 => "ES256",
        Algorithm::ES384 => "ES384",
        Algorithm::RS256 => "RS256",
        Algorithm::RS384 => "RS384",
        Algorithm::RS512 => "RS512",
        Algorithm::PS256 => "PS256",
        Algorithm::PS384 => "PS384",
        Algorithm::PS512 => "PS512",
        Algorithm::EdDSA => "EdDSA",
    }
}
