//! Client-authentication strategy layer of the DCR conformance suite.
//!
//! An [`Authoriser`] is selected once per run from the authentication
//! methods the server advertises in its discovery document. It signs the
//! registration request claims through a [`Signer`] and, from a successful
//! registration response, produces a [`Client`] that can build the
//! client-credentials grant request in its method's wire format.

#![forbid(unsafe_code)]

mod authoriser;
mod certificate;
mod client;
mod error;
mod keys;
mod response_types;
mod signer;

pub use authoriser::{
    select_auth_method, AuthMethod, Authoriser, AuthoriserConfig, Strategy,
    METHOD_CLIENT_SECRET_BASIC, METHOD_CLIENT_SECRET_JWT, METHOD_PRIVATE_KEY_JWT,
    METHOD_TLS_CLIENT_AUTH,
};
pub use certificate::TransportIdentity;
pub use client::{Client, CLIENT_ASSERTION_TYPE_JWT};
pub use error::{AuthError, AuthResult};
pub use keys::{algorithm_name, SigningKey};
pub use response_types::resolve_response_types;
pub use signer::{Signer, SignerConfig};
