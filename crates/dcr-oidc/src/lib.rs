//! `OpenID` Connect surface consumed by the DCR conformance suite.
//!
//! Covers the two JSON documents the suite reads from the server under
//! test: the `.well-known/openid-configuration` discovery document and the
//! token endpoint's client-credentials grant response.

#![forbid(unsafe_code)]

mod config;
mod discovery;
mod error;
mod grant;

pub use config::OpenIdConfiguration;
pub use discovery::fetch_openid_configuration;
pub use error::{OidcError, OidcResult};
pub use grant::GrantToken;
