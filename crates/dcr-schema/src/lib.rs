//! Registration response schema validation.
//!
//! Decodes a DCR registration response and checks it against the
//! structural rules of a given specification version. Every rule is
//! evaluated independently and the failures are aggregated; consumers
//! must not depend on their ordering.

#![forbid(unsafe_code)]

mod response;
mod rules;
mod validator;
mod version;

pub use response::RegistrationResponse;
pub use rules::is_ob_url;
pub use validator::{validate, validate_response};
pub use version::{SpecVersion, SpecVersionError};
