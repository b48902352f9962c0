//! HTTP transport layer for the DCR conformance suite.
//!
//! The conformance engine never talks to `reqwest` directly: every outbound
//! call goes through the [`HttpDispatcher`] trait, which works on plain
//! `http` request/response values. The production implementation wraps a
//! blocking `reqwest` client configured with the suite's mTLS identity and
//! timeouts; tests substitute in-memory stubs.

#![forbid(unsafe_code)]

mod builder;
mod dispatcher;
mod error;

pub use builder::{build_client, HttpClientConfig};
pub use dispatcher::HttpDispatcher;
pub use error::{TransportError, TransportResult};
