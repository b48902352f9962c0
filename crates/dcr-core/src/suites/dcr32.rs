//! DCR 3.2 conformance suite.

use dcr_schema::SpecVersion;

use crate::error::CoreResult;
use crate::manifest::Manifest;
use crate::suites::{scenarios, SuiteConfig};

const SPEC: &str =
    "https://openbankinguk.github.io/dcr-docs-pub/v3.2/dynamic-client-registration.html";

/// Builds the DCR 3.2 manifest.
///
/// # Errors
///
/// Manifest assembly itself can fail on scenario id collisions; with the
/// built-in scenarios it never does.
pub fn manifest(config: &SuiteConfig) -> CoreResult<Manifest> {
    Manifest::new(
        "OpenBanking DCR 3.2",
        "1.0",
        scenarios(config, SpecVersion::V3_2, SPEC),
    )
}
