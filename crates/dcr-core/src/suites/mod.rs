//! Built-in DCR conformance suites.
//!
//! Both suites drive the same four flows; they differ in the schema
//! version the registration responses are validated against and the
//! specification sections their scenarios link to.

pub mod dcr32;
pub mod dcr33;

use std::sync::Arc;

use dcr_auth::Authoriser;
use dcr_http::HttpDispatcher;
use dcr_schema::SpecVersion;

use crate::scenario::Scenario;
use crate::steps::{
    AssertStatusCode, ClientDelete, ClientRetrieve, ClientUpdate, GenerateRegistrationClaims,
    PostClientRegister, PostCredentialsGrant, ValidateRegistrationResponse,
};
use crate::testcase::TestCase;

/// Context keys shared by the suite scenarios.
const KEY_CLAIMS: &str = "registration claims";
const KEY_REGISTER_RESPONSE: &str = "registration response";
const KEY_CLIENT: &str = "software client";
const KEY_GRANT_TOKEN: &str = "client grant token";
const KEY_RETRIEVE_RESPONSE: &str = "retrieve response";
const KEY_UPDATE_RESPONSE: &str = "update response";
const KEY_DELETE_RESPONSE: &str = "delete response";

/// Everything a suite needs to instantiate its scenarios.
#[derive(Clone)]
pub struct SuiteConfig {
    /// The server's registration endpoint.
    pub registration_endpoint: String,

    /// The authoriser selected for this run.
    pub authoriser: Arc<Authoriser>,

    /// Transport used by every HTTP step.
    pub dispatcher: Arc<dyn HttpDispatcher>,
}

fn register_case(config: &SuiteConfig, version: SpecVersion) -> TestCase {
    TestCase::new(
        "register software client",
        vec![
            Box::new(GenerateRegistrationClaims::new(
                Arc::clone(&config.authoriser),
                KEY_CLAIMS,
            )),
            Box::new(PostClientRegister::new(
                config.registration_endpoint.as_str(),
                KEY_CLAIMS,
                KEY_REGISTER_RESPONSE,
                Arc::clone(&config.dispatcher),
            )),
            Box::new(AssertStatusCode::new(KEY_REGISTER_RESPONSE, 201)),
            Box::new(ValidateRegistrationResponse::new(
                KEY_REGISTER_RESPONSE,
                KEY_CLIENT,
                Arc::clone(&config.authoriser),
                version,
            )),
        ],
    )
}

fn grant_case(config: &SuiteConfig) -> TestCase {
    TestCase::new(
        "obtain client credentials grant",
        vec![Box::new(PostCredentialsGrant::new(
            KEY_CLIENT,
            KEY_GRANT_TOKEN,
            Arc::clone(&config.dispatcher),
        ))],
    )
}

fn delete_case(config: &SuiteConfig) -> TestCase {
    TestCase::new(
        "delete software client",
        vec![
            Box::new(ClientDelete::new(
                config.registration_endpoint.as_str(),
                KEY_CLIENT,
                KEY_GRANT_TOKEN,
                KEY_DELETE_RESPONSE,
                Arc::clone(&config.dispatcher),
            )),
            Box::new(AssertStatusCode::new(KEY_DELETE_RESPONSE, 204)),
        ],
    )
}

fn register_scenario(config: &SuiteConfig, version: SpecVersion, spec: &str) -> Scenario {
    Scenario::new(
        "DCR-001",
        "Dynamically create a new software client",
        spec,
        vec![
            register_case(config, version),
            grant_case(config),
            delete_case(config),
        ],
    )
}

fn retrieve_scenario(config: &SuiteConfig, version: SpecVersion, spec: &str) -> Scenario {
    let retrieve = TestCase::new(
        "retrieve software client",
        vec![
            Box::new(ClientRetrieve::new(
                config.registration_endpoint.as_str(),
                KEY_CLIENT,
                KEY_GRANT_TOKEN,
                KEY_RETRIEVE_RESPONSE,
                Arc::clone(&config.dispatcher),
            )),
            Box::new(AssertStatusCode::new(KEY_RETRIEVE_RESPONSE, 200)),
        ],
    );

    Scenario::new(
        "DCR-002",
        "Dynamically retrieve a registered software client",
        spec,
        vec![
            register_case(config, version),
            grant_case(config),
            retrieve,
            delete_case(config),
        ],
    )
}

fn update_scenario(config: &SuiteConfig, version: SpecVersion, spec: &str) -> Scenario {
    // The update reuses the claims key: a fresh claim set is signed so the
    // PUT carries a new jti and iat.
    let update = TestCase::new(
        "update software client",
        vec![
            Box::new(GenerateRegistrationClaims::new(
                Arc::clone(&config.authoriser),
                KEY_CLAIMS,
            )),
            Box::new(ClientUpdate::new(
                config.registration_endpoint.as_str(),
                KEY_CLIENT,
                KEY_GRANT_TOKEN,
                KEY_CLAIMS,
                KEY_UPDATE_RESPONSE,
                Arc::clone(&config.dispatcher),
            )),
            Box::new(AssertStatusCode::new(KEY_UPDATE_RESPONSE, 200)),
        ],
    );

    Scenario::new(
        "DCR-003",
        "Dynamically update a registered software client",
        spec,
        vec![
            register_case(config, version),
            grant_case(config),
            update,
            delete_case(config),
        ],
    )
}

fn deleted_client_scenario(config: &SuiteConfig, version: SpecVersion, spec: &str) -> Scenario {
    let retrieve_deleted = TestCase::new(
        "retrieve deleted software client",
        vec![
            Box::new(ClientRetrieve::new(
                config.registration_endpoint.as_str(),
                KEY_CLIENT,
                KEY_GRANT_TOKEN,
                KEY_RETRIEVE_RESPONSE,
                Arc::clone(&config.dispatcher),
            )),
            Box::new(AssertStatusCode::new(KEY_RETRIEVE_RESPONSE, 401)),
        ],
    );

    Scenario::new(
        "DCR-004",
        "Access to a deleted software client is rejected",
        spec,
        vec![
            register_case(config, version),
            grant_case(config),
            delete_case(config),
            retrieve_deleted,
        ],
    )
}

fn scenarios(config: &SuiteConfig, version: SpecVersion, spec: &str) -> Vec<Scenario> {
    vec![
        register_scenario(config, version, spec),
        retrieve_scenario(config, version, spec),
        update_scenario(config, version, spec),
        deleted_client_scenario(config, version, spec),
    ]
}
