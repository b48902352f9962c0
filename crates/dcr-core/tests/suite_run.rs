//! End-to-end runs of the built-in suites against an in-memory server.

use std::sync::{Arc, Mutex};

use http::{Method, Request, Response};
use jsonwebtoken::Algorithm;

use dcr_auth::{Authoriser, AuthoriserConfig, SigningKey, TransportIdentity};
use dcr_core::suites::{dcr32, dcr33, SuiteConfig};
use dcr_http::{HttpDispatcher, TransportResult};
use dcr_oidc::OpenIdConfiguration;

const REGISTRATION_ENDPOINT: &str = "https://auth.test/register";
const TOKEN_ENDPOINT: &str = "https://auth.test/token";
const CLIENT_RESOURCE: &str = "https://auth.test/register/c-1";

const REGISTRATION_BODY: &str = r#"{
    "client_id": "c-1",
    "client_secret": "s-1",
    "redirect_uris": ["https://tpp.example.com/callback"],
    "token_endpoint_auth_method": "client_secret_basic",
    "grant_types": ["authorization_code", "client_credentials"],
    "software_id": "software1",
    "scope": "accounts openid",
    "software_statement": "a.b.c",
    "application_type": "web",
    "id_token_signed_response_alg": "PS256",
    "request_object_signing_alg": "none"
}"#;

const GRANT_BODY: &str = r#"{"access_token":"at-1","token_type":"Bearer","expires_in":3600}"#;

/// Minimal in-memory authorisation server: one registerable client,
/// deregistered state tracked across scenarios.
struct StubServer {
    deleted: Mutex<bool>,
}

impl StubServer {
    fn new() -> Self {
        Self {
            deleted: Mutex::new(true),
        }
    }

    fn respond(status: u16, body: &str) -> TransportResult<Response<Vec<u8>>> {
        Ok(Response::builder()
            .status(status)
            .body(body.as_bytes().to_vec())
            .unwrap())
    }
}

impl HttpDispatcher for StubServer {
    fn dispatch(&self, request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>> {
        let mut deleted = self.deleted.lock().unwrap();
        let method = request.method().clone();
        let uri = request.uri().to_string();

        if method == Method::POST && uri == REGISTRATION_ENDPOINT {
            *deleted = false;
            Self::respond(201, REGISTRATION_BODY)
        } else if method == Method::POST && uri == TOKEN_ENDPOINT {
            Self::respond(200, GRANT_BODY)
        } else if method == Method::GET && uri == CLIENT_RESOURCE {
            if *deleted {
                Self::respond(401, "")
            } else {
                Self::respond(200, REGISTRATION_BODY)
            }
        } else if method == Method::PUT && uri == CLIENT_RESOURCE {
            Self::respond(200, REGISTRATION_BODY)
        } else if method == Method::DELETE && uri == CLIENT_RESOURCE {
            *deleted = true;
            Self::respond(204, "")
        } else {
            Self::respond(404, "")
        }
    }
}

struct UnavailableServer;

impl HttpDispatcher for UnavailableServer {
    fn dispatch(&self, _request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>> {
        Ok(Response::builder()
            .status(503)
            .body(Vec::new())
            .unwrap())
    }
}

fn authoriser() -> Arc<Authoriser> {
    let config = AuthoriserConfig {
        openid: OpenIdConfiguration {
            issuer: "https://auth.test".to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
            registration_endpoint: Some(REGISTRATION_ENDPOINT.to_string()),
            token_endpoint_auth_methods_supported: Some(vec![
                "client_secret_basic".to_string()
            ]),
            request_object_signing_alg_values_supported: None,
            response_types_supported: Some(vec!["code".to_string()]),
        },
        ssa: "a.b.c".to_string(),
        kid: "key-1".to_string(),
        software_id: "software1".to_string(),
        redirect_uris: vec!["https://tpp.example.com/callback".to_string()],
        signing_key: SigningKey::from_secret(Algorithm::HS256, b"integration-secret").unwrap(),
        expiry: chrono::Duration::hours(1),
        transport: TransportIdentity::default(),
    };
    Arc::new(Authoriser::select(config).unwrap())
}

fn suite_config(dispatcher: Arc<dyn HttpDispatcher>) -> SuiteConfig {
    SuiteConfig {
        registration_endpoint: REGISTRATION_ENDPOINT.to_string(),
        authoriser: authoriser(),
        dispatcher,
    }
}

#[test]
fn dcr32_suite_passes_against_a_conformant_server() {
    let config = suite_config(Arc::new(StubServer::new()));
    let result = dcr32::manifest(&config).unwrap().run();

    assert!(!result.fail(), "{}", serde_json::to_string(&result).unwrap());
    assert_eq!(result.scenarios.len(), 4);
    for scenario in &result.scenarios {
        for case in &scenario.test_cases {
            assert!(!case.fail(), "{}: {}", scenario.id, case.name);
        }
    }
}

#[test]
fn dcr33_suite_passes_against_a_conformant_server() {
    let config = suite_config(Arc::new(StubServer::new()));
    let result = dcr33::manifest(&config).unwrap().run();
    assert!(!result.fail(), "{}", serde_json::to_string(&result).unwrap());
}

#[test]
fn deleted_client_scenario_observes_the_rejection() {
    let config = suite_config(Arc::new(StubServer::new()));
    let manifest = dcr32::manifest(&config).unwrap().filter("DCR-004").unwrap();

    let result = manifest.run();
    assert!(!result.fail());

    let scenario = &result.scenarios[0];
    let retrieve_deleted = scenario
        .test_cases
        .iter()
        .find(|case| case.name == "retrieve deleted software client")
        .unwrap();
    assert_eq!(retrieve_deleted.results[1].name, "assert status code 401");
    assert!(retrieve_deleted.results[1].pass);
}

#[test]
fn unavailable_server_fails_every_scenario_but_still_reports_all_steps() {
    let config = suite_config(Arc::new(UnavailableServer));
    let result = dcr32::manifest(&config).unwrap().run();

    assert!(result.fail());
    assert_eq!(result.scenarios.len(), 4);
    for scenario in &result.scenarios {
        assert!(scenario.fail(), "{} should fail", scenario.id);
        // Every step still produced a result.
        for case in &scenario.test_cases {
            assert!(!case.results.is_empty());
        }
    }

    // Registration claims still sign locally; the 201 assertion is the
    // first step to observe the outage.
    let register = &result.scenarios[0].test_cases[0];
    assert!(register.results[0].pass);
    assert!(register.results[1].pass);
    assert_eq!(
        register.results[2].fail_reason.as_deref(),
        Some("expected status 201, got 503")
    );
}

#[test]
fn filtering_to_nothing_reports_no_tests() {
    let config = suite_config(Arc::new(StubServer::new()));
    let error = dcr32::manifest(&config)
        .unwrap()
        .filter("does-not-exist")
        .unwrap_err();
    assert_eq!(error.to_string(), "no tests found to run");
}
