//! Client retrieval step.

use std::sync::Arc;

use http::Method;

use dcr_http::HttpDispatcher;

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;
use crate::steps::{bearer_request, client_url};

const NAME: &str = "retrieve software client";

/// Fetches the registered client's record with a bearer token and stores
/// the response snapshot.
pub struct ClientRetrieve {
    registration_endpoint: String,
    client_key: String,
    token_key: String,
    response_key: String,
    dispatcher: Arc<dyn HttpDispatcher>,
}

impl ClientRetrieve {
    /// Creates the step.
    #[must_use]
    pub fn new(
        registration_endpoint: impl Into<String>,
        client_key: impl Into<String>,
        token_key: impl Into<String>,
        response_key: impl Into<String>,
        dispatcher: Arc<dyn HttpDispatcher>,
    ) -> Self {
        Self {
            registration_endpoint: registration_endpoint.into(),
            client_key: client_key.into(),
            token_key: token_key.into(),
            response_key: response_key.into(),
            dispatcher,
        }
    }
}

impl Step for ClientRetrieve {
    fn run(&self, ctx: &mut Context) -> StepResult {
        let client_id = match ctx.get_client(&self.client_key) {
            Ok(client) => match client.id() {
                Ok(id) => id.to_string(),
                Err(e) => return StepResult::failed(NAME, e.to_string()),
            },
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };
        let access_token = match ctx.get_grant_token(&self.token_key) {
            Ok(token) => token.access_token.clone(),
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };

        let url = client_url(&self.registration_endpoint, &client_id);
        let request = match bearer_request(Method::GET, &url, &access_token) {
            Ok(request) => request,
            Err(reason) => return StepResult::failed(NAME, reason),
        };

        match self.dispatcher.dispatch(request) {
            Ok(response) => {
                let status = response.status();
                ctx.set_response(&self.response_key, response);
                StepResult::passed(NAME)
                    .with_debug(format!("GET {url}"))
                    .with_debug(format!("status {status}"))
            }
            Err(e) => StepResult::failed(NAME, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use http::header::AUTHORIZATION;
    use http::{Request, Response};

    use dcr_auth::Client;
    use dcr_http::TransportResult;
    use dcr_oidc::GrantToken;

    struct RecordDispatcher;

    impl HttpDispatcher for RecordDispatcher {
        fn dispatch(&self, request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>> {
            assert_eq!(request.method(), Method::GET);
            assert_eq!(
                request.uri().to_string(),
                "https://auth.example.com/register/c-1"
            );
            assert_eq!(
                request.headers().get(AUTHORIZATION).unwrap(),
                "Bearer at-1"
            );
            Ok(Response::builder()
                .status(200)
                .body(br#"{"client_id":"c-1"}"#.to_vec())
                .unwrap())
        }
    }

    fn populated_ctx() -> Context {
        let mut ctx = Context::new();
        ctx.set_client(
            "software client",
            Client::TlsClientAuth {
                client_id: "c-1".to_string(),
                token_endpoint: "https://auth.example.com/token".to_string(),
            },
        );
        ctx.set_grant_token(
            "client grant token",
            GrantToken {
                access_token: "at-1".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
            },
        );
        ctx
    }

    fn step() -> ClientRetrieve {
        ClientRetrieve::new(
            "https://auth.example.com/register",
            "software client",
            "client grant token",
            "retrieve response",
            Arc::new(RecordDispatcher),
        )
    }

    #[test]
    fn issues_bearer_get_and_stores_response() {
        let mut ctx = populated_ctx();
        let result = step().run(&mut ctx);
        assert!(result.pass, "{:?}", result.fail_reason);
        assert_eq!(ctx.get_response("retrieve response").unwrap().status(), 200);
    }

    #[test]
    fn missing_grant_token_fails() {
        let mut ctx = populated_ctx();
        let step = ClientRetrieve::new(
            "https://auth.example.com/register",
            "software client",
            "wrong key",
            "retrieve response",
            Arc::new(RecordDispatcher),
        );
        let result = step.run(&mut ctx);
        assert!(result
            .fail_reason
            .unwrap()
            .contains("not found in context"));
    }
}
