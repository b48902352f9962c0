//! Registration POST step.

use std::sync::Arc;

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request};

use dcr_http::HttpDispatcher;

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;

const NAME: &str = "register software client";

/// Posts the signed registration claims to the registration endpoint and
/// stores the response snapshot.
pub struct PostClientRegister {
    registration_endpoint: String,
    claims_key: String,
    response_key: String,
    dispatcher: Arc<dyn HttpDispatcher>,
}

impl PostClientRegister {
    /// Creates the step.
    #[must_use]
    pub fn new(
        registration_endpoint: impl Into<String>,
        claims_key: impl Into<String>,
        response_key: impl Into<String>,
        dispatcher: Arc<dyn HttpDispatcher>,
    ) -> Self {
        Self {
            registration_endpoint: registration_endpoint.into(),
            claims_key: claims_key.into(),
            response_key: response_key.into(),
            dispatcher,
        }
    }
}

impl Step for PostClientRegister {
    fn run(&self, ctx: &mut Context) -> StepResult {
        let claims = match ctx.get_string(&self.claims_key) {
            Ok(claims) => claims.to_string(),
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };

        let request = Request::builder()
            .method(Method::POST)
            .uri(&self.registration_endpoint)
            .header(CONTENT_TYPE, "application/jose")
            .header(ACCEPT, "application/json")
            .body(claims.into_bytes());
        let request = match request {
            Ok(request) => request,
            Err(e) => return StepResult::failed(NAME, format!("unable to build request: {e}")),
        };

        match self.dispatcher.dispatch(request) {
            Ok(response) => {
                let status = response.status();
                ctx.set_response(&self.response_key, response);
                StepResult::passed(NAME)
                    .with_debug(format!("POST {}", self.registration_endpoint))
                    .with_debug(format!("status {status}"))
            }
            Err(e) => StepResult::failed(NAME, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use http::Response;

    use dcr_http::{TransportError, TransportResult};

    struct CannedDispatcher;

    impl HttpDispatcher for CannedDispatcher {
        fn dispatch(&self, request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>> {
            assert_eq!(request.method(), Method::POST);
            assert_eq!(
                request.headers().get(CONTENT_TYPE).unwrap(),
                "application/jose"
            );
            assert_eq!(request.body().as_slice(), b"a.b.c");
            Ok(Response::builder()
                .status(201)
                .body(br#"{"client_id":"c-1"}"#.to_vec())
                .unwrap())
        }
    }

    struct FailingDispatcher;

    impl HttpDispatcher for FailingDispatcher {
        fn dispatch(&self, _request: Request<Vec<u8>>) -> TransportResult<Response<Vec<u8>>> {
            Err(TransportError::InvalidRequest(
                "connection refused".to_string(),
            ))
        }
    }

    fn step(dispatcher: Arc<dyn HttpDispatcher>) -> PostClientRegister {
        PostClientRegister::new(
            "https://auth.example.com/register",
            "registration claims",
            "registration response",
            dispatcher,
        )
    }

    #[test]
    fn posts_claims_and_stores_response() {
        let mut ctx = Context::new();
        ctx.set_string("registration claims", "a.b.c");

        let result = step(Arc::new(CannedDispatcher)).run(&mut ctx);
        assert!(result.pass);

        let response = ctx.get_response("registration response").unwrap();
        assert_eq!(response.status(), 201);
    }

    #[test]
    fn missing_claims_fail_without_dispatching() {
        let mut ctx = Context::new();
        let result = step(Arc::new(FailingDispatcher)).run(&mut ctx);
        assert!(result.fail());
        assert!(result
            .fail_reason
            .unwrap()
            .contains("not found in context"));
    }

    #[test]
    fn transport_failure_becomes_step_failure() {
        let mut ctx = Context::new();
        ctx.set_string("registration claims", "a.b.c");

        let result = step(Arc::new(FailingDispatcher)).run(&mut ctx);
        assert!(result.fail());
        assert!(ctx.get_response("registration response").is_err());
    }
}
