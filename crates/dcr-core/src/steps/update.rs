//! Client update step.

use std::sync::Arc;

use http::header::CONTENT_TYPE;
use http::Method;

use dcr_http::HttpDispatcher;

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;
use crate::steps::{bearer_request, client_url};

const NAME: &str = "update software client";

/// Puts freshly signed registration claims to the registered client's
/// resource and stores the response snapshot.
pub struct ClientUpdate {
    registration_endpoint: String,
    client_key: String,
    token_key: String,
    claims_key: String,
    response_key: String,
    dispatcher: Arc<dyn HttpDispatcher>,
}

impl ClientUpdate {
    /// Creates the step.
    #[must_use]
    pub fn new(
        registration_endpoint: impl Into<String>,
        client_key: impl Into<String>,
        token_key: impl Into<String>,
        claims_key: impl Into<String>,
        response_key: impl Into<String>,
        dispatcher: Arc<dyn HttpDispatcher>,
    ) -> Self {
        Self {
            registration_endpoint: registration_endpoint.into(),
            client_key: client_key.into(),
            token_key: token_key.into(),
            claims_key: claims_key.into(),
            response_key: response_key.into(),
            dispatcher,
        }
    }
}

impl Step for ClientUpdate {
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
        let claims = match ctx.get_string(&self.claims_key) {
            Ok(claims) => claims.to_string(),
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };

        let url = client_url(&self.registration_endpoint, &client_id);
        let mut request = match bearer_request(Method::PUT, &url, &access_token) {
            Ok(request) => request,
            Err(reason) => return StepResult::failed(NAME, reason),
        };
        match "application/jose".parse() {
            Ok(value) => {
                request.headers_mut().insert(CONTENT_TYPE, value);
            }
            Err(e) => return StepResult::failed(NAME, format!("unable to build request: {e}")),
        }
        *request.body_mut() = claims.into_bytes();

        match self.dispatcher.dispatch(request) {
            Ok(response) => {
                let status = response.status();
                ctx.set_response(&self.response_key, response);
                StepResult::passed(NAME)
                    .with_debug(format!("PUT {url}"))
                    .with_debug(format!("status {status}"))
            }
            Err(e) => StepResult::failed(NAME, e.to_string()),
        }
    }
}
