//! Client-credentials grant step.

use std::sync::Arc;

use dcr_http::HttpDispatcher;
use dcr_oidc::GrantToken;

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;

const NAME: &str = "obtain client credentials grant";

/// Posts the client-credentials grant for a stored client and stores the
/// issued token.
pub struct PostCredentialsGrant {
    client_key: String,
    token_key: String,
    dispatcher: Arc<dyn HttpDispatcher>,
}

impl PostCredentialsGrant {
    /// Creates the step.
    #[must_use]
    pub fn new(
        client_key: impl Into<String>,
        token_key: impl Into<String>,
        dispatcher: Arc<dyn HttpDispatcher>,
    ) -> Self {
        Self {
            client_key: client_key.into(),
            token_key: token_key.into(),
            dispatcher,
        }
    }
}

impl Step for PostCredentialsGrant {
    fn run(&self, ctx: &mut Context) -> StepResult {
        let request = match ctx.get_client(&self.client_key) {
            Ok(client) => match client.credentials_grant_request() {
                Ok(request) => request,
                Err(e) => return StepResult::failed(NAME, e.to_string()),
            },
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };
        let endpoint = request.uri().to_string();

        let response = match self.dispatcher.dispatch(request) {
            Ok(response) => response,
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            return StepResult::failed(NAME, format!("token endpoint returned status {status}"));
        }

        match serde_json::from_slice::<GrantToken>(response.body()) {
            Ok(token) => {
                ctx.set_grant_token(&self.token_key, token);
                StepResult::passed(NAME).with_debug(format!("POST {endpoint}"))
            }
            Err(e) => StepResult::failed(NAME, format!("malformed grant response: {e}")),
        }
    }
}
