//! Registration response validation step.

use std::sync::Arc;

use dcr_auth::Authoriser;
use dcr_schema::SpecVersion;

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;

const NAME: &str = "validate registration response";

/// Validates a stored registration response against the schema of the
/// configured specification version and, on success, builds the
/// registered [`Client`] and stores it under the client key.
///
/// [`Client`]: dcr_auth::Client
pub struct ValidateRegistrationResponse {
    response_key: String,
    client_key: String,
    authoriser: Arc<Authoriser>,
    version: SpecVersion,
}

impl ValidateRegistrationResponse {
    /// Creates the step.
    #[must_use]
    pub fn new(
        response_key: impl Into<String>,
        client_key: impl Into<String>,
        authoriser: Arc<Authoriser>,
        version: SpecVersion,
    ) -> Self {
        Self {
            response_key: response_key.into(),
            client_key: client_key.into(),
            authoriser,
            version,
        }
    }
}

impl Step for ValidateRegistrationResponse {
    fn run(&self, ctx: &mut Context) -> StepResult {
        let body = match ctx.get_response(&self.response_key) {
            Ok(response) => response.body().clone(),
            Err(e) => return StepResult::failed(NAME, e.to_string()),
        };

        let mut failures = dcr_schema::validate(self.version, &body);
        if !failures.is_empty() {
            failures.sort();
            return StepResult::failed(NAME, failures.join("; "));
        }

        match self.authoriser.client(&body) {
            Ok(client) => {
                ctx.set_client(&self.client_key, client);
                StepResult::passed(NAME)
            }
            Err(e) => StepResult::failed(NAME, e.to_string()),
        }
    }
}
