//! Claim-generation step.

use std::sync::Arc;

use dcr_auth::Authoriser;

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;

const NAME: &str = "generate signed registration claims";

/// Builds and signs the registration claim set and stores the compact JWT
/// under the output key.
pub struct GenerateRegistrationClaims {
    authoriser: Arc<Authoriser>,
    output_key: String,
}

impl GenerateRegistrationClaims {
    /// Creates the step.
    #[must_use]
    pub fn new(authoriser: Arc<Authoriser>, output_key: impl Into<String>) -> Self {
        Self {
            authoriser,
            output_key: output_key.into(),
        }
    }
}

impl Step for GenerateRegistrationClaims {
    fn run(&self, ctx: &mut Context) -> StepResult {
        match self.authoriser.claims() {
            Ok(jwt) => {
                ctx.set_string(&self.output_key, jwt);
                StepResult::passed(NAME)
            }
            Err(e) => StepResult::failed(NAME, format!("unable to generate claims: {e}")),
        }
    }
}
