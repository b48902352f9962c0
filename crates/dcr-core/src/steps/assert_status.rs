//! Status-code assertion step.

use crate::context::Context;
use crate::result::StepResult;
use crate::step::Step;

/// Asserts that a stored response has the expected HTTP status code.
pub struct AssertStatusCode {
    response_key: String,
    expected: u16,
}

impl AssertStatusCode {
    /// Creates the step.
    #[must_use]
    pub fn new(response_key: impl Into<String>, expected: u16) -> Self {
        Self {
            response_key: response_key.into(),
            expected,
        }
    }

    fn name(&self) -> String {
        format!("assert status code {}", self.expected)
    }
}

impl Step for AssertStatusCode {
    fn run(&self, ctx: &mut Context) -> StepResult {
        let response = match ctx.get_response(&self.response_key) {
            Ok(response) => response,
            Err(e) => return StepResult::failed(self.name(), e.to_string()),
        };

        let actual = response.status().as_u16();
        if actual == self.expected {
            StepResult::passed(self.name())
        } else {
            StepResult::failed(
                self.name(),
                format!("expected status {}, got {actual}", self.expected),
            )
        }
    }
}
