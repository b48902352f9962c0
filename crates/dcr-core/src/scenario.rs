//! Scenarios: isolated end-to-end flows.

use crate::context::Context;
use crate::result::ScenarioResult;
use crate::testcase::TestCase;

/// An identified end-to-end flow against the server under test.
///
/// Each run starts from a fresh [`Context`], so scenarios never observe
/// one another's state. Test cases within a scenario run in order and
/// share that context.
pub struct Scenario {
    id: String,
    name: String,
    spec: String,
    test_cases: Vec<TestCase>,
}

impl Scenario {
    /// Creates a scenario from its test cases.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        spec: impl Into<String>,
        test_cases: Vec<TestCase>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spec: spec.into(),
            test_cases,
        }
    }

    /// The scenario's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The scenario's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs every test case against a fresh context.
    pub fn run(&self) -> ScenarioResult {
        tracing::info!(id = %self.id, name = %self.name, "running scenario");
        let mut ctx = Context::new();
        let test_cases = self
            .test_cases
            .iter()
            .map(|case| case.run(&mut ctx))
            .collect();

        ScenarioResult {
            id: self.id.clone(),
            name: self.name.clone(),
            spec: self.spec.clone(),
            test_cases,
        }
    }
}
