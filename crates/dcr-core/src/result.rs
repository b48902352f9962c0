//! Result types mirroring the execution hierarchy.
//!
//! Every level records pass/fail and serializes to JSON for reports. A
//! failure at any level propagates upward through `fail()`, but never
//! stops execution: the result tree always has one entry per step that
//! ran.

use serde::Serialize;

/// Outcome of a single step.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    /// Human-readable step name.
    pub name: String,

    /// Whether the step passed.
    pub pass: bool,

    /// Failure reason, present only when the step failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,

    /// Diagnostic lines the step recorded while running.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub debug: Vec<String>,
}

impl StepResult {
    /// A passing result.
    #[must_use]
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass: true,
            fail_reason: None,
            debug: Vec::new(),
        }
    }

    /// A failing result with a reason.
    #[must_use]
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass: false,
            fail_reason: Some(reason.into()),
            debug: Vec::new(),
        }
    }

    /// Appends a diagnostic line.
    #[must_use]
    pub fn with_debug(mut self, line: impl Into<String>) -> Self {
        self.debug.push(line.into());
        self
    }

    /// Whether the step failed.
    #[must_use]
    pub fn fail(&self) -> bool {
        !self.pass
    }
}

/// Outcome of a test case: one step result per step, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct TestCaseResult {
    /// The test case's name.
    pub name: String,

    /// Step results in execution order.
    pub results: Vec<StepResult>,
}

impl TestCaseResult {
    /// Whether any step in the case failed.
    #[must_use]
    pub fn fail(&self) -> bool {
        self.results.iter().any(StepResult::fail)
    }
}

/// Outcome of a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// The scenario's id.
    pub id: String,

    /// The scenario's name.
    pub name: String,

    /// Link to the specification section the scenario exercises.
    pub spec: String,

    /// Test case results in execution order.
    pub test_cases: Vec<TestCaseResult>,
}

impl ScenarioResult {
    /// Whether any test case in the scenario failed.
    #[must_use]
    pub fn fail(&self) -> bool {
        self.test_cases.iter().any(TestCaseResult::fail)
    }
}

/// Outcome of a whole manifest run.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestResult {
    /// The manifest's name.
    pub name: String,

    /// The manifest's version.
    pub version: String,

    /// Scenario results in execution order.
    pub scenarios: Vec<ScenarioResult>,
}

impl ManifestResult {
    /// Whether any scenario in the run failed.
    #[must_use]
    pub fn fail(&self) -> bool {
        self.scenarios.iter().any(ScenarioResult::fail)
    }
}
