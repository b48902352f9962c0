//! Ordered step sequences.

use crate::context::Context;
use crate::result::TestCaseResult;
use crate::step::Step;

/// A named, ordered sequence of steps.
///
/// Every step runs exactly once per execution, in order, regardless of
/// earlier failures. The result always holds one [`StepResult`] per
/// step.
///
/// [`StepResult`]: crate::result::StepResult
pub struct TestCase {
    name: String,
    steps: Vec<Box<dyn Step>>,
}

impl TestCase {
    /// Creates a test case from its steps.
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<Box<dyn Step>>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// The test case's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs every step against the scenario's context.
    pub fn run(&self, ctx: &mut Context) -> TestCaseResult {
        tracing::debug!(test_case = %self.name, steps = self.steps.len(), "running test case");
        TestCaseResult {
            name: self.name.clone(),
            results: self.steps.iter().map(|step| step.run(ctx)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::result::StepResult;

    struct Fixed(bool);

    impl Step for Fixed {
        fn run(&self, _ctx: &mut Context) -> StepResult {
            if self.0 {
                StepResult::passed("fixed")
            } else {
                StepResult::failed("fixed", "forced failure")
            }
        }
    }

    struct RecordOrder(i64);

    impl Step for RecordOrder {
        fn run(&self, ctx: &mut Context) -> StepResult {
            ctx.set_int("last step", self.0);
            StepResult::passed(format!("step {}", self.0))
        }
    }

    #[test]
    fn every_step_yields_a_result_in_order() {
        let case = TestCase::new(
            "mixed outcomes",
            vec![
                Box::new(Fixed(true)),
                Box::new(Fixed(false)),
                Box::new(Fixed(true)),
            ],
        );
        let result = case.run(&mut Context::new());

        assert_eq!(result.results.len(), 3);
        assert!(result.results[0].pass);
        assert!(!result.results[1].pass);
        assert!(result.results[2].pass);
        assert!(result.fail());
    }

    #[test]
    fn steps_run_in_declaration_order() {
        let case = TestCase::new(
            "ordering",
            vec![Box::new(RecordOrder(1)), Box::new(RecordOrder(2))],
        );
        let mut ctx = Context::new();
        case.run(&mut ctx);
        assert_eq!(ctx.get_int("last step").unwrap(), 2);
    }

    #[test]
    fn empty_case_passes() {
        let case = TestCase::new("empty", Vec::new());
        let result = case.run(&mut Context::new());
        assert!(result.results.is_empty());
        assert!(!result.fail());
    }
}
