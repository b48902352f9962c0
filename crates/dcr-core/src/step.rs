//! The unit of execution.

use crate::context::Context;
use crate::result::StepResult;

/// One atomic action in a test case.
///
/// A step reads its inputs from the [`Context`], does one thing, records
/// its outputs back into the context, and reports a [`StepResult`].
/// Steps must not panic on bad input or transport failure: any error
/// becomes a failing result so the cases after it still run.
pub trait Step {
    /// Executes the step against the scenario's context.
    fn run(&self, ctx: &mut Context) -> StepResult;
}
