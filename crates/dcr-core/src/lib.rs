//! Test execution engine of the DCR conformance suite.
//!
//! A run is a [`Manifest`] of [`Scenario`]s. Each scenario owns an ordered
//! list of [`TestCase`]s, each test case an ordered list of boxed
//! [`Step`]s. Scenarios are isolated from each other through a fresh
//! [`Context`]; within a scenario, steps communicate exclusively through
//! that context. Execution is single-threaded and never aborts early: a
//! failing step still yields a result, and the steps after it run against
//! whatever state the context holds.

#![forbid(unsafe_code)]

mod context;
mod error;
mod manifest;
mod result;
mod scenario;
mod step;
pub mod steps;
pub mod suites;
mod testcase;

pub use context::{Context, ContextError, ContextResult};
pub use error::{CoreError, CoreResult};
pub use manifest::Manifest;
pub use result::{ManifestResult, ScenarioResult, StepResult, TestCaseResult};
pub use scenario::Scenario;
pub use step::Step;
pub use testcase::TestCase;
