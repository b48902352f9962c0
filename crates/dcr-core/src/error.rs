//! Engine-level error types.

use thiserror::Error;

/// Result alias for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while assembling or filtering a manifest.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A scenario id appears more than once in a manifest.
    #[error("duplicate scenario id `{0}` in manifest")]
    DuplicateScenarioId(String),

    /// A manifest ended up with no scenarios, typically after filtering.
    #[error("no tests found to run")]
    NoTestsFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tests_found_message() {
        assert_eq!(CoreError::NoTestsFound.to_string(), "no tests found to run");
    }
}
