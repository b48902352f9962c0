//! JSON run reports.

use std::path::Path;

use dcr_core::ManifestResult;

use crate::error::CliResult;

/// Writes the full result tree as pretty-printed JSON.
///
/// # Errors
///
/// Fails if the file cannot be written.
pub fn write_report(path: &Path, result: &ManifestResult) -> CliResult<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dcr_core::{ScenarioResult, StepResult, TestCaseResult};

    #[test]
    fn report_round_trips_through_json() {
        let result = ManifestResult {
            name: "OpenBanking DCR 3.2".to_string(),
            version: "1.0".to_string(),
            scenarios: vec![ScenarioResult {
                id: "DCR-001".to_string(),
                name: "Dynamically create a new software client".to_string(),
                spec: "https://example.com".to_string(),
                test_cases: vec![TestCaseResult {
                    name: "register software client".to_string(),
                    results: vec![StepResult::passed("generate signed registration claims")],
                }],
            }],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report(&path, &result).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["name"], "OpenBanking DCR 3.2");
        assert_eq!(
            written["scenarios"][0]["test_cases"][0]["results"][0]["pass"],
            true
        );
    }
}
