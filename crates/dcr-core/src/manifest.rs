//! Manifests: the unit a run executes.

use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::result::ManifestResult;
use crate::scenario::Scenario;

/// A named, versioned collection of scenarios.
///
/// Scenario ids are unique within a manifest; construction rejects
/// duplicates and empty manifests. Filtering produces a new manifest
/// sharing the original scenarios.
pub struct Manifest {
    name: String,
    version: String,
    scenarios: Vec<Arc<Scenario>>,
}

impl Manifest {
    /// Creates a manifest from its scenarios.
    ///
    /// # Errors
    ///
    /// Fails if any scenario id occurs more than once, or if the
    /// scenario list is empty.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        scenarios: Vec<Scenario>,
    ) -> CoreResult<Self> {
        Self::from_shared(
            name.into(),
            version.into(),
            scenarios.into_iter().map(Arc::new).collect(),
        )
    }

    fn from_shared(
        name: String,
        version: String,
        scenarios: Vec<Arc<Scenario>>,
    ) -> CoreResult<Self> {
        if scenarios.is_empty() {
            return Err(CoreError::NoTestsFound);
        }

        for scenario in &scenarios {
            let occurrences = scenarios
                .iter()
                .filter(|other| other.id() == scenario.id())
                .count();
            if occurrences != 1 {
                return Err(CoreError::DuplicateScenarioId(scenario.id().to_string()));
            }
        }

        Ok(Self {
            name,
            version,
            scenarios,
        })
    }

    /// The manifest's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The manifest's version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of scenarios in the manifest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the manifest holds no scenarios. Construction forbids
    /// this, so it is always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Keeps only scenarios whose name or id contains the expression,
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails with [`CoreError::NoTestsFound`] when nothing matches.
    pub fn filter(&self, expression: &str) -> CoreResult<Self> {
        let needle = expression.to_lowercase();
        let kept: Vec<Arc<Scenario>> = self
            .scenarios
            .iter()
            .filter(|scenario| {
                scenario.name().to_lowercase().contains(&needle)
                    || scenario.id().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        tracing::info!(
            expression,
            matched = kept.len(),
            total = self.scenarios.len(),
            "filtered manifest"
        );
        Self::from_shared(self.name.clone(), self.version.clone(), kept)
    }

    /// Runs every scenario in order.
    pub fn run(&self) -> ManifestResult {
        tracing::info!(
            manifest = %self.name,
            version = %self.version,
            scenarios = self.scenarios.len(),
            "starting run"
        );

        ManifestResult {
            name: self.name.clone(),
            version: self.version.clone(),
            scenarios: self.scenarios.iter().map(|s| s.run()).collect(),
        }
    }
}

// Steps are trait objects, so scenarios have no derivable Debug; the
// manifest identifies itself by name, version and scenario ids.
impl fmt::Debug for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manifest")
            .field("name", &self.name)
            .field("version", &self.version)
            .field(
                "scenarios",
                &self.scenarios.iter().map(|s| s.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(id: &str, name: &str) -> Scenario {
        Scenario::new(id, name, "https://example.com/spec", Vec::new())
    }

    fn manifest() -> Manifest {
        Manifest::new(
            "DCR",
            "1.0",
            vec![
                scenario("DCR-001", "Dynamically create a new software client"),
                scenario("DCR-002", "Dynamically retrieve a registered software client"),
                scenario("DCR-003", "Dynamically update a registered software client"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = Manifest::new(
            "DCR",
            "1.0",
            vec![scenario("DCR-001", "first"), scenario("DCR-001", "second")],
        )
        .unwrap_err();
        assert!(matches!(error, CoreError::DuplicateScenarioId(id) if id == "DCR-001"));
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let error = Manifest::new("DCR", "1.0", Vec::new()).unwrap_err();
        assert!(matches!(error, CoreError::NoTestsFound));
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let filtered = manifest().filter("RETRIEVE").unwrap();
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn filter_matches_id_substring() {
        let filtered = manifest().filter("dcr-00").unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn filter_preserves_manifest_identity() {
        let filtered = manifest().filter("update").unwrap();
        assert_eq!(filtered.name(), "DCR");
        assert_eq!(filtered.version(), "1.0");
    }

    #[test]
    fn filter_with_no_matches_reports_no_tests() {
        let error = manifest().filter("nonexistent").unwrap_err();
        assert_eq!(error.to_string(), "no tests found to run");
    }

    #[test]
    fn empty_expression_matches_everything() {
        let filtered = manifest().filter("").unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn debug_identifies_the_manifest_by_scenario_ids() {
        let rendered = format!("{:?}", manifest());
        assert!(rendered.contains("\"DCR-001\""));
        assert!(rendered.contains("\"DCR-003\""));
    }

    #[test]
    fn run_yields_one_result_per_scenario_in_order() {
        let result = manifest().run();
        assert_eq!(result.scenarios.len(), 3);
        assert_eq!(result.scenarios[0].id, "DCR-001");
        assert_eq!(result.scenarios[2].id, "DCR-003");
        assert!(!result.fail());
    }
}
