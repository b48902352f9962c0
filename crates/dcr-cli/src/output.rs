//! Output formatting utilities.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use dcr_core::{ManifestResult, ScenarioResult};

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// One row of the run summary table.
#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Scenario")]
    name: String,
    #[tabled(rename = "Result")]
    result: String,
}

impl From<&ScenarioResult> for ScenarioRow {
    fn from(scenario: &ScenarioResult) -> Self {
        let result = if scenario.fail() {
            "FAIL".red().bold().to_string()
        } else {
            "PASS".green().bold().to_string()
        };
        Self {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            result,
        }
    }
}

/// Prints every step outcome of a run, then a per-scenario summary table.
pub fn print_result(result: &ManifestResult, verbose: bool) {
    println!("{} {}", result.name.bold(), result.version.dimmed());

    for scenario in &result.scenarios {
        println!("\n{} {}", scenario.id.bold(), scenario.name);
        for case in &scenario.test_cases {
            println!("  {}", case.name);
            for step in &case.results {
                if step.pass {
                    println!("    {} {}", "✓".green().bold(), step.name);
                } else {
                    println!("    {} {}", "✗".red().bold(), step.name);
                    if let Some(reason) = &step.fail_reason {
                        println!("      {}", reason.red());
                    }
                }
                if verbose {
                    for line in &step.debug {
                        println!("      {}", line.dimmed());
                    }
                }
            }
        }
    }

    let rows: Vec<ScenarioRow> = result.scenarios.iter().map(ScenarioRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("\n{table}");

    if result.fail() {
        error("conformance run failed");
    } else {
        success("conformance run passed");
    }
}
