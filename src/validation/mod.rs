//! Scenario verification and reporting

pub mod scenario;
pub mod report;

pub use scenario::{
    reference_scenarios, CaseOutcome, HaltPolicy, RunSummary, ScenarioRunner, EXIT_CASE_FAILED,
    EXIT_CONFIG_ERROR, EXIT_PASSED,
};
pub use report::{render, JsonFormatter, ReportFormat, TextFormatter};
