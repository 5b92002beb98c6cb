//! Runs scenario cases against their corridors and records the outcomes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Aircraft, Point};
use crate::utils::config::{AircraftSpec, ConfigError, CorridorConfig, ScenarioCase, ScenarioFile};

/// Result of a single case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Case name from the scenario file
    pub name: String,
    /// Intrusion verdict computed for the aircraft
    pub got: bool,
    /// Verdict the case expects
    pub expected: bool,
    /// `got == expected`
    pub passed: bool,
}

/// Process exit status when every case passed
pub const EXIT_PASSED: u8 = 0;
/// Process exit status when at least one case failed
pub const EXIT_CASE_FAILED: u8 = 1;
/// Process exit status when scenarios could not be loaded or evaluated
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// What to do after a failed case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HaltPolicy {
    /// Stop at the first mismatch
    #[default]
    FirstFailure,
    /// Evaluate every case
    RunAll,
}

/// Outcomes of one runner pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Evaluated cases in file order
    pub outcomes: Vec<CaseOutcome>,
    /// Set when the run stopped before the last case
    pub halted: bool,
}

impl RunSummary {
    /// True when the run completed and no case failed
    pub fn all_passed(&self) -> bool {
        !self.halted && self.outcomes.iter().all(|o| o.passed)
    }

    /// Cases whose verdict did not match the expectation
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            EXIT_PASSED
        } else {
            EXIT_CASE_FAILED
        }
    }
}

/// Evaluates scenario cases against their corridors
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Behaviour after a failed case
    halt_policy: HaltPolicy,
}

impl ScenarioRunner {
    pub fn new(halt_policy: HaltPolicy) -> Self {
        Self { halt_policy }
    }

    /// Evaluate the cases in file order
    pub fn run(&self, scenarios: &ScenarioFile) -> Result<RunSummary, ConfigError> {
        scenarios.validate()?;

        let mut summary = RunSummary::default();
        for (i, case) in scenarios.cases.iter().enumerate() {
            let corridor = scenarios
                .corridor(&case.tunnel)
                .ok_or_else(|| ConfigError::UnknownCorridor {
                    case: case.name.clone(),
                    corridor: case.tunnel.clone(),
                })?;

            let aircraft = Aircraft::from(&case.aircraft);
            let got = aircraft.is_intruder(&corridor.waypoints, corridor.width);
            let passed = got == case.expected_intruder;
            if !passed {
                log::warn!(
                    "case '{}' (aircraft {}): got intruder={} expected {}",
                    case.name,
                    aircraft.id(),
                    got,
                    case.expected_intruder
                );
            }

            summary.outcomes.push(CaseOutcome {
                name: case.name.clone(),
                got,
                expected: case.expected_intruder,
                passed,
            });

            if !passed && self.halt_policy == HaltPolicy::FirstFailure {
                summary.halted = i + 1 < scenarios.cases.len();
                break;
            }
        }

        log::info!(
            "{} of {} cases evaluated, {} failed",
            summary.outcomes.len(),
            scenarios.cases.len(),
            summary.failures().count()
        );
        Ok(summary)
    }
}

fn case(name: &str, id: u32, position: Point, tunnel: &str, expected_intruder: bool) -> ScenarioCase {
    ScenarioCase {
        name: name.to_string(),
        aircraft: AircraftSpec {
            id,
            velocity: 0.0,
            acceleration: 0.0,
            position,
        },
        tunnel: tunnel.to_string(),
        expected_intruder,
    }
}

/// Built-in reference checks: a straight tunnel along `lat` and a bent
/// polyline, both with width 1.0
pub fn reference_scenarios() -> ScenarioFile {
    let mut corridors = BTreeMap::new();
    corridors.insert(
        "straight".to_string(),
        CorridorConfig::new(1.0, vec![Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0)]),
    );
    corridors.insert(
        "polyline".to_string(),
        CorridorConfig::new(
            1.0,
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(5.0, 0.0, 0.0),
                Point::new(10.0, 1.0, 0.0),
                Point::new(15.0, 1.0, 0.0),
            ],
        ),
    );

    let cases = vec![
        case("On line", 1, Point::new(5.0, 0.0, 0.0), "straight", false),
        case("On border", 2, Point::new(5.0, 1.0, 0.0), "straight", false),
        case("Outside width", 3, Point::new(5.0, 2.0, 0.0), "straight", true),
        case("At start", 4, Point::new(0.0, 0.0, 0.0), "straight", false),
        case("Above but inside", 5, Point::new(5.0, 0.0, 0.8), "straight", false),
        case("Too high", 6, Point::new(5.0, 0.0, 1.01), "straight", true),
        case("Near bend (polyline)", 7, Point::new(9.5, 0.8, 0.0), "polyline", false),
    ];

    ScenarioFile {
        corridors,
        cases,
        ..ScenarioFile::default()
    }
}
