use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{Aircraft, Point, DEFAULT_TUNNEL_WIDTH};
use crate::validation::report::ReportFormat;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Scenario file could not be read
    #[error("failed to read scenario file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Scenario file is not valid JSON for the expected layout
    #[error("failed to parse scenario file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A case references a corridor that is not defined
    #[error("case '{case}' references unknown corridor '{corridor}'")]
    UnknownCorridor { case: String, corridor: String },
    /// NaN or infinite coordinate or width
    #[error("non-finite value in {context}")]
    NonFiniteValue { context: String },
}

/// A named tunnel with its tolerance width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorridorConfig {
    /// Tolerance radius around the path. Negative values are accepted and
    /// make every position an intruder.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Ordered waypoints
    #[serde(default)]
    pub waypoints: Vec<Point>,
}

fn default_width() -> f64 {
    DEFAULT_TUNNEL_WIDTH
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TUNNEL_WIDTH,
            waypoints: Vec::new(),
        }
    }
}

impl CorridorConfig {
    pub fn new(width: f64, waypoints: Vec<Point>) -> Self {
        Self { width, waypoints }
    }
}

/// Aircraft fixture as written in a scenario file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AircraftSpec {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub velocity: f64,
    #[serde(default)]
    pub acceleration: f64,
    pub position: Point,
}

impl From<&AircraftSpec> for Aircraft {
    fn from(spec: &AircraftSpec) -> Self {
        Aircraft::new(spec.id, spec.velocity, spec.acceleration, spec.position)
    }
}

/// One expected-outcome check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCase {
    pub name: String,
    pub aircraft: AircraftSpec,
    /// Key into [`ScenarioFile::corridors`]
    pub tunnel: String,
    pub expected_intruder: bool,
}

/// Corridors plus the cases evaluated against them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub corridors: BTreeMap<String, CorridorConfig>,
    #[serde(default)]
    pub cases: Vec<ScenarioCase>,
    #[serde(default)]
    pub report: ReportFormat,
}

impl ScenarioFile {
    /// Load and validate a scenario file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let scenarios: ScenarioFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        scenarios.validate()?;
        log::info!(
            "loaded {} corridors and {} cases from '{}'",
            scenarios.corridors.len(),
            scenarios.cases.len(),
            path.display()
        );
        Ok(scenarios)
    }

    /// Parse and validate scenarios from an in-memory JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let scenarios: ScenarioFile =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            })?;
        scenarios.validate()?;
        Ok(scenarios)
    }

    /// Rejects dangling corridor references and non-finite numbers.
    /// Width sign is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, corridor) in &self.corridors {
            if corridor.width.is_nan() || corridor.width.is_infinite() {
                return Err(ConfigError::NonFiniteValue {
                    context: format!("width of corridor '{}'", name),
                });
            }
            if let Some(i) = corridor.waypoints.iter().position(|p| !p.is_finite()) {
                return Err(ConfigError::NonFiniteValue {
                    context: format!("waypoint {} of corridor '{}'", i, name),
                });
            }
        }

        for case in &self.cases {
            if !self.corridors.contains_key(&case.tunnel) {
                return Err(ConfigError::UnknownCorridor {
                    case: case.name.clone(),
                    corridor: case.tunnel.clone(),
                });
            }
            if !case.aircraft.position.is_finite() {
                return Err(ConfigError::NonFiniteValue {
                    context: format!("aircraft position of case '{}'", case.name),
                });
            }
        }
        Ok(())
    }

    pub fn corridor(&self, name: &str) -> Option<&CorridorConfig> {
        self.corridors.get(name)
    }
}
