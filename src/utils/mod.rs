//! Configuration loading

pub mod config;

pub use config::{AircraftSpec, ConfigError, CorridorConfig, ScenarioCase, ScenarioFile};
