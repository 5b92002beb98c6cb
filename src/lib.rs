//! Flight Corridor Monitor
//!
//! Decides whether an aircraft has left its allowed tunnel: a corridor of
//! fixed radius around a piecewise-linear reference path in 3D.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Aircraft, Point, DEFAULT_TUNNEL_WIDTH};
pub use algorithms::{assess, distance_point_to_segment, is_intruder, CorridorAssessment};
pub use utils::{ConfigError, CorridorConfig, ScenarioFile};
pub use validation::{reference_scenarios, HaltPolicy, ReportFormat, RunSummary, ScenarioRunner};
