//! Corridor geometry algorithms

pub mod segment;
pub mod corridor;

pub use segment::{closest_point_on_segment, distance_point_to_segment};
pub use corridor::{assess, is_intruder, segments, CorridorAssessment};
