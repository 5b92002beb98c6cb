//! Core types and constants for the flight corridor monitor

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
