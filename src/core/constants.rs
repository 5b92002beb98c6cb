//! System parameters

/// Corridor radius used when a configuration does not specify one
pub const DEFAULT_TUNNEL_WIDTH: f64 = 1.0;
