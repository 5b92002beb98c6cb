//! Core data types for corridor monitoring

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::algorithms::corridor;

/// 3D point. The coordinate names follow the flight domain, but all
/// arithmetic treats them as plain Cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64, height: f64) -> Self {
        Self { lat, lon, height }
    }

    /// `lat`, `lon`, `height` mapped onto `x`, `y`, `z`
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.lat, self.lon, self.height)
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.height.is_finite()
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Tracked aircraft. Only the position takes part in corridor checks;
/// the kinematic fields are carried for callers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aircraft {
    id: u32,
    velocity: f64,
    acceleration: f64,
    position: Point,
}

impl Aircraft {
    pub fn new(id: u32, velocity: f64, acceleration: f64, position: Point) -> Self {
        Self { id, velocity, acceleration, position }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Whether the current position lies outside `width` of every tunnel segment
    pub fn is_intruder(&self, tunnel: &[Point], width: f64) -> bool {
        corridor::is_intruder(&self.position, tunnel, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_vector_conversion_maps_axes() {
        let p = Point::new(1.5, -2.0, 30.0);
        let v = p.to_vector3();
        assert_eq!((v.x, v.y, v.z), (1.5, -2.0, 30.0));
        assert_eq!(Point::from(v), p);
    }

    #[test]
    fn test_default_aircraft() {
        let ac = Aircraft::default();
        assert_eq!(ac.id(), 0);
        assert_eq!(ac.velocity(), 0.0);
        assert_eq!(ac.acceleration(), 0.0);
        assert_eq!(ac.position(), Point::default());
    }

    #[test]
    fn test_kinematics_do_not_affect_intrusion() {
        let tunnel = [Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0)];
        let pos = Point::new(5.0, 0.5, 0.0);
        let slow = Aircraft::new(1, 0.0, 0.0, pos);
        let fast = Aircraft::new(2, 250.0, -9.8, pos);
        assert_eq!(slow.is_intruder(&tunnel, 1.0), fast.is_intruder(&tunnel, 1.0));
        assert!(!fast.is_intruder(&tunnel, 1.0));
    }

    #[test]
    fn test_set_position_replaces_position() {
        let tunnel = [Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0)];
        let mut ac = Aircraft::new(7, 120.0, 0.0, Point::new(5.0, 0.0, 0.0));
        assert!(!ac.is_intruder(&tunnel, 1.0));

        ac.set_position(Point::new(5.0, 3.0, 0.0));
        assert_eq!(ac.position(), Point::new(5.0, 3.0, 0.0));
        assert!(ac.is_intruder(&tunnel, 1.0));
    }
}
