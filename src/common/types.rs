//! Common types used throughout rust_dwa

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Robot state for the omnidirectional slip model
///
/// Pose `(x, y, yaw)` plus the velocity held during the last step:
/// forward `v`, yaw rate `omega` and lateral `v_lateral`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DwaState {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
    pub v: f64,
    pub omega: f64,
    pub v_lateral: f64,
}

impl DwaState {
    pub fn new(x: f64, y: f64, yaw: f64, v: f64, omega: f64, v_lateral: f64) -> Self {
        Self { x, y, yaw, v, omega, v_lateral }
    }

    /// State at rest at the given pose
    pub fn at_rest(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw, ..Self::default() }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Velocity fields as a control
    pub fn velocity(&self) -> DwaControl {
        DwaControl::new(self.v, self.omega, self.v_lateral)
    }
}

/// Velocity command `(v, omega, v_lateral)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DwaControl {
    pub v: f64,          // forward velocity [m/s]
    pub omega: f64,      // yaw rate [rad/s]
    pub v_lateral: f64,  // lateral velocity [m/s]
}

impl DwaControl {
    pub fn new(v: f64, omega: f64, v_lateral: f64) -> Self {
        Self { v, omega, v_lateral }
    }

    /// Stop command
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.v, self.omega, self.v_lateral]
    }
}

/// Predicted state sequence, initial state first
pub type Trajectory = Vec<DwaState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
        assert!((p2.norm() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_state_at_rest() {
        let state = DwaState::at_rest(1.0, 2.0, 0.5);
        assert_eq!(state.position(), Point2D::new(1.0, 2.0));
        assert_eq!(state.velocity(), DwaControl::zero());
    }

    #[test]
    fn test_control_to_array() {
        let u = DwaControl::new(0.5, -0.1, 0.2);
        assert_eq!(u.to_array(), [0.5, -0.1, 0.2]);
    }
}
