//! Common traits defining the seams of the planner

use crate::common::types::*;

/// Trait for vehicle/robot motion models
pub trait MotionModel {
    /// State type
    type State;
    /// Control type
    type Control;

    /// Propagate state forward in time
    fn propagate(&self, state: &Self::State, control: &Self::Control, dt: f64) -> Self::State;
}

/// Trait for maps answering nearest-obstacle queries
pub trait NearestObstacleMap {
    /// Nearest static obstacle to `point`
    fn nearest_obstacle(&self, point: Point2D) -> Point2D;

    /// Distance from `point` to its nearest obstacle
    fn clearance(&self, point: Point2D) -> f64 {
        point.distance(&self.nearest_obstacle(point))
    }
}
