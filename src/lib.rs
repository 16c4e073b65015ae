//! rust_dwa - Dynamic Window Approach local planner
//!
//! This crate selects short-horizon velocity commands for a mobile robot
//! with a lateral slip term, scoring sampled commands against a
//! precomputed nearest-obstacle grid.

// Core modules
pub mod common;

// Algorithm modules
pub mod mapping;
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, DwaState, DwaControl, Trajectory};
pub use common::{MotionModel, NearestObstacleMap};
pub use common::{PlannerError, PlannerResult};
pub use mapping::ObstacleGrid;
pub use path_planning::dwa::{DwaConfig, DwaPlanner, SearchOutcome};
