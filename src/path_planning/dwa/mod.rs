//! Dynamic Window Approach local planner
//!
//! Picks a short-horizon velocity command `(v, omega, v_lateral)` that
//! makes progress toward a goal while keeping clear of static obstacles.
//!
//! # Components
//!
//! - `config`: immutable planner parameters
//! - `motion_model`: three degree-of-freedom model with lateral slip
//! - `dynamic_window`: velocities reachable within one control period
//! - `sampling`: index-driven sample ranges
//! - `trajectory`: constant-control rollout
//! - `cost`: goal, speed and obstacle cost terms
//! - `search`: exhaustive minimum-cost candidate search
//! - `planner`: facade running one planning cycle
//! - `simulation`: headless episode driver
//!
//! # Example
//!
//! ```no_run
//! use rust_dwa::common::{DwaControl, DwaState, Point2D};
//! use rust_dwa::mapping::ObstacleGrid;
//! use rust_dwa::path_planning::dwa::{DwaConfig, DwaPlanner};
//!
//! let grid = ObstacleGrid::load("ob.bin").unwrap();
//! let planner = DwaPlanner::new(grid, DwaConfig::default()).unwrap();
//!
//! let state = DwaState::at_rest(0.5, 0.5, 0.0);
//! let outcome = planner.step(&state, &DwaControl::zero(), Point2D::new(1.5, 0.5));
//! println!("u = {:?}", outcome.control);
//! ```
//!
//! # References
//!
//! - PythonRobotics Dynamic Window Approach by Atsushi Sakai
//! - "The Dynamic Window Approach to Collision Avoidance", Fox, Burgard, Thrun

pub mod config;
pub mod motion_model;
pub mod dynamic_window;
pub mod sampling;
pub mod trajectory;
pub mod cost;
pub mod search;
pub mod planner;
pub mod simulation;

// Re-exports
pub use config::DwaConfig;
pub use motion_model::OmniSlipModel;
pub use dynamic_window::DynamicWindow;
pub use sampling::SampleRange;
pub use trajectory::TrajectoryPredictor;
pub use cost::{calc_obstacle_cost, calc_speed_cost, calc_to_goal_cost, CostEvaluator};
pub use search::{Candidate, CandidateGrid, CandidateSearch, SearchOutcome};
pub use planner::{seed_control, DwaPlanner, ACTION_FORWARD_SCALE};
pub use simulation::{simulate_episode, Episode};
