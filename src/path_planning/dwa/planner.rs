//! DWA planner facade
//!
//! Owns the configuration and a shared handle to the obstacle grid and
//! runs one planning cycle per call. The caller threads state and
//! control between cycles.

use std::path::Path;
use std::sync::Arc;

use log::debug;
use nalgebra::{Rotation2, Vector2};

use crate::common::{DwaControl, DwaState, PlannerResult, Point2D};
use crate::mapping::ObstacleGrid;
use crate::path_planning::dwa::config::DwaConfig;
use crate::path_planning::dwa::dynamic_window::DynamicWindow;
use crate::path_planning::dwa::search::{CandidateSearch, SearchOutcome};

/// Factor applied to the forward command written by [`DwaPlanner::compute_action`]
pub const ACTION_FORWARD_SCALE: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct DwaPlanner {
    grid: Arc<ObstacleGrid>,
    config: DwaConfig,
}

impl DwaPlanner {
    /// Create a planner; fails on an invalid config
    pub fn new<G: Into<Arc<ObstacleGrid>>>(grid: G, config: DwaConfig) -> PlannerResult<Self> {
        config.validate()?;
        Ok(Self { grid: grid.into(), config })
    }

    /// Load the grid and, if given, a YAML config
    pub fn from_files<P, Q>(grid_path: P, config_path: Option<Q>) -> PlannerResult<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let grid = ObstacleGrid::load(grid_path)?;
        let config = match config_path {
            Some(path) => DwaConfig::from_yaml_file(path)?,
            None => DwaConfig::default(),
        };
        Self::new(grid, config)
    }

    pub fn config(&self) -> &DwaConfig {
        &self.config
    }

    pub fn grid(&self) -> &Arc<ObstacleGrid> {
        &self.grid
    }

    /// One planning cycle
    ///
    /// The window is derived from the velocity fields of `state`;
    /// `_last_control` is kept for callers that thread the previous
    /// command through. When every candidate collides the outcome holds
    /// the stop command and the single-state trajectory `[state]`.
    pub fn step(&self, state: &DwaState, _last_control: &DwaControl, goal: Point2D) -> SearchOutcome {
        let dw = DynamicWindow::compute(state, &self.config);
        let search = CandidateSearch::new(&self.config, goal, self.grid.as_ref());
        let outcome = search.search(state, &dw);
        debug!(
            "dw=[{:.3}, {:.3}, {:.3}, {:.3}] u=({:.3}, {:.3}, {:.3}) cost={:?}",
            dw.v_min,
            dw.v_max,
            dw.omega_min,
            dw.omega_max,
            outcome.control.v,
            outcome.control.omega,
            outcome.control.v_lateral,
            outcome.best_cost
        );
        outcome
    }

    /// Plan from a world-frame velocity request and write the command into `action`
    ///
    /// `desired_velocity` is rotated into the robot frame to seed the
    /// forward and lateral velocity of the planning state. `action`
    /// receives `[2 * v, omega, v_lateral]`.
    pub fn compute_action(
        &self,
        desired_velocity: Vector2<f64>,
        position: Point2D,
        heading: f64,
        goal: Point2D,
        action: &mut [f64; 3],
    ) -> SearchOutcome {
        let seed = seed_control(desired_velocity, heading);
        let mut state = DwaState::at_rest(position.x, position.y, heading);
        state.v = seed.v;
        state.omega = seed.omega;
        state.v_lateral = seed.v_lateral;

        let outcome = self.step(&state, &seed, goal);
        action[0] = outcome.control.v * ACTION_FORWARD_SCALE;
        action[1] = outcome.control.omega;
        action[2] = outcome.control.v_lateral;
        outcome
    }
}

/// World-frame velocity expressed as forward and rightward components
pub fn seed_control(desired_velocity: Vector2<f64>, heading: f64) -> DwaControl {
    let body = Rotation2::new(-heading) * desired_velocity;
    DwaControl::new(body.x, 0.0, -body.y)
}
