//! Headless episode driver
//!
//! Plans, applies the chosen control through the motion model and
//! repeats until the robot is within `robot_radius` of the goal or the
//! step budget runs out.

use log::info;

use crate::common::{DwaControl, DwaState, Point2D, Trajectory};
use crate::path_planning::dwa::motion_model::OmniSlipModel;
use crate::path_planning::dwa::planner::DwaPlanner;

/// Record of one driven episode
#[derive(Debug, Clone)]
pub struct Episode {
    /// Executed states, start first
    pub states: Trajectory,
    /// Control applied at each step
    pub controls: Vec<DwaControl>,
    pub reached_goal: bool,
    /// Steps where no candidate was collision free
    pub infeasible_steps: usize,
}

impl Episode {
    pub fn final_state(&self) -> DwaState {
        // states always holds at least the start
        self.states[self.states.len() - 1]
    }
}

pub fn simulate_episode(planner: &DwaPlanner, start: DwaState, goal: Point2D, max_steps: usize) -> Episode {
    let model = OmniSlipModel::new();
    let config = planner.config();

    let mut x = start;
    let mut u = DwaControl::zero();
    let mut episode = Episode {
        states: vec![start],
        controls: Vec::new(),
        reached_goal: x.position().distance(&goal) <= config.robot_radius,
        infeasible_steps: 0,
    };

    let mut step = 0;
    while !episode.reached_goal && step < max_steps {
        let outcome = planner.step(&x, &u, goal);
        if !outcome.is_feasible() {
            episode.infeasible_steps += 1;
        }
        u = outcome.control;
        x = model.step(&x, &u, config.dt);
        episode.states.push(x);
        episode.controls.push(u);
        episode.reached_goal = x.position().distance(&goal) <= config.robot_radius;
        step += 1;
    }

    if episode.reached_goal {
        info!("Goal!! after {} steps", step);
    } else {
        info!("goal not reached after {} steps", step);
    }
    episode
}
