//! Trajectory cost terms
//!
//! Lower is better. The obstacle term is infinite for a colliding
//! trajectory, which makes the total infinite as well.

use crate::common::{DwaState, NearestObstacleMap, Point2D};
use crate::path_planning::dwa::config::DwaConfig;

/// Distance below which the goal counts as reached for the goal term
pub const GOAL_EPS: f64 = 1e-9;

/// Every n-th trajectory point is checked against the obstacle map
pub const OBSTACLE_CHECK_STRIDE: usize = 2;

/// Goal alignment plus goal distance of the final state
///
/// The alignment is the angle between the goal vector and the final
/// position vector, both taken from the world origin.
pub fn calc_to_goal_cost(trajectory: &[DwaState], goal: Point2D, config: &DwaConfig) -> f64 {
    let last = match trajectory.last() {
        Some(last) => last.position(),
        None => return 0.0,
    };

    let distance = last.distance(&goal);
    if distance < GOAL_EPS {
        return 0.0;
    }

    let g = goal.to_vector();
    let p = last.to_vector();
    let denom = g.norm() * p.norm();
    let error_angle = if denom < GOAL_EPS {
        0.0
    } else {
        (g.dot(&p) / denom).max(-1.0).min(1.0).acos()
    };

    config.to_goal_cost_gain * error_angle + config.to_goal_cost_gain * distance
}

/// Penalty for ending below the maximum speed
pub fn calc_speed_cost(trajectory: &[DwaState], config: &DwaConfig) -> f64 {
    let final_v = trajectory.last().map(|s| s.v).unwrap_or(0.0);
    config.speed_cost_gain * (config.max_speed - final_v)
}

/// Inverse clearance over stride-2 points, infinite on collision
pub fn calc_obstacle_cost<M: NearestObstacleMap + ?Sized>(
    trajectory: &[DwaState],
    map: &M,
    config: &DwaConfig,
) -> f64 {
    let mut minr = f64::INFINITY;
    for state in trajectory.iter().step_by(OBSTACLE_CHECK_STRIDE) {
        let r = map.clearance(state.position());
        if r <= config.robot_radius {
            return f64::INFINITY; // collision
        }
        if minr >= r {
            minr = r;
        }
    }
    1.0 / minr
}

/// Scores trajectories against one goal and obstacle map
pub struct CostEvaluator<'a, M: ?Sized> {
    config: &'a DwaConfig,
    goal: Point2D,
    map: &'a M,
}

impl<'a, M: NearestObstacleMap + ?Sized> CostEvaluator<'a, M> {
    pub fn new(config: &'a DwaConfig, goal: Point2D, map: &'a M) -> Self {
        Self { config, goal, map }
    }

    /// Total cost; the obstacle check runs first and short-circuits
    pub fn evaluate(&self, trajectory: &[DwaState]) -> f64 {
        let ob_cost = calc_obstacle_cost(trajectory, self.map, self.config);
        if ob_cost.is_infinite() {
            return f64::INFINITY;
        }
        calc_to_goal_cost(trajectory, self.goal, self.config)
            + calc_speed_cost(trajectory, self.config)
            + ob_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ObstacleGrid;
    use std::f64::consts::FRAC_PI_2;

    fn straight_line(n: usize, spacing: f64, y: f64) -> Vec<DwaState> {
        (0..n)
            .map(|i| DwaState::new(i as f64 * spacing, y, 0.0, 0.5, 0.0, 0.0))
            .collect()
    }

    fn grid_with(obstacle: Point2D) -> ObstacleGrid {
        ObstacleGrid::from_obstacles(&[obstacle], 50, 80, 0.1).unwrap()
    }

    #[test]
    fn test_goal_cost_zero_at_goal() {
        let config = DwaConfig::default();
        let traj = vec![DwaState::at_rest(2.0, 1.0, 0.0)];
        assert_eq!(calc_to_goal_cost(&traj, Point2D::new(2.0, 1.0), &config), 0.0);
    }

    #[test]
    fn test_goal_cost_zero_at_origin_goal() {
        let config = DwaConfig::default();
        let traj = vec![DwaState::default()];
        assert_eq!(calc_to_goal_cost(&traj, Point2D::origin(), &config), 0.0);
    }

    #[test]
    fn test_goal_cost_angle_and_distance() {
        let config = DwaConfig { to_goal_cost_gain: 2.0, ..DwaConfig::default() };
        let traj = vec![DwaState::at_rest(0.0, 1.0, 0.0)];
        let cost = calc_to_goal_cost(&traj, Point2D::new(1.0, 0.0), &config);
        let expected = 2.0 * FRAC_PI_2 + 2.0 * 2.0_f64.sqrt();
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_goal_cost_finite_when_final_at_origin() {
        let config = DwaConfig::default();
        let traj = vec![DwaState::default()];
        let cost = calc_to_goal_cost(&traj, Point2D::new(3.0, 4.0), &config);
        assert!((cost - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_cost() {
        let config = DwaConfig { speed_cost_gain: 0.5, ..DwaConfig::default() };
        let traj = straight_line(3, 0.1, 1.0);
        assert!((calc_speed_cost(&traj, &config) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_obstacle_cost_inverse_min_clearance() {
        let config = DwaConfig::default();
        let grid = grid_with(Point2D::new(7.9, 1.0));
        // points at x = 0.0 .. 0.4, nearest is x = 0.4 at distance 7.5
        let traj = straight_line(5, 0.1, 1.0);
        let cost = calc_obstacle_cost(&traj, &grid, &config);
        assert!((cost - 1.0 / 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_obstacle_cost_infinite_within_radius() {
        let config = DwaConfig::default();
        let grid = grid_with(Point2D::new(1.2, 1.0));
        // index 10 lands at x = 1.0, 0.2 m from the obstacle
        let traj = straight_line(11, 0.1, 1.0);
        assert!(calc_obstacle_cost(&traj, &grid, &config).is_infinite());
    }

    #[test]
    fn test_obstacle_cost_skips_odd_points() {
        let config = DwaConfig::default();
        let grid = grid_with(Point2D::new(2.0, 1.0));
        // Only index 1 (x = 1.8) is within the radius; stride 2 never samples it
        let traj = vec![
            DwaState::at_rest(1.0, 1.0, 0.0),
            DwaState::at_rest(1.8, 1.0, 0.0),
            DwaState::at_rest(1.0, 1.0, 0.0),
        ];
        let cost = calc_obstacle_cost(&traj, &grid, &config);
        assert!(cost.is_finite());
        assert!((cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_obstacle_cost_boundary_counts_as_collision() {
        let config = DwaConfig { robot_radius: 0.5, ..DwaConfig::default() };
        let grid = grid_with(Point2D::new(1.5, 1.0));
        let traj = vec![DwaState::at_rest(1.0, 1.0, 0.0)];
        assert!(calc_obstacle_cost(&traj, &grid, &config).is_infinite());
    }

    #[test]
    fn test_evaluator_sums_terms() {
        let config = DwaConfig::default();
        let grid = grid_with(Point2D::new(7.9, 4.9));
        let traj = straight_line(5, 0.1, 1.0);
        let goal = Point2D::new(3.0, 1.0);
        let evaluator = CostEvaluator::new(&config, goal, &grid);
        let expected = calc_to_goal_cost(&traj, goal, &config)
            + calc_speed_cost(&traj, &config)
            + calc_obstacle_cost(&traj, &grid, &config);
        assert!((evaluator.evaluate(&traj) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_evaluator_infinite_on_collision() {
        let config = DwaConfig::default();
        let grid = grid_with(Point2D::new(0.1, 1.0));
        let traj = straight_line(5, 0.1, 1.0);
        let evaluator = CostEvaluator::new(&config, Point2D::new(3.0, 1.0), &grid);
        assert!(evaluator.evaluate(&traj).is_infinite());
    }
}
