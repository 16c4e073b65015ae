//! Constant-control trajectory rollout

use crate::common::{DwaControl, DwaState, MotionModel, Trajectory};
use crate::path_planning::dwa::config::DwaConfig;
use crate::path_planning::dwa::motion_model::OmniSlipModel;

/// Open-loop predictor holding one control over the horizon
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryPredictor<M = OmniSlipModel> {
    model: M,
}

impl TrajectoryPredictor<OmniSlipModel> {
    pub fn new() -> Self {
        Self { model: OmniSlipModel::new() }
    }
}

impl<M> TrajectoryPredictor<M>
where
    M: MotionModel<State = DwaState, Control = DwaControl>,
{
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    /// Roll `u` forward from `x_init`
    ///
    /// Returns `config.horizon_steps() + 1` states, `x_init` first.
    pub fn predict(&self, x_init: &DwaState, u: &DwaControl, config: &DwaConfig) -> Trajectory {
        let n = config.horizon_steps();
        let mut trajectory = Vec::with_capacity(n + 1);
        trajectory.push(*x_init);
        let mut x = *x_init;
        for _ in 0..n {
            x = self.model.propagate(&x, u, config.dt);
            trajectory.push(x);
        }
        trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, 1.0 / 30.0, 61)]
    #[case(1.0, 0.1, 11)]
    #[case(1.0, 0.3, 5)]
    #[case(0.05, 0.1, 2)]
    fn test_trajectory_length(#[case] predict_time: f64, #[case] dt: f64, #[case] expected: usize) {
        let config = DwaConfig { predict_time, dt, ..DwaConfig::default() };
        let traj = TrajectoryPredictor::new().predict(&DwaState::default(), &DwaControl::new(0.5, 0.0, 0.0), &config);
        assert_eq!(traj.len(), expected);
    }

    #[test]
    fn test_rollout_holds_control() {
        let config = DwaConfig::default();
        let start = DwaState::new(1.0, 1.0, 0.2, 0.0, 0.0, 0.0);
        let u = DwaControl::new(0.4, 0.01, -0.1);
        let traj = TrajectoryPredictor::new().predict(&start, &u, &config);

        assert_eq!(traj[0], start);
        for state in &traj[1..] {
            assert_eq!(state.velocity(), u);
        }
    }

    #[test]
    fn test_straight_rollout_distance() {
        let config = DwaConfig { predict_time: 1.0, dt: 0.1, ..DwaConfig::default() };
        let traj = TrajectoryPredictor::new().predict(&DwaState::default(), &DwaControl::new(1.0, 0.0, 0.0), &config);
        let last = traj.last().unwrap();
        assert!((last.x - 1.0).abs() < 1e-9);
        assert!(last.y.abs() < 1e-12);
    }
}
