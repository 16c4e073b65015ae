//! Dynamic window: velocities reachable within one control period

use crate::common::DwaState;
use crate::path_planning::dwa::config::DwaConfig;

/// Reachable `[v_min, v_max] x [omega_min, omega_max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicWindow {
    pub v_min: f64,
    pub v_max: f64,
    pub omega_min: f64,
    pub omega_max: f64,
}

impl DynamicWindow {
    pub fn new(v_min: f64, v_max: f64, omega_min: f64, omega_max: f64) -> Self {
        Self { v_min, v_max, omega_min, omega_max }
    }

    /// Intersect the static limits with what the accelerations allow from `state`
    pub fn compute(state: &DwaState, config: &DwaConfig) -> Self {
        let dv = config.max_accel * config.dt;
        let domega = config.max_dyawrate * config.dt;
        Self {
            v_min: config.min_speed.max(state.v - dv),
            v_max: config.max_speed.min(state.v + dv),
            omega_min: (-config.max_yawrate).max(state.omega - domega),
            omega_max: config.max_yawrate.min(state.omega + domega),
        }
    }

    /// Whether `(v, omega)` lies inside the window
    pub fn contains(&self, v: f64, omega: f64) -> bool {
        self.v_min <= v && v <= self.v_max && self.omega_min <= omega && omega <= self.omega_max
    }

    /// True when either axis has no admissible velocity
    pub fn is_empty(&self) -> bool {
        self.v_min > self.v_max || self.omega_min > self.omega_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_window_from_rest() {
        let config = DwaConfig::default();
        let dw = DynamicWindow::compute(&DwaState::default(), &config);
        let dv = config.max_accel * config.dt;
        assert!((dw.v_min + dv).abs() < 1e-12);
        assert!((dw.v_max - dv).abs() < 1e-12);
        // yaw acceleration is large, so the static yaw-rate limit binds
        assert_eq!(dw.omega_min, -config.max_yawrate);
        assert_eq!(dw.omega_max, config.max_yawrate);
    }

    #[test]
    fn test_window_clipped_at_max_speed() {
        let config = DwaConfig::default();
        let state = DwaState::new(0.0, 0.0, 0.0, config.max_speed, 0.0, 0.0);
        let dw = DynamicWindow::compute(&state, &config);
        assert_eq!(dw.v_max, config.max_speed);
        assert!(dw.contains(config.max_speed, 0.0));
    }

    #[test]
    fn test_window_empty_when_far_outside_limits() {
        let config = DwaConfig::default();
        let state = DwaState::new(0.0, 0.0, 0.0, 5.0, 0.0, 0.0);
        let dw = DynamicWindow::compute(&state, &config);
        assert!(dw.is_empty());
    }

    #[test]
    fn test_window_subset_of_static_limits() {
        let config = DwaConfig {
            max_dyawrate: 5.0_f64.to_radians(),
            max_yawrate: 40.0_f64.to_radians(),
            ..DwaConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.gen_range(config.min_speed..=config.max_speed);
            let omega = rng.gen_range(-config.max_yawrate..=config.max_yawrate);
            let state = DwaState::new(0.0, 0.0, 0.0, v, omega, 0.0);
            let dw = DynamicWindow::compute(&state, &config);

            assert!(dw.v_min >= config.min_speed && dw.v_max <= config.max_speed);
            assert!(dw.omega_min >= -config.max_yawrate && dw.omega_max <= config.max_yawrate);
            assert!(dw.contains(v, omega));
        }
    }
}
