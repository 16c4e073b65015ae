//! Planner configuration
//!
//! One immutable value per episode. Every component takes it by
//! reference; nothing in the planner reads process-wide settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{PlannerError, PlannerResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DwaConfig {
    /// Maximum forward speed [m/s]
    pub max_speed: f64,
    /// Minimum forward speed [m/s]
    pub min_speed: f64,
    /// Maximum yaw rate [rad/s]
    pub max_yawrate: f64,
    /// Maximum forward acceleration [m/ss]
    pub max_accel: f64,
    /// Maximum yaw acceleration [rad/ss]
    pub max_dyawrate: f64,
    /// Forward and lateral velocity sampling step [m/s]
    pub v_reso: f64,
    /// Yaw rate sampling step [rad/s]
    pub yawrate_reso: f64,
    /// Control period [s]
    pub dt: f64,
    /// Prediction horizon [s]
    pub predict_time: f64,
    pub to_goal_cost_gain: f64,
    pub speed_cost_gain: f64,
    /// Robot radius [m]
    pub robot_radius: f64,
    /// Upper bound on candidates scored per cycle, `None` for all
    pub max_candidates: Option<usize>,
}

impl Default for DwaConfig {
    fn default() -> Self {
        Self {
            max_speed: 1.0,
            min_speed: -1.0,
            max_yawrate: 1.0_f64.to_radians(),
            max_accel: 2.0,
            max_dyawrate: 400.0_f64.to_radians(),
            v_reso: 0.05,
            yawrate_reso: 1.0_f64.to_radians(),
            dt: 1.0 / 30.0,
            predict_time: 2.0,
            to_goal_cost_gain: 1.0,
            speed_cost_gain: 1.0,
            robot_radius: 0.25,
            max_candidates: None,
        }
    }
}

impl DwaConfig {
    /// Parse and validate a YAML config; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> PlannerResult<Self> {
        let config: DwaConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> PlannerResult<()> {
        let positive = [
            ("max_accel", self.max_accel),
            ("max_dyawrate", self.max_dyawrate),
            ("v_reso", self.v_reso),
            ("yawrate_reso", self.yawrate_reso),
            ("dt", self.dt),
            ("predict_time", self.predict_time),
            ("robot_radius", self.robot_radius),
        ];
        for (name, value) in positive.iter() {
            if !(value.is_finite() && *value > 0.0) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let finite = [
            ("max_speed", self.max_speed),
            ("min_speed", self.min_speed),
            ("max_yawrate", self.max_yawrate),
            ("to_goal_cost_gain", self.to_goal_cost_gain),
            ("speed_cost_gain", self.speed_cost_gain),
        ];
        for (name, value) in finite.iter() {
            if !value.is_finite() {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.min_speed > self.max_speed {
            return Err(PlannerError::InvalidConfig(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        if self.max_yawrate < 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "max_yawrate must be non-negative, got {}",
                self.max_yawrate
            )));
        }
        if self.max_candidates == Some(0) {
            return Err(PlannerError::InvalidConfig(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of model steps in one rollout
    pub fn horizon_steps(&self) -> usize {
        let ratio = self.predict_time / self.dt;
        // quotients like 2.0 / (1.0 / 30.0) land just above the integer
        (ratio - ratio * 1e-9).ceil().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DwaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.horizon_steps(), 60);
    }

    #[test]
    fn test_horizon_steps_rounds_up() {
        let config = DwaConfig {
            predict_time: 1.0,
            dt: 0.3,
            ..DwaConfig::default()
        };
        assert_eq!(config.horizon_steps(), 4);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = DwaConfig::from_yaml_str("max_speed: 0.5\nrobot_radius: 0.3\n").unwrap();
        assert_eq!(config.max_speed, 0.5);
        assert_eq!(config.robot_radius, 0.3);
        assert_eq!(config.v_reso, DwaConfig::default().v_reso);
        assert_eq!(config.max_candidates, None);
    }

    #[test]
    fn test_from_yaml_rejects_invalid_values() {
        let err = DwaConfig::from_yaml_str("dt: 0.0\n").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfig(_)));

        let err = DwaConfig::from_yaml_str("min_speed: 2.0\n").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_yaml_rejects_malformed() {
        let err = DwaConfig::from_yaml_str("max_speed: [fast\n").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigFormat(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dwa.yaml");
        fs::write(&path, "predict_time: 1.0\nmax_candidates: 500\n").unwrap();
        let config = DwaConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.predict_time, 1.0);
        assert_eq!(config.max_candidates, Some(500));
    }
}
