//! Motion model for the DWA planner
//!
//! Three degree-of-freedom model with a lateral slip term. Yaw is
//! integrated first and the translated motion uses the updated yaw.

use crate::common::{DwaControl, DwaState, MotionModel};

/// Planar model driven by forward, yaw-rate and lateral velocity
#[derive(Debug, Clone, Copy, Default)]
pub struct OmniSlipModel;

impl OmniSlipModel {
    pub fn new() -> Self {
        Self
    }

    /// Advance `state` by one step of `dt` under `u`
    ///
    /// The returned state's velocity fields are exactly `u`.
    pub fn step(&self, state: &DwaState, u: &DwaControl, dt: f64) -> DwaState {
        let yaw = state.yaw + u.omega * dt;
        let (sin, cos) = yaw.sin_cos();
        DwaState {
            x: state.x + u.v * cos * dt + u.v_lateral * sin * dt,
            y: state.y + u.v * sin * dt - u.v_lateral * cos * dt,
            yaw,
            v: u.v,
            omega: u.omega,
            v_lateral: u.v_lateral,
        }
    }
}

impl MotionModel for OmniSlipModel {
    type State = DwaState;
    type Control = DwaControl;

    fn propagate(&self, state: &DwaState, control: &DwaControl, dt: f64) -> DwaState {
        self.step(state, control, dt)
    }
}
