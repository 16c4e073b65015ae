//! Exhaustive candidate search over the dynamic window
//!
//! Candidates are enumerated forward velocity first, then yaw rate,
//! then lateral velocity, all ascending. The enumeration index breaks
//! exact cost ties so the first candidate found wins, in both the
//! sequential and the parallel search.

use itertools::iproduct;
use log::{debug, warn};
#[cfg(feature = "parallel")]
use ordered_float::OrderedFloat;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::common::{DwaControl, DwaState, NearestObstacleMap, Point2D, Trajectory};
use crate::path_planning::dwa::config::DwaConfig;
use crate::path_planning::dwa::cost::CostEvaluator;
use crate::path_planning::dwa::dynamic_window::DynamicWindow;
use crate::path_planning::dwa::sampling::SampleRange;
use crate::path_planning::dwa::trajectory::TrajectoryPredictor;

/// One scored control
#[derive(Debug, Clone)]
pub struct Candidate {
    pub control: DwaControl,
    pub trajectory: Trajectory,
    pub cost: f64,
}

/// Result of one search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub control: DwaControl,
    pub trajectory: Trajectory,
    /// Cost of the chosen candidate, `None` when every candidate collided
    pub best_cost: Option<f64>,
    /// Number of candidates scored
    pub evaluated: usize,
}

impl SearchOutcome {
    fn from_best(best: Option<Candidate>, state: &DwaState, evaluated: usize) -> Self {
        match best {
            Some(c) => Self {
                control: c.control,
                trajectory: c.trajectory,
                best_cost: Some(c.cost),
                evaluated,
            },
            None => {
                warn!(
                    "no feasible candidate among {} at ({:.2}, {:.2}), stopping",
                    evaluated, state.x, state.y
                );
                Self {
                    control: DwaControl::zero(),
                    trajectory: vec![*state],
                    best_cost: None,
                    evaluated,
                }
            }
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.best_cost.is_some()
    }
}

/// Sample axes of one search
#[derive(Debug, Clone, Copy)]
pub struct CandidateGrid {
    pub v: SampleRange,
    pub omega: SampleRange,
    pub v_lateral: SampleRange,
}

impl CandidateGrid {
    /// The lateral axis spans `[-dw.v_max, dw.v_max)`
    pub fn new(dw: &DynamicWindow, config: &DwaConfig) -> Self {
        Self {
            v: SampleRange::new(dw.v_min, dw.v_max, config.v_reso),
            omega: SampleRange::new(dw.omega_min, dw.omega_max, config.yawrate_reso),
            v_lateral: SampleRange::new(-dw.v_max, dw.v_max, config.v_reso),
        }
    }

    pub fn len(&self) -> usize {
        self.v.len() * self.omega.len() * self.v_lateral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Control at enumeration index `k`
    pub fn control(&self, k: usize) -> DwaControl {
        let nl = self.v_lateral.len();
        let nw = self.omega.len();
        self.control_at(k / (nw * nl), (k / nl) % nw, k % nl)
    }

    fn control_at(&self, i: usize, j: usize, l: usize) -> DwaControl {
        DwaControl::new(self.v.at(i), self.omega.at(j), self.v_lateral.at(l))
    }
}

/// Minimum-cost search for one planning cycle
pub struct CandidateSearch<'a, M: ?Sized> {
    config: &'a DwaConfig,
    predictor: TrajectoryPredictor,
    evaluator: CostEvaluator<'a, M>,
}

impl<'a, M> CandidateSearch<'a, M>
where
    M: NearestObstacleMap + Sync + ?Sized,
{
    pub fn new(config: &'a DwaConfig, goal: Point2D, map: &'a M) -> Self {
        Self {
            config,
            predictor: TrajectoryPredictor::new(),
            evaluator: CostEvaluator::new(config, goal, map),
        }
    }

    fn limit(&self, grid: &CandidateGrid) -> usize {
        match self.config.max_candidates {
            Some(cap) => grid.len().min(cap),
            None => grid.len(),
        }
    }

    fn score(&self, state: &DwaState, control: DwaControl) -> Candidate {
        let trajectory = self.predictor.predict(state, &control, self.config);
        let cost = self.evaluator.evaluate(&trajectory);
        Candidate { control, trajectory, cost }
    }

    /// Search with the parallel backend when it is compiled in
    pub fn search(&self, state: &DwaState, dw: &DynamicWindow) -> SearchOutcome {
        #[cfg(feature = "parallel")]
        {
            self.search_parallel(state, dw)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.search_sequential(state, dw)
        }
    }

    pub fn search_sequential(&self, state: &DwaState, dw: &DynamicWindow) -> SearchOutcome {
        let grid = CandidateGrid::new(dw, self.config);
        let limit = self.limit(&grid);

        let mut best: Option<Candidate> = None;
        let mut evaluated = 0;
        let indices = iproduct!(0..grid.v.len(), 0..grid.omega.len(), 0..grid.v_lateral.len());
        for (i, j, l) in indices.take(limit) {
            let candidate = self.score(state, grid.control_at(i, j, l));
            evaluated += 1;
            if !candidate.cost.is_finite() {
                continue;
            }
            let improves = match &best {
                Some(b) => candidate.cost < b.cost,
                None => true,
            };
            if improves {
                best = Some(candidate);
            }
        }

        debug!("scored {} of {} candidates", evaluated, grid.len());
        SearchOutcome::from_best(best, state, evaluated)
    }

    #[cfg(feature = "parallel")]
    pub fn search_parallel(&self, state: &DwaState, dw: &DynamicWindow) -> SearchOutcome {
        let grid = CandidateGrid::new(dw, self.config);
        let limit = self.limit(&grid);

        let best = (0..limit)
            .into_par_iter()
            .map(|k| (k, self.score(state, grid.control(k))))
            .filter(|(_, c)| c.cost.is_finite())
            .min_by_key(|(k, c)| (OrderedFloat(c.cost), *k))
            .map(|(_, c)| c);

        debug!("scored {} of {} candidates in parallel", limit, grid.len());
        SearchOutcome::from_best(best, state, limit)
    }
}
