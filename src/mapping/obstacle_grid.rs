//! Nearest-obstacle grid
//!
//! A fixed-extent grid over the arena where every cell stores the
//! position of the static obstacle closest to that cell. The grid is
//! built offline from obstacle points, persisted with bincode and
//! loaded once before planning. After construction it is read-only,
//! so a single instance can be shared by any number of planners.
//!
//! Cells are addressed `(row, col)` with the row following `y` and the
//! column following `x`. [`ObstacleGrid::cell_index`] is the only place
//! that converts world coordinates into that layout.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::common::{NearestObstacleMap, PlannerError, PlannerResult, Point2D};

/// Default arena rows (y extent 5 m)
pub const DEFAULT_ROWS: usize = 50;
/// Default arena columns (x extent 8 m)
pub const DEFAULT_COLS: usize = 80;
/// Default cell size [m]
pub const DEFAULT_RESOLUTION: f64 = 0.1;

// Absorbs representation error such as 0.3 * 10.0 landing just below 3.
const INDEX_EPS: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleGrid {
    rows: usize,
    cols: usize,
    resolution: f64,
    /// Row-major nearest obstacle per cell
    cells: Vec<Point2D>,
}

impl ObstacleGrid {
    /// Create a grid from precomputed row-major cells
    pub fn new(rows: usize, cols: usize, resolution: f64, cells: Vec<Point2D>) -> PlannerResult<Self> {
        let grid = Self { rows, cols, resolution, cells };
        grid.validate()?;
        Ok(grid)
    }

    /// Build the grid by brute-force nearest search over `obstacles`
    ///
    /// Each cell is represented by its lower-left corner
    /// `(col * resolution, row * resolution)`.
    pub fn from_obstacles(
        obstacles: &[Point2D],
        rows: usize,
        cols: usize,
        resolution: f64,
    ) -> PlannerResult<Self> {
        if obstacles.is_empty() {
            return Err(PlannerError::InvalidGrid(
                "at least one obstacle is required".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let y = row as f64 * resolution;
            for col in 0..cols {
                let x = col as f64 * resolution;
                cells.push(nearest_point(Point2D::new(x, y), obstacles));
            }
        }

        info!(
            "built {}x{} obstacle grid from {} obstacles",
            rows,
            cols,
            obstacles.len()
        );
        Self::new(rows, cols, resolution, cells)
    }

    /// Load a grid persisted by [`ObstacleGrid::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let grid: ObstacleGrid = bincode::deserialize_from(reader)?;
        grid.validate()?;
        info!(
            "loaded {}x{} obstacle grid from {}",
            grid.rows,
            grid.cols,
            path.display()
        );
        Ok(grid)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> PlannerResult<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Covered extent `(width, height)` in meters
    pub fn extent(&self) -> (f64, f64) {
        (self.cols as f64 * self.resolution, self.rows as f64 * self.resolution)
    }

    /// Map a world position to `(row, col)`, clamped to the grid
    pub fn cell_index(&self, point: Point2D) -> (usize, usize) {
        let row = clamp_index(point.y / self.resolution, self.rows);
        let col = clamp_index(point.x / self.resolution, self.cols);
        (row, col)
    }

    /// Stored nearest obstacle of a cell
    pub fn cell(&self, row: usize, col: usize) -> Option<Point2D> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    fn validate(&self) -> PlannerResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PlannerError::InvalidGrid(format!(
                "grid must be non-empty, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(PlannerError::InvalidGrid(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if self.cells.len() != self.rows * self.cols {
            return Err(PlannerError::InvalidGrid(format!(
                "expected {} cells, got {}",
                self.rows * self.cols,
                self.cells.len()
            )));
        }
        if let Some(i) = self.cells.iter().position(|c| !c.is_finite()) {
            return Err(PlannerError::InvalidGrid(format!(
                "cell {} holds a non-finite obstacle",
                i
            )));
        }
        Ok(())
    }
}

impl NearestObstacleMap for ObstacleGrid {
    fn nearest_obstacle(&self, point: Point2D) -> Point2D {
        let (row, col) = self.cell_index(point);
        self.cells[row * self.cols + col]
    }
}

fn clamp_index(scaled: f64, len: usize) -> usize {
    let idx = (scaled + INDEX_EPS).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(len - 1)
    }
}

fn nearest_point(p: Point2D, obstacles: &[Point2D]) -> Point2D {
    let mut best = obstacles[0];
    let mut dmin = f64::INFINITY;
    for o in obstacles {
        let d = p.distance(o);
        if dmin >= d {
            dmin = d;
            best = *o;
        }
    }
    best
}
