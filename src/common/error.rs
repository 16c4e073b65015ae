//! Error types for rust_dwa

use thiserror::Error;

/// Main error type for the planner
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Configuration file could not be parsed
    #[error("Config format error: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),
    /// Obstacle grid is structurally invalid
    #[error("Invalid obstacle grid: {0}")]
    InvalidGrid(String),
    /// Obstacle grid file could not be decoded
    #[error("Obstacle grid format error: {0}")]
    GridFormat(#[from] bincode::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
