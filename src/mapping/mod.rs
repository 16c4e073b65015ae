// Mapping module

pub mod obstacle_grid;

pub use obstacle_grid::*;
