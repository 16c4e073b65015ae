//! Common types, traits, and error definitions for rust_dwa
//!
//! This module provides the foundational building blocks shared by
//! the obstacle grid and the planner.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
