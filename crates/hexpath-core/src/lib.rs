//! **hexpath-core** — Foundational types for the hexpath pathfinding engine.
//!
//! This crate provides the pieces shared between the engine and its hosts:
//! the [`Coord`] grid coordinate, the read-only [`TileGrid`] map contract
//! (with the owned [`WeightGrid`] implementation), and the injected
//! [`TimeSource`] capability used for time-budgeted search steps.

pub mod coord;
pub mod grid;
pub mod time;

pub use coord::Coord;
pub use grid::{TileGrid, WeightGrid};
pub use time::{ManualClock, MonotonicClock, TimeSource};
