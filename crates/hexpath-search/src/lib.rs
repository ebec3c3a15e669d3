//! Incremental, time-budgeted A* pathfinding over weighted hex tile grids.
//!
//! The engine is driven by a host (map editor, simulator) that owns the
//! grid data and the scheduling cadence. A search never blocks the host
//! beyond a caller-supplied time budget per step:
//!
//! ```
//! use std::time::Duration;
//! use hexpath_core::{Coord, WeightGrid};
//! use hexpath_search::{Pathfinder, SearchStatus};
//!
//! let grid = WeightGrid::new(3, 3, 1);
//! let mut pf = Pathfinder::new();
//! pf.initialize(&grid);
//! pf.enter(Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! while pf.update(Duration::from_millis(2)) == SearchStatus::Searching {
//!     // hand control back to the host between slices
//! }
//! assert!(pf.is_done());
//! ```
//!
//! Module map:
//! - [`graph`] — static search graph built once per loaded grid
//! - [`frontier`] — indexed min-heap open set with arbitrary removal
//! - [`engine`] — the time-sliced search state machine
//! - [`neighbors`] — row-parity hex adjacency
//! - [`traits`] — pluggable cost/heuristic strategies

pub mod distance;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod neighbors;
pub mod observer;
pub mod traits;

pub use distance::euclidean;
pub use engine::{DEFAULT_WEIGHT_FACTOR, Pathfinder, SearchStatus};
pub use error::SearchError;
pub use frontier::Frontier;
pub use graph::{NodeId, TileGraph};
pub use neighbors::{are_adjacent, hex_neighbors, hex_offsets};
pub use observer::PathObserver;
pub use traits::{CostModel, Euclidean};
