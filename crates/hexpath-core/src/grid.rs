//! The [`TileGrid`] adapter contract and a simple owned implementation.
//!
//! The search engine never owns map data; it queries dimensions and per-cell
//! traversal weights through [`TileGrid`]. A weight of `0` marks a cell as
//! impassable, any other value as passable.

use crate::coord::Coord;

/// Read-only view of a weighted tile map.
///
/// Implemented by the host's map structure. The engine treats the grid as
/// immutable for the duration of a search session.
pub trait TileGrid {
    /// Number of rows in the grid.
    fn rows(&self) -> i32;

    /// Number of columns in the grid.
    fn cols(&self) -> i32;

    /// Traversal weight of the cell at `c`. `0` means impassable.
    ///
    /// Out-of-bounds coordinates must return `0`.
    fn weight(&self, c: Coord) -> u32;

    /// Whether `c` lies inside the grid.
    #[inline]
    fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows() && c.col >= 0 && c.col < self.cols()
    }
}

/// An owned, flat-buffer [`TileGrid`] for hosts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightGrid {
    rows: i32,
    cols: i32,
    weights: Vec<u32>,
}

impl WeightGrid {
    /// Create a grid of the given dimensions with every cell set to `fill`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32, fill: u32) -> Self {
        let r = rows.max(0);
        let c = cols.max(0);
        Self {
            rows: r,
            cols: c,
            weights: vec![fill; (r as usize) * (c as usize)],
        }
    }

    /// Build a grid from row slices. All rows must have equal length.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let r = rows.len() as i32;
        let c = rows.first().map_or(0, |row| row.len()) as i32;
        debug_assert!(rows.iter().all(|row| row.len() as i32 == c));
        Self {
            rows: r,
            cols: c,
            weights: rows.concat(),
        }
    }

    /// Set the weight at `c`. No-op if `c` is out of bounds.
    pub fn set_weight(&mut self, c: Coord, weight: u32) {
        if let Some(i) = self.index(c) {
            self.weights[i] = weight;
        }
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols {
            Some((c.row as usize) * (self.cols as usize) + (c.col as usize))
        } else {
            None
        }
    }
}

impl TileGrid for WeightGrid {
    #[inline]
    fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    fn weight(&self, c: Coord) -> u32 {
        self.index(c).map_or(0, |i| self.weights[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_uniformly() {
        let g = WeightGrid::new(2, 3, 1);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(g.weight(Coord::new(row, col)), 1);
            }
        }
    }

    #[test]
    fn out_of_bounds_weight_is_zero() {
        let g = WeightGrid::new(2, 2, 5);
        assert_eq!(g.weight(Coord::new(-1, 0)), 0);
        assert_eq!(g.weight(Coord::new(0, 2)), 0);
        assert_eq!(g.weight(Coord::new(2, 0)), 0);
        assert!(!g.contains(Coord::new(2, 0)));
        assert!(g.contains(Coord::new(1, 1)));
    }

    #[test]
    fn from_rows_and_set_weight() {
        let mut g = WeightGrid::from_rows(&[&[1, 0], &[2, 3]]);
        assert_eq!(g.weight(Coord::new(0, 1)), 0);
        assert_eq!(g.weight(Coord::new(1, 0)), 2);
        g.set_weight(Coord::new(0, 1), 9);
        assert_eq!(g.weight(Coord::new(0, 1)), 9);
        // Out-of-bounds set is ignored.
        g.set_weight(Coord::new(5, 5), 7);
        assert_eq!(g.weight(Coord::new(5, 5)), 0);
    }

    #[test]
    fn negative_dimensions_clamp_to_empty() {
        let g = WeightGrid::new(-3, 4, 1);
        assert_eq!(g.rows(), 0);
        assert_eq!(g.weight(Coord::ZERO), 0);
    }
}
