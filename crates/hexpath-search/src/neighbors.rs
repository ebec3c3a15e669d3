//! Row-parity hex adjacency on an offset-coordinate grid.
//!
//! The map stores hex cells in rectangular (row, col) offset coordinates
//! with odd rows shifted half a cell to the right. Every cell therefore has
//! up to six neighbors: the two same-row cells, the two same-column cells,
//! and one diagonal pair whose column offset flips with row parity (column
//! −1 on even rows, +1 on odd rows).

use hexpath_core::Coord;

/// The six neighbor offsets (drow, dcol) of a cell in row `row`.
#[inline]
pub fn hex_offsets(row: i32) -> [(i32, i32); 6] {
    let dcol = if row % 2 == 0 { -1 } else { 1 };
    [
        (0, -1),
        (0, 1),
        (-1, 0),
        (1, 0),
        (-1, dcol),
        (1, dcol),
    ]
}

/// The six neighbor coordinates of `c` (some may fall outside the grid).
#[inline]
pub fn hex_neighbors(c: Coord) -> [Coord; 6] {
    hex_offsets(c.row).map(|(dr, dc)| c.shift(dr, dc))
}

/// Whether two cells are hex-adjacent. Symmetric in its arguments.
pub fn are_adjacent(a: Coord, b: Coord) -> bool {
    let dr = b.row - a.row;
    let dc = b.col - a.col;
    match (dr, dc) {
        (0, -1) | (0, 1) | (-1, 0) | (1, 0) => true,
        (-1, d) | (1, d) => d == if a.row % 2 == 0 { -1 } else { 1 },
        _ => false,
    }
}
