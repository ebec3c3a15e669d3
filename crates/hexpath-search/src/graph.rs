//! Static search graph built from a [`TileGrid`].
//!
//! One node per passable cell, edges for every passable hex neighbor. Nodes
//! live in a flat arena indexed by [`NodeId`]; a coordinate map resolves
//! cells to node ids. Rebuilding replaces the whole arena, so no edges can
//! dangle across map loads.

use std::collections::HashMap;

use hexpath_core::{Coord, TileGrid};

use crate::neighbors::{are_adjacent, hex_neighbors};

/// Index of a node in the graph arena.
pub type NodeId = usize;

/// A vertex of the search graph.
#[derive(Debug)]
pub struct Node {
    cell: Coord,
    edges: Vec<NodeId>,
}

/// The static search graph for one loaded grid.
#[derive(Debug, Default)]
pub struct TileGraph {
    nodes: Vec<Node>,
    index: HashMap<Coord, NodeId>,
}

impl TileGraph {
    /// Build the graph in one pass over `grid`.
    ///
    /// The first sweep allocates a node per nonzero-weight cell; the second
    /// connects each node to its passable hex neighbors. Out-of-bounds and
    /// impassable neighbors are skipped, not errors.
    pub fn build<G: TileGrid>(grid: &G) -> Self {
        let mut graph = TileGraph::default();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let cell = Coord::new(row, col);
                if grid.weight(cell) != 0 {
                    let id = graph.nodes.len();
                    graph.nodes.push(Node {
                        cell,
                        edges: Vec::with_capacity(6),
                    });
                    graph.index.insert(cell, id);
                }
            }
        }

        let mut edge_count = 0usize;
        for id in 0..graph.nodes.len() {
            let cell = graph.nodes[id].cell;
            for neighbor in hex_neighbors(cell) {
                if !grid.contains(neighbor) || grid.weight(neighbor) == 0 {
                    continue;
                }
                debug_assert!(are_adjacent(cell, neighbor));
                let nid = graph.index[&neighbor];
                graph.nodes[id].edges.push(nid);
                edge_count += 1;
            }
        }

        log::debug!(
            "built search graph: {} nodes, {} edges",
            graph.nodes.len(),
            edge_count
        );
        graph
    }

    /// Resolve a cell to its node id, if the cell is passable.
    #[inline]
    pub fn node_id(&self, cell: Coord) -> Option<NodeId> {
        self.index.get(&cell).copied()
    }

    /// The cell a node stands on.
    #[inline]
    pub fn cell(&self, id: NodeId) -> Coord {
        self.nodes[id].cell
    }

    /// Outgoing edges of a node, in discovery order.
    #[inline]
    pub fn edges(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].edges
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
