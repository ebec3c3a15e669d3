//! The open set: an indexed binary min-heap of graph nodes keyed by
//! estimated total path cost.
//!
//! Cost relaxation changes a queued node's priority after insertion, so the
//! heap tracks each node's slot in a position map and supports removing an
//! arbitrary element in O(log n). Ties between equal costs are broken by
//! heap order, which is deliberately unspecified.

use crate::graph::NodeId;

const NOT_QUEUED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: NodeId,
    cost: f32,
}

/// Min-priority queue of node ids ordered by ascending cost.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    pos: Vec<usize>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the position map for a graph of `node_count` nodes and empty
    /// the queue. Called whenever a new graph is installed.
    pub fn reset(&mut self, node_count: usize) {
        self.heap.clear();
        self.pos.clear();
        self.pos.resize(node_count, NOT_QUEUED);
    }

    /// Insert `id` with the given cost. The id must not already be queued.
    pub fn push(&mut self, id: NodeId, cost: f32) {
        debug_assert!(!self.contains(id), "node {id} pushed twice");
        let slot = self.heap.len();
        self.heap.push(Entry { id, cost });
        self.pos[id] = slot;
        self.sift_up(slot);
    }

    /// Remove and return the id with the smallest cost.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().unwrap();
        self.pos[min.id] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.pos[self.heap[0].id] = 0;
            self.sift_down(0);
        }
        Some(min.id)
    }

    /// Remove a specific id, wherever it sits in the heap.
    ///
    /// Returns `false` if the id was not queued (a relaxed node may already
    /// have been expanded).
    pub fn remove(&mut self, id: NodeId) -> bool {
        let slot = self.pos[id];
        if slot == NOT_QUEUED {
            return false;
        }
        self.pos[id] = NOT_QUEUED;
        let last = self.heap.len() - 1;
        self.heap.swap(slot, last);
        self.heap.pop();
        if slot < self.heap.len() {
            self.pos[self.heap[slot].id] = slot;
            let slot = self.sift_up(slot);
            self.sift_down(slot);
        }
        true
    }

    /// Whether `id` is currently queued.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.pos.get(id).is_some_and(|&slot| slot != NOT_QUEUED)
    }

    /// Number of queued nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all queued nodes, keeping the position map sized.
    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.pos[entry.id] = NOT_QUEUED;
        }
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].cost.total_cmp(&self.heap[parent].cost).is_lt() {
                self.heap.swap(slot, parent);
                self.pos[self.heap[slot].id] = slot;
                slot = parent;
            } else {
                break;
            }
        }
        self.pos[self.heap[slot].id] = slot;
        slot
    }

    fn sift_down(&mut self, mut slot: usize) -> usize {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.heap.len()
                && self.heap[right].cost.total_cmp(&self.heap[left].cost).is_lt()
            {
                child = right;
            }
            if self.heap[child].cost.total_cmp(&self.heap[slot].cost).is_lt() {
                self.heap.swap(slot, child);
                self.pos[self.heap[slot].id] = slot;
                slot = child;
            } else {
                break;
            }
        }
        self.pos[self.heap[slot].id] = slot;
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontier(n: usize) -> Frontier {
        let mut f = Frontier::new();
        f.reset(n);
        f
    }

    #[test]
    fn pops_in_ascending_cost_order() {
        let mut f = frontier(8);
        f.push(3, 2.5);
        f.push(0, 0.5);
        f.push(7, 4.0);
        f.push(1, 1.0);
        f.push(5, 0.1);
        let order: Vec<_> = std::iter::from_fn(|| f.pop_min()).collect();
        assert_eq!(order, vec![5, 0, 1, 3, 7]);
        assert!(f.is_empty());
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut f = frontier(4);
        assert_eq!(f.pop_min(), None);
        f.push(2, 1.0);
        assert_eq!(f.pop_min(), Some(2));
        assert_eq!(f.pop_min(), None);
    }

    #[test]
    fn remove_non_extremal_element() {
        let mut f = frontier(8);
        for (id, cost) in [(0, 1.0f32), (1, 2.0), (2, 3.0), (3, 4.0), (4, 5.0)] {
            f.push(id, cost);
        }
        assert!(f.remove(2));
        assert!(!f.contains(2));
        assert_eq!(f.len(), 4);
        let order: Vec<_> = std::iter::from_fn(|| f.pop_min()).collect();
        assert_eq!(order, vec![0, 1, 3, 4]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut f = frontier(4);
        f.push(1, 1.0);
        assert!(!f.remove(3));
        assert_eq!(f.len(), 1);
        // Removing an already popped id is also a no-op.
        assert_eq!(f.pop_min(), Some(1));
        assert!(!f.remove(1));
    }

    #[test]
    fn remove_then_reinsert_cheaper_reorders() {
        let mut f = frontier(8);
        f.push(0, 1.0);
        f.push(1, 5.0);
        f.push(2, 3.0);
        // Relax node 1 below everything else.
        assert!(f.remove(1));
        f.push(1, 0.5);
        assert_eq!(f.pop_min(), Some(1));
        assert_eq!(f.pop_min(), Some(0));
        assert_eq!(f.pop_min(), Some(2));
    }

    #[test]
    fn clear_empties_and_allows_reuse() {
        let mut f = frontier(4);
        f.push(0, 1.0);
        f.push(1, 2.0);
        f.clear();
        assert!(f.is_empty());
        assert!(!f.contains(0));
        f.push(0, 9.0);
        assert_eq!(f.pop_min(), Some(0));
    }

    #[test]
    fn position_map_stays_consistent_under_churn() {
        let mut f = frontier(16);
        for id in 0..16 {
            f.push(id, (16 - id) as f32);
        }
        for id in (0..16).step_by(2) {
            assert!(f.remove(id));
        }
        let mut order = Vec::new();
        while let Some(id) = f.pop_min() {
            order.push(id);
        }
        // Odd ids remain, popped in descending-id order (cost = 16 - id).
        assert_eq!(order, vec![15, 13, 11, 9, 7, 5, 3, 1]);
    }
}
