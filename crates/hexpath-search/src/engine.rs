//! The time-sliced search engine.
//!
//! [`Pathfinder`] runs weighted A* over a [`TileGraph`] in budgeted slices:
//! each [`update`](Pathfinder::update) call expands nodes until the frontier
//! drains, the goal is reached, or the time budget elapses, then hands
//! control back to the host with all session state retained for the next
//! call. Only one session is active at a time; `enter` invalidates any
//! previous session.

use std::time::Duration;

use hexpath_core::{Coord, MonotonicClock, TileGrid, TimeSource};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{NodeId, TileGraph};
use crate::observer::PathObserver;
use crate::traits::{CostModel, Euclidean};

/// Heuristic and step-cost multiplier used by default.
///
/// Greater than 1, so the search is bounded-suboptimal (weighted A*) rather
/// than strictly admissible, trading path quality for speed.
pub const DEFAULT_WEIGHT_FACTOR: f32 = 1.2;

const NO_PARENT: NodeId = usize::MAX;

/// Where the engine's session state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// No active session.
    Idle,
    /// Frontier non-empty, goal not yet reached; `update` makes progress.
    Searching,
    /// Goal reached; the solution is available.
    Found,
    /// Frontier drained without reaching the goal: no path exists.
    Exhausted,
}

/// Per-node, per-session bookkeeping. At most one live record per node.
///
/// A slot belongs to the current session iff its generation matches the
/// engine's; stale slots are treated as undiscovered, so starting a session
/// resets the discovered set in O(1).
#[derive(Debug, Clone, Copy)]
struct SearchRecord {
    parent: NodeId,
    given: f32,
    heuristic: f32,
    final_cost: f32,
    generation: u32,
}

impl Default for SearchRecord {
    fn default() -> Self {
        Self {
            parent: NO_PARENT,
            given: 0.0,
            heuristic: 0.0,
            final_cost: 0.0,
            generation: 0,
        }
    }
}

/// Incremental, time-budgeted A* pathfinder over a weighted hex grid.
///
/// Lifecycle: [`initialize`](Self::initialize) once per loaded grid,
/// [`enter`](Self::enter) to start a session, [`update`](Self::update)
/// repeatedly from the host loop, [`exit`](Self::exit) to end the session,
/// [`shutdown`](Self::shutdown) before the grid is unloaded.
pub struct Pathfinder<C: CostModel = Euclidean> {
    graph: Option<TileGraph>,
    records: Vec<SearchRecord>,
    generation: u32,
    frontier: Frontier,
    goal: NodeId,
    solution: Vec<Coord>,
    status: SearchStatus,
    weight_factor: f32,
    cost: C,
    clock: Box<dyn TimeSource>,
    observer: Option<Box<dyn PathObserver>>,
}

impl Pathfinder<Euclidean> {
    /// Create an engine with the default Euclidean cost model.
    pub fn new() -> Self {
        Self::with_cost_model(Euclidean)
    }
}

impl Default for Pathfinder<Euclidean> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CostModel> Pathfinder<C> {
    /// Create an engine with a custom cost model.
    pub fn with_cost_model(cost: C) -> Self {
        Self {
            graph: None,
            records: Vec::new(),
            generation: 0,
            frontier: Frontier::new(),
            goal: NO_PARENT,
            solution: Vec::new(),
            status: SearchStatus::Idle,
            weight_factor: DEFAULT_WEIGHT_FACTOR,
            cost,
            clock: Box::new(MonotonicClock::new()),
            observer: None,
        }
    }

    /// Replace the time source used for budget polling.
    pub fn set_time_source(&mut self, clock: Box<dyn TimeSource>) {
        self.clock = clock;
    }

    /// Install an observer notified of expansions, discoveries and
    /// relaxations.
    pub fn set_observer(&mut self, observer: Box<dyn PathObserver>) {
        self.observer = Some(observer);
    }

    /// Remove the observer, returning it.
    pub fn clear_observer(&mut self) -> Option<Box<dyn PathObserver>> {
        self.observer.take()
    }

    /// The multiplier applied to both heuristic and step cost.
    pub fn weight_factor(&self) -> f32 {
        self.weight_factor
    }

    /// Override the weight factor. `1.0` makes the search strictly
    /// admissible A*.
    pub fn set_weight_factor(&mut self, factor: f32) {
        self.weight_factor = factor;
    }

    /// Current state of the session state machine.
    ///
    /// Unlike [`is_done`](Self::is_done), this distinguishes a search that
    /// drained its frontier without a path ([`SearchStatus::Exhausted`])
    /// from one still in progress.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Build the search graph for `grid`. Must be called once per loaded
    /// grid before any session; calling it again fully replaces the
    /// previous graph and discards any in-flight session.
    pub fn initialize<G: TileGrid>(&mut self, grid: &G) {
        let graph = TileGraph::build(grid);
        self.records.clear();
        self.records.resize(graph.len(), SearchRecord::default());
        self.frontier.reset(graph.len());
        self.generation = 0;
        self.graph = Some(graph);
        self.solution.clear();
        self.status = SearchStatus::Idle;
    }

    /// Begin a search session from `start` to `goal`.
    ///
    /// Fails fast if no graph is loaded or either coordinate maps to no
    /// passable cell. Any previous session's frontier, discovered set and
    /// solution are discarded.
    pub fn enter(&mut self, start: Coord, goal: Coord) -> Result<(), SearchError> {
        let graph = self.graph.as_ref().ok_or(SearchError::NotInitialized)?;
        let start_id = graph
            .node_id(start)
            .ok_or(SearchError::InvalidCoordinate {
                row: start.row,
                col: start.col,
            })?;
        let goal_id = graph.node_id(goal).ok_or(SearchError::InvalidCoordinate {
            row: goal.row,
            col: goal.col,
        })?;

        self.solution.clear();
        self.frontier.clear();
        self.generation = self.generation.wrapping_add(1);

        let heuristic = self.cost.estimate(start, goal);
        self.records[start_id] = SearchRecord {
            parent: NO_PARENT,
            given: 0.0,
            heuristic,
            final_cost: heuristic * self.weight_factor,
            generation: self.generation,
        };
        self.frontier.push(start_id, self.records[start_id].final_cost);
        self.goal = goal_id;
        self.status = SearchStatus::Searching;
        log::debug!("search session: {start} -> {goal}");
        Ok(())
    }

    /// Advance the active session for at most `budget` of clock time.
    ///
    /// Expands frontier nodes best-first until the goal is popped (the path
    /// is extracted and [`SearchStatus::Found`] returned immediately), the
    /// frontier drains ([`SearchStatus::Exhausted`]), or the budget
    /// elapses (returns [`SearchStatus::Searching`]; call again to resume).
    /// The budget is polled after each complete node expansion, never
    /// mid-expansion. A no-op outside an active session.
    pub fn update(&mut self, budget: Duration) -> SearchStatus {
        if self.status != SearchStatus::Searching {
            return self.status;
        }
        let slice_start = self.clock.now();
        loop {
            let Some(current) = self.frontier.pop_min() else {
                log::debug!("frontier exhausted, goal unreachable");
                self.status = SearchStatus::Exhausted;
                return self.status;
            };

            if current == self.goal {
                self.extract_path(current);
                self.status = SearchStatus::Found;
                return self.status;
            }

            self.expand(current);

            if self.clock.now().saturating_sub(slice_start) >= budget {
                // Budget spent: suspend, keeping all session state.
                return self.status;
            }
        }
    }

    /// Whether a solution is available.
    ///
    /// True iff the goal was reached. Note this stays false both while the
    /// search is in progress and after it exhausted the frontier without a
    /// path; use [`status`](Self::status) to tell those apart.
    pub fn is_done(&self) -> bool {
        !self.solution.is_empty()
    }

    /// The solution path, start to goal inclusive. Empty until the search
    /// completes successfully.
    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    /// End the session, discarding frontier and discovered set. The graph
    /// is retained for further sessions on the same grid.
    pub fn exit(&mut self) {
        self.frontier.clear();
        self.solution.clear();
        self.status = SearchStatus::Idle;
    }

    /// Release the graph entirely. Call before the host unloads the grid;
    /// a new `initialize` is required afterwards.
    pub fn shutdown(&mut self) {
        self.exit();
        self.graph = None;
        self.records.clear();
        self.frontier.reset(0);
        self.goal = NO_PARENT;
    }

    /// Expand one node: examine every outgoing edge, discovering new nodes
    /// and relaxing already discovered ones when a strictly cheaper path
    /// appears.
    fn expand(&mut self, current: NodeId) {
        let Some(graph) = self.graph.as_ref() else {
            return;
        };
        let current_cell = graph.cell(current);
        let current_given = self.records[current].given;
        if let Some(obs) = self.observer.as_deref_mut() {
            obs.expanded(current_cell);
        }

        for &nid in graph.edges(current) {
            let ncell = graph.cell(nid);
            let tentative =
                current_given + self.cost.step_cost(current_cell, ncell) * self.weight_factor;

            if self.records[nid].generation == self.generation {
                // Already discovered: relax only on strict improvement.
                if tentative < self.records[nid].given {
                    // May already have been expanded; remove is a no-op then.
                    self.frontier.remove(nid);
                    let rec = &mut self.records[nid];
                    rec.given = tentative;
                    rec.final_cost = tentative + rec.heuristic * self.weight_factor;
                    rec.parent = current;
                    let final_cost = rec.final_cost;
                    self.frontier.push(nid, final_cost);
                    if let Some(obs) = self.observer.as_deref_mut() {
                        obs.relaxed(ncell);
                    }
                }
            } else {
                let heuristic = self.cost.estimate(ncell, graph.cell(self.goal));
                self.records[nid] = SearchRecord {
                    parent: current,
                    given: tentative,
                    heuristic,
                    final_cost: tentative + heuristic * self.weight_factor,
                    generation: self.generation,
                };
                self.frontier.push(nid, self.records[nid].final_cost);
                if let Some(obs) = self.observer.as_deref_mut() {
                    obs.discovered(ncell);
                }
            }
        }
    }

    /// Walk parent links from the goal record back to the start and reverse
    /// into a start→goal sequence.
    fn extract_path(&mut self, goal: NodeId) {
        let Some(graph) = self.graph.as_ref() else {
            return;
        };
        let mut id = goal;
        while id != NO_PARENT {
            self.solution.push(graph.cell(id));
            id = self.records[id].parent;
        }
        self.solution.reverse();
    }
}
