use hexpath_core::Coord;

/// Optional hooks for visualizing search progress.
///
/// Hosts that color visited tiles implement this; the engine invokes the
/// hooks as an observable side effect only, never as part of the
/// algorithm's correctness.
pub trait PathObserver {
    /// A cell was popped from the frontier and its edges examined.
    fn expanded(&mut self, _cell: Coord) {}

    /// A cell was discovered for the first time this session.
    fn discovered(&mut self, _cell: Coord) {}

    /// A previously discovered cell was reached by a cheaper path.
    fn relaxed(&mut self, _cell: Coord) {}
}
