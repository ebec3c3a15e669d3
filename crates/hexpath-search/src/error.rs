use thiserror::Error;

/// Errors surfaced by session setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A session operation was attempted before `initialize` built a graph.
    #[error("no graph loaded; call initialize first")]
    NotInitialized,
    /// A start or goal coordinate maps to no graph node (out of range or
    /// impassable).
    #[error("coordinate ({row}, {col}) is not a passable cell")]
    InvalidCoordinate { row: i32, col: i32 },
}
