use thiserror::Error;

/// Errors surfaced by ring construction and resizing.
/// All of them are detected before any structural mutation takes place,
/// a failing call leaves the ring exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompError {
    #[error("invalid coordinate input: {0}")]
    InvalidInput(String),

    #[error(
        "target of {target} vertices is unreachable (initial: {n_initial}, live: {n_live}), the ring must retain between 1 and {n_initial} vertices"
    )]
    TargetUnreachable {
        target: usize,
        n_initial: usize,
        n_live: usize,
    },

    #[error("nothing to restore, the undo stack is empty")]
    EmptyUndoStack,
}
