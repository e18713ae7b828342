use thiserror::Error;

/// Errors surfaced by the retrieval core. The core is pure and CPU-bound,
/// so the only failure mode is rejecting malformed caller input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Empty or whitespace-only document id or text. The index is left
    /// untouched when this is returned.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
