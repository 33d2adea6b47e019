use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the game (tuning data, file loading).
///
/// The simulation itself never fails: degenerate cases resolve to
/// "nothing happens this frame".
#[derive(Debug, Error)]
pub enum Error {
    /// A tuning value is out of its valid range.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed or serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Propagated I/O errors (reading tuning files).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
