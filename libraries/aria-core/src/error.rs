/// Core error types for Aria Player
use thiserror::Error;

use crate::types::TrackId;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Aria Player
///
/// These variants signal broken internal invariants, not user mistakes:
/// valid core usage never produces them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Track not found in the playlist
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Track id already present in the playlist
    #[error("Duplicate track: {0}")]
    DuplicateTrack(TrackId),
}

/// Playback failure reported by the media engine
///
/// Opaque to the core: the engine owns the failure detail, the controller
/// only logs it.
#[derive(Error, Debug, Clone)]
#[error("Media engine error: {0}")]
pub struct EngineError(String);

impl EngineError {
    /// Create a new engine error
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
