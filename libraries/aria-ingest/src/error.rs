//! Error types for track ingestion

use thiserror::Error;

/// User-correctable validation failures
///
/// Surfaced verbatim to the user; none of these mutate the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The selected file exceeds the size limit
    #[error("File is too large. Maximum size is {limit_mb}MB.")]
    TooLarge {
        /// The limit that was exceeded, in megabytes
        limit_mb: u64,
    },

    /// The selected file is not of the expected media type
    #[error("Unsupported file type: {mime}")]
    WrongType {
        /// The rejected MIME type
        mime: String,
    },

    /// Title, artist, or the audio file is missing at commit time
    #[error("Please fill in title, artist, and select an audio file.")]
    MissingFields,
}

/// Ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// A validation failure, user-correctable
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An upload was rejected; the pending form is retained for retry
    #[error("Upload failed: {0}")]
    Upload(anyhow::Error),

    /// Description generation was rejected
    #[error("Description generation failed: {0}")]
    Description(anyhow::Error),

    /// Playlist invariant violation, a programming error
    #[error(transparent)]
    Core(#[from] aria_core::CoreError),
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;
