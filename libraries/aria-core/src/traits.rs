/// Core traits for Aria Player
///
/// The collaborator contracts consumed by the playback and ingest crates.
/// Implementations live outside the core (platform audio element, object
/// storage client, text-generation client); the core only awaits them.
use async_trait::async_trait;

use crate::error::EngineError;

/// Media engine trait
///
/// Drives an external audio renderer by URI. Commands are one-directional:
/// the engine reports progress and end-of-track separately, as events
/// delivered to the playback controller.
#[async_trait]
pub trait MediaEngine: Send {
    /// Point the engine at a new source URI
    fn set_source(&mut self, uri: &str);

    /// Ask the engine to (re)load the current source
    fn load(&mut self);

    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the engine cannot start playback
    async fn play(&mut self) -> std::result::Result<(), EngineError>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to a position in the current source, in seconds
    fn seek(&mut self, position_secs: f64);

    /// Set the engine volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, volume: f64);
}

/// Blob store trait
///
/// Uploads raw bytes and returns a publicly resolvable URI. Failures are
/// opaque to the core.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload a byte buffer with its MIME type
    ///
    /// # Errors
    /// Returns an opaque error if the upload is rejected
    async fn upload(&self, bytes: &[u8], mime: &str) -> anyhow::Result<String>;
}

/// Description generator trait
///
/// Synthesizes a short track description from title and artist.
/// Implementations return an empty string when either input is blank.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Generate a description for the given title/artist pair
    ///
    /// # Errors
    /// Returns an opaque error if generation fails
    async fn generate(&self, title: &str, artist: &str) -> anyhow::Result<String>;
}
