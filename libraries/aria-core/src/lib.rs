//! Aria Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Aria Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, and the ordered `Playlist` store
//! - **Collaborator Traits**: `MediaEngine`, `BlobStore`, `DescriptionGenerator`
//! - **Error Handling**: `CoreError`/`Result` and the opaque `EngineError`
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{Direction, Playlist, Track};
//!
//! let mut playlist = Playlist::new();
//! let track = Track::new("Midnight City", "M83", "https://cdn.example/midnight.mp3");
//! let id = track.id.clone();
//! playlist.append(track).unwrap();
//!
//! // A single track is its own neighbor in both directions
//! assert_eq!(playlist.neighbor(&id, Direction::Next).unwrap().id, id);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, EngineError, Result};
pub use traits::{BlobStore, DescriptionGenerator, MediaEngine};
pub use types::{Direction, Playlist, Track, TrackId};
