//! Aria Player - Playback Control
//!
//! Platform-agnostic playback control for Aria Player.
//!
//! This crate provides:
//! - A playback controller driving an external media engine by URI
//! - Wrap-around playlist navigation (next on end-of-track)
//! - A counter-driven interstitial gate (every Kth track start)
//! - Seek by fraction, clamped volume, `m:ss` time formatting
//!
//! # Architecture
//!
//! `aria-playback` never renders audio itself. The engine is any
//! [`aria_core::MediaEngine`] implementation; commands flow out through the
//! controller's operations and progress/end-of-track flow back in as
//! [`EngineEvent`]s, processed one at a time in arrival order.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_core::{EngineError, MediaEngine, Playlist, Track};
//! use aria_playback::{EngineEvent, PlaybackConfig, PlaybackController};
//!
//! struct MyEngine { /* platform audio handle */ }
//!
//! #[async_trait::async_trait]
//! impl MediaEngine for MyEngine {
//!     fn set_source(&mut self, _uri: &str) {}
//!     fn load(&mut self) {}
//!     async fn play(&mut self) -> Result<(), EngineError> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position_secs: f64) {}
//!     fn set_volume(&mut self, _volume: f64) {}
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> aria_playback::Result<()> {
//! let mut playlist = Playlist::new();
//! let track = Track::new("Intro", "The xx", "https://cdn.example/intro.mp3");
//! let id = track.id.clone();
//! playlist.append(track)?;
//!
//! let mut controller =
//!     PlaybackController::new(playlist, Box::new(MyEngine {}), PlaybackConfig::default());
//! controller.select_track(&id).await?;
//! controller.handle_event(EngineEvent::Progress { position: 1.0, duration: 180.0 }).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ad_gate;
mod controller;
mod error;
mod events;
pub mod types;

// Public exports
pub use ad_gate::AdGate;
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::EngineEvent;
pub use types::{format_time, PlaybackConfig, PlaybackState, PlayerPhase};
