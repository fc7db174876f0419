//! Core types for playback control

use aria_core::TrackId;
use serde::{Deserialize, Serialize};

/// Playback state
///
/// One explicit struct per component: this is everything the controller
/// mutates. `current_track_id` is a weak reference into the playlist, never
/// an owning link, so playlist growth can never dangle playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Id of the "now playing" track, if any
    pub current_track_id: Option<TrackId>,

    /// Playback intent: true while the user wants audio running
    pub is_playing: bool,

    /// Elapsed time in seconds, `<= duration` once the duration is known
    pub current_time: f64,

    /// Track duration in seconds; 0.0 until the engine reports it
    pub duration: f64,

    /// Volume, clamped to [0.0, 1.0]
    pub volume: f64,

    /// Number of track starts recorded so far
    pub played_count: u64,
}

impl PlaybackState {
    /// Create a fresh state with the given initial volume
    pub fn new(volume: f64) -> Self {
        Self {
            current_track_id: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: volume.clamp(0.0, 1.0),
            played_count: 0,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(PlaybackConfig::default().volume)
    }
}

/// Coarse controller phase derived from state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPhase {
    /// No current track
    Idle,

    /// Current track set, engine has not confirmed it yet
    Loading,

    /// Engine confirmed, intent is play
    Playing,

    /// Engine confirmed, intent is pause
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Track starts between interstitials (default: 20, minimum 1)
    pub ad_interval: u32,

    /// Initial volume (0.0-1.0, default: 0.75)
    pub volume: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            ad_interval: 20,
            volume: 0.75,
        }
    }
}

/// Format a position in seconds as `m:ss` for display
///
/// Non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
