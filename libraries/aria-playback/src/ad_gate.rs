//! Interstitial ad gate
//!
//! Counts track starts and forces a pause every Kth start, restoring the
//! previous playback intent when the ad is dismissed. Total over its inputs:
//! no operation here can fail.

use crate::types::PlaybackState;

/// Counter-driven interstitial state machine
#[derive(Debug, Clone)]
pub struct AdGate {
    /// Track starts between interstitials, at least 1
    interval: u64,

    /// Whether the interstitial is currently showing
    ad_visible: bool,

    /// Playback intent captured when the ad appeared; meaningful only while
    /// `ad_visible` is true
    was_playing_before_ad: bool,
}

impl AdGate {
    /// Create a gate that triggers every `interval` track starts
    pub fn new(interval: u32) -> Self {
        Self {
            interval: u64::from(interval.max(1)),
            ad_visible: false,
            was_playing_before_ad: false,
        }
    }

    /// Record one track start
    ///
    /// Increments the shared play counter and, on every Kth start, captures
    /// the current intent, forces a pause, and shows the ad. Returns whether
    /// the ad was triggered by this call.
    pub fn record_play(&mut self, state: &mut PlaybackState) -> bool {
        state.played_count += 1;
        if state.played_count > 0 && state.played_count % self.interval == 0 {
            self.was_playing_before_ad = state.is_playing;
            state.is_playing = false;
            self.ad_visible = true;
            return true;
        }
        false
    }

    /// Dismiss the interstitial
    ///
    /// Idempotent: a no-op when no ad is showing. Returns whether playback
    /// intent was restored.
    pub fn dismiss(&mut self, state: &mut PlaybackState) -> bool {
        if !self.ad_visible {
            return false;
        }
        self.ad_visible = false;
        if self.was_playing_before_ad {
            state.is_playing = true;
            return true;
        }
        false
    }

    /// Whether the interstitial is currently showing
    pub fn ad_visible(&self) -> bool {
        self.ad_visible
    }
}
