//! Playback controller - core orchestration
//!
//! Owns the playlist, the playback state, the ad gate, and the media engine
//! handle. Every operation mutates state first and only then pushes to the
//! engine, in a fixed order, so behavior is reproducible without a hidden
//! reactive runtime. Engine-driven calls (`on_progress`) only update local
//! state; `on_ended` may start the next track.

use aria_core::{Direction, MediaEngine, Playlist, TrackId};
use tracing::{debug, warn};

use crate::ad_gate::AdGate;
use crate::error::Result;
use crate::events::EngineEvent;
use crate::types::{PlaybackConfig, PlaybackState, PlayerPhase};

/// Central playback controller
///
/// Drives a single "now playing" track against the external media engine
/// and navigates the playlist.
pub struct PlaybackController {
    playlist: Playlist,
    state: PlaybackState,
    gate: AdGate,
    engine: Box<dyn MediaEngine>,

    // True between a track start and the first engine event for it
    awaiting_engine: bool,
}

impl PlaybackController {
    /// Create a controller over a playlist and an engine handle
    ///
    /// The configured volume is clamped and pushed to the engine right away.
    pub fn new(
        playlist: Playlist,
        mut engine: Box<dyn MediaEngine>,
        config: PlaybackConfig,
    ) -> Self {
        let volume = config.volume.clamp(0.0, 1.0);
        engine.set_volume(volume);
        Self {
            playlist,
            state: PlaybackState::new(volume),
            gate: AdGate::new(config.ad_interval),
            engine,
            awaiting_engine: false,
        }
    }

    // ===== Playback Control =====

    /// Select a track by id
    ///
    /// Re-selecting the current track behaves exactly like one
    /// `toggle_play` call and never reloads the engine. Selecting another
    /// track loads it with intent "play" and records the start with the ad
    /// gate.
    pub async fn select_track(&mut self, id: &TrackId) -> Result<()> {
        if self.state.current_track_id.as_ref() == Some(id) {
            self.flip_transport().await;
            return Ok(());
        }
        self.start_track(id).await
    }

    /// Toggle between play and pause
    ///
    /// With no current track, selects the first playlist entry; a no-op on
    /// an empty playlist.
    pub async fn toggle_play(&mut self) -> Result<()> {
        if self.state.current_track_id.is_some() {
            self.flip_transport().await;
            return Ok(());
        }
        match self.playlist.first().map(|t| t.id.clone()) {
            Some(first) => self.start_track(&first).await,
            None => Ok(()),
        }
    }

    /// Load a track and dispatch to the engine
    async fn start_track(&mut self, id: &TrackId) -> Result<()> {
        let track = self
            .playlist
            .get(id)
            .ok_or_else(|| aria_core::CoreError::TrackNotFound(id.clone()))?;
        let audio_src = track.audio_src.clone();
        debug!(track = %id, "starting track");

        self.state.current_track_id = Some(id.clone());
        self.state.is_playing = true;
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.awaiting_engine = true;

        // The gate may flip the intent back to paused before the engine
        // hears anything, so a gated start loads but never audibly plays.
        if self.gate.record_play(&mut self.state) {
            debug!(count = self.state.played_count, "interstitial triggered");
        }

        self.engine.set_source(&audio_src);
        self.engine.load();
        self.push_transport().await;
        Ok(())
    }

    /// Flip the play intent and push it to the engine
    async fn flip_transport(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        self.push_transport().await;
    }

    /// Push the current play/pause intent to the engine
    ///
    /// Engine rejections are logged and swallowed; the intent flag is left
    /// as the user set it.
    async fn push_transport(&mut self) {
        if self.state.is_playing {
            if let Err(err) = self.engine.play().await {
                warn!(%err, "engine rejected play");
            }
        } else {
            self.engine.pause();
        }
    }

    // ===== Engine Events =====

    /// Handle one inbound engine event
    pub async fn handle_event(&mut self, event: EngineEvent) -> Result<()> {
        match event {
            EngineEvent::Progress { position, duration } => {
                self.on_progress(position, duration);
                Ok(())
            }
            EngineEvent::Ended => self.on_ended().await,
        }
    }

    /// Process queued engine events in arrival order
    pub async fn drain_events<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = EngineEvent>,
    {
        for event in events {
            self.handle_event(event).await?;
        }
        Ok(())
    }

    /// Store an engine progress report
    ///
    /// Pure state update: never calls back into the engine, so progress
    /// events cannot form a feedback loop.
    pub fn on_progress(&mut self, position: f64, duration: f64) {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let mut position = if position.is_finite() { position.max(0.0) } else { 0.0 };
        if duration > 0.0 {
            position = position.min(duration);
        }
        self.state.duration = duration;
        self.state.current_time = position;
        self.awaiting_engine = false;
    }

    /// Advance to the next track after the current one ended
    ///
    /// Wraps to the first entry at the end of the playlist. A no-op with no
    /// current track or an empty playlist.
    pub async fn on_ended(&mut self) -> Result<()> {
        let Some(current) = self.state.current_track_id.clone() else {
            return Ok(());
        };
        if self.playlist.find_index(&current).is_none() {
            return Ok(());
        }
        let next = self.playlist.neighbor(&current, Direction::Next)?.id.clone();
        self.select_track(&next).await
    }

    // ===== Seek & Volume =====

    /// Seek to a fraction of the track, clamped to [0, 1]
    ///
    /// A no-op while the duration is unknown. The elapsed time is updated
    /// optimistically, before the engine confirms the jump.
    pub fn seek(&mut self, fraction: f64) {
        if self.state.duration <= 0.0 {
            return;
        }
        let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        let target = fraction * self.state.duration;
        self.engine.seek(target);
        self.state.current_time = target;
    }

    /// Set the volume, clamped to [0, 1]; state and engine in the same step
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 0.0 };
        self.state.volume = volume;
        self.engine.set_volume(volume);
    }

    // ===== Interstitial =====

    /// Dismiss the interstitial, resuming playback if it interrupted any
    pub async fn dismiss_ad(&mut self) {
        if self.gate.dismiss(&mut self.state) {
            self.push_transport().await;
        }
    }

    /// Whether the interstitial is currently showing
    pub fn ad_visible(&self) -> bool {
        self.gate.ad_visible()
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Coarse phase derived from state
    pub fn phase(&self) -> PlayerPhase {
        if self.state.current_track_id.is_none() {
            PlayerPhase::Idle
        } else if self.awaiting_engine {
            PlayerPhase::Loading
        } else if self.state.is_playing {
            PlayerPhase::Playing
        } else {
            PlayerPhase::Paused
        }
    }

    /// The playlist navigated by this controller
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Mutable playlist access, for appending ingested tracks
    pub fn playlist_mut(&mut self) -> &mut Playlist {
        &mut self.playlist
    }
}
