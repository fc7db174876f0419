//! Ordered playlist store
//!
//! Insertion order is navigation order. The playlist is mutated only by
//! `append`; tracks are never removed or reordered.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::{Track, TrackId};

/// Navigation direction for neighbor lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the playlist
    Next,
    /// Towards the start of the playlist
    Previous,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Ordered, append-only collection of tracks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a playlist from a seed list
    ///
    /// # Errors
    /// Returns `CoreError::DuplicateTrack` if two seed tracks share an id
    pub fn from_tracks(tracks: Vec<Track>) -> Result<Self> {
        let mut playlist = Self::new();
        for track in tracks {
            playlist.append(track)?;
        }
        Ok(playlist)
    }

    /// Append a track at the end
    ///
    /// # Errors
    /// Returns `CoreError::DuplicateTrack` if the id is already present
    pub fn append(&mut self, track: Track) -> Result<()> {
        if self.find_index(&track.id).is_some() {
            return Err(CoreError::DuplicateTrack(track.id));
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Position of a track by id, O(n)
    pub fn find_index(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Look up a track by id
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.find_index(id).map(|i| &self.tracks[i])
    }

    /// The neighbor of a track in the given direction, wrapping both ways
    ///
    /// # Errors
    /// Returns `CoreError::TrackNotFound` if the id is absent or the
    /// playlist is empty
    pub fn neighbor(&self, id: &TrackId, direction: Direction) -> Result<&Track> {
        if self.tracks.is_empty() {
            return Err(CoreError::TrackNotFound(id.clone()));
        }
        let index = self
            .find_index(id)
            .ok_or_else(|| CoreError::TrackNotFound(id.clone()))?;
        let len = self.tracks.len() as isize;
        let next = (index as isize + direction.offset()).rem_euclid(len) as usize;
        Ok(&self.tracks[next])
    }

    /// First track, if any
    pub fn first(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over tracks in playlist order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// All tracks in playlist order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
