/// Track domain type
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audio track
///
/// Immutable once created: every field is fixed at construction and a track
/// is never edited in place, only replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title (non-empty)
    pub title: String,

    /// Artist name (non-empty)
    pub artist: String,

    /// Audio source URI, resolvable by the media engine
    pub audio_src: String,

    /// Cover art URI
    pub cover_art: String,

    /// Short description
    pub description: Option<String>,

    /// Release date (free-form, e.g. "2011-08-16")
    pub release_date: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// When the track was created
    pub added_at: DateTime<Utc>,
}

impl Track {
    /// Create a new track with minimal metadata
    ///
    /// The cover art defaults to the deterministic placeholder for `title`.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_src: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let cover_art = Self::placeholder_cover(&title);
        Self {
            id: TrackId::generate(),
            title,
            artist: artist.into(),
            audio_src: audio_src.into(),
            cover_art,
            description: None,
            release_date: None,
            genre: None,
            added_at: Utc::now(),
        }
    }

    /// Deterministic placeholder cover URI keyed by title
    pub fn placeholder_cover(title: &str) -> String {
        format!("https://picsum.photos/seed/{}/200", urlencoding::encode(title))
    }
}
