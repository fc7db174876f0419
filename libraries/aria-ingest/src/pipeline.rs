//! Ingestion pipeline orchestration
//!
//! Validates candidate files, derives default metadata, and turns a
//! completed form into a playlist track through a concurrent two-file
//! upload with all-or-nothing commit semantics.

use std::sync::Arc;

use aria_core::{BlobStore, DescriptionGenerator, Playlist, Track, TrackId};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result, ValidationError};
use crate::metadata;
use crate::preview::PreviewRegistry;
use crate::types::{CandidateFile, PendingUpload};

/// Maximum accepted audio file size in bytes (15 MB)
pub const MAX_AUDIO_BYTES: usize = 15 * 1024 * 1024;

/// Maximum accepted cover image size in bytes (5 MB)
pub const MAX_COVER_BYTES: usize = 5 * 1024 * 1024;

const MAX_AUDIO_MB: u64 = 15;
const MAX_COVER_MB: u64 = 5;

/// Track ingestion pipeline
///
/// Owns the transient upload form and the collaborator handles. All
/// operations take `&mut self`, so between awaited collaborator calls the
/// form state transitions run to completion.
pub struct IngestPipeline {
    blob_store: Arc<dyn BlobStore>,
    descriptions: Arc<dyn DescriptionGenerator>,
    pending: PendingUpload,
    previews: PreviewRegistry,
}

impl IngestPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(blob_store: Arc<dyn BlobStore>, descriptions: Arc<dyn DescriptionGenerator>) -> Self {
        Self {
            blob_store,
            descriptions,
            pending: PendingUpload::default(),
            previews: PreviewRegistry::new(),
        }
    }

    /// The transient upload form
    pub fn pending(&self) -> &PendingUpload {
        &self.pending
    }

    /// The live cover preview URI, if any
    pub fn preview(&self) -> Option<&str> {
        self.previews.active()
    }

    // ===== Form fields =====

    /// Set the track title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.pending.title = title.into();
    }

    /// Set the artist name
    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.pending.artist = artist.into();
    }

    /// Set the release date
    pub fn set_release_date(&mut self, release_date: impl Into<String>) {
        self.pending.release_date = release_date.into();
    }

    /// Set the genre
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.pending.genre = genre.into();
    }

    // ===== File selection =====

    /// Validate and select an audio file
    ///
    /// Rejects files over 15 MB, then non-audio MIME types. On success the
    /// title (and, for `"Artist - Title"` names, the artist) is derived
    /// from the file name. A rejection clears any previously selected
    /// audio file.
    pub fn select_audio(
        &mut self,
        file: CandidateFile,
    ) -> std::result::Result<(), ValidationError> {
        if file.size() > MAX_AUDIO_BYTES {
            return Err(self.reject_audio(ValidationError::TooLarge { limit_mb: MAX_AUDIO_MB }));
        }
        if !file.mime.starts_with("audio/") {
            return Err(self.reject_audio(ValidationError::WrongType {
                mime: file.mime.clone(),
            }));
        }

        let (title, artist) = metadata::derive_from_name(&file.name);
        debug!(name = %file.name, %title, "audio file accepted");
        self.pending.title = title;
        if let Some(artist) = artist {
            self.pending.artist = artist;
        }
        self.pending.audio = Some(file);
        self.pending.validation_error = None;
        Ok(())
    }

    /// Validate and select a cover image
    ///
    /// Rejects non-image MIME types, then files over 5 MB. On success a
    /// local preview URI is issued and the preview it replaces is
    /// released.
    pub fn select_cover(
        &mut self,
        file: CandidateFile,
    ) -> std::result::Result<(), ValidationError> {
        if !file.mime.starts_with("image/") {
            return Err(self.reject_cover(ValidationError::WrongType {
                mime: file.mime.clone(),
            }));
        }
        if file.size() > MAX_COVER_BYTES {
            return Err(self.reject_cover(ValidationError::TooLarge { limit_mb: MAX_COVER_MB }));
        }

        debug!(name = %file.name, "cover file accepted");
        let preview = self.previews.create();
        self.pending.cover_preview = Some(preview);
        self.pending.cover = Some(file);
        self.pending.validation_error = None;
        Ok(())
    }

    /// Discard the selected audio file
    pub fn remove_audio(&mut self) {
        self.pending.audio = None;
        self.pending.validation_error = None;
    }

    /// Discard the selected cover and release its preview
    pub fn remove_cover(&mut self) {
        self.previews.release();
        self.pending.cover = None;
        self.pending.cover_preview = None;
        self.pending.validation_error = None;
    }

    // ===== Description =====

    /// Generate a description from the current title/artist
    ///
    /// The generator returns an empty string when either field is blank.
    pub async fn generate_description(&mut self) -> Result<String> {
        let description = self
            .descriptions
            .generate(&self.pending.title, &self.pending.artist)
            .await
            .map_err(IngestError::Description)?;
        self.pending.description = description;
        Ok(self.pending.description.clone())
    }

    // ===== Commit =====

    /// Upload the selected files and append the resulting track
    ///
    /// Requires a non-blank title, a non-blank artist, and a validated
    /// audio file. The audio upload and (when present) the cover upload
    /// run concurrently and BOTH are awaited before any playlist mutation;
    /// a rejection of either fails the whole commit and leaves the
    /// playlist unmodified. On failure the form is retained so the user
    /// can retry without re-selecting files; on success it is cleared and
    /// the new track is returned for auto-select.
    pub async fn commit(&mut self, playlist: &mut Playlist) -> Result<Track> {
        let missing = self.pending.audio.is_none()
            || self.pending.title.trim().is_empty()
            || self.pending.artist.trim().is_empty();
        if missing {
            self.pending.validation_error = Some(ValidationError::MissingFields);
            return Err(ValidationError::MissingFields.into());
        }

        self.pending.is_committing = true;
        self.pending.validation_error = None;

        let uploads = self.run_uploads().await;
        self.pending.is_committing = false;

        let (audio_uri, cover_uri) = match uploads {
            Ok(uris) => uris,
            Err(err) => {
                warn!(%err, "commit aborted, pending form retained");
                return Err(err);
            }
        };

        let title = self.pending.title.clone();
        let cover_art = match cover_uri {
            Some(uri) => uri,
            // No cover file was supplied at all
            None => Track::placeholder_cover(&title),
        };
        let track = Track {
            id: TrackId::generate(),
            title,
            artist: self.pending.artist.clone(),
            audio_src: audio_uri,
            cover_art,
            description: none_if_blank(&self.pending.description),
            release_date: none_if_blank(&self.pending.release_date),
            genre: none_if_blank(&self.pending.genre),
            added_at: Utc::now(),
        };

        playlist.append(track.clone())?;
        info!(track = %track.id, title = %track.title, "track ingested");

        self.reset();
        Ok(track)
    }

    /// Start both uploads together and wait for both to settle
    async fn run_uploads(&self) -> Result<(String, Option<String>)> {
        let Some(audio) = self.pending.audio.as_ref() else {
            return Err(ValidationError::MissingFields.into());
        };

        let audio_fut = self.blob_store.upload(&audio.bytes, &audio.mime);
        let cover_fut = async {
            match self.pending.cover.as_ref() {
                Some(cover) => Some(self.blob_store.upload(&cover.bytes, &cover.mime).await),
                None => None,
            }
        };
        // join: a fast cover settlement never shortcuts the in-flight
        // audio upload, and vice versa
        let (audio_res, cover_res) = tokio::join!(audio_fut, cover_fut);

        let audio_uri = audio_res.map_err(IngestError::Upload)?;
        let cover_uri = match cover_res {
            Some(Ok(uri)) => Some(uri),
            Some(Err(err)) => return Err(IngestError::Upload(err)),
            None => None,
        };
        Ok((audio_uri, cover_uri))
    }

    /// Clear the whole form and release any held preview
    ///
    /// Does not cancel an upload already handed to the blob store; a
    /// straggler's result is simply never referenced.
    pub fn reset(&mut self) {
        self.previews.release();
        self.pending = PendingUpload::default();
    }

    fn reject_audio(&mut self, err: ValidationError) -> ValidationError {
        debug!(%err, "audio file rejected");
        self.pending.audio = None;
        self.pending.validation_error = Some(err.clone());
        err
    }

    fn reject_cover(&mut self, err: ValidationError) -> ValidationError {
        debug!(%err, "cover file rejected");
        self.pending.cover = None;
        self.pending.validation_error = Some(err.clone());
        err
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
