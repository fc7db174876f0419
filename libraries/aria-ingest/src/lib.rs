//! Aria Player - Track Ingestion
//!
//! This crate turns two candidate files (audio plus optional cover art)
//! into a new playlist track.
//!
//! # Features
//!
//! - Size and MIME validation (15 MB audio, 5 MB cover)
//! - Default title/artist derivation from `"Artist - Title.ext"` names
//! - Local cover preview handles with exclusive ownership
//! - Optional description generation via an external collaborator
//! - Concurrent two-file upload with all-or-nothing commit
//!
//! # Architecture
//!
//! - `pipeline`: orchestration of the validate → upload → commit flow
//! - `metadata`: filename-derived metadata defaults
//! - `preview`: local cover preview registry
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aria_core::{BlobStore, DescriptionGenerator, Playlist};
//! use aria_ingest::{CandidateFile, IngestPipeline};
//!
//! # async fn example(
//! #     blob_store: Arc<dyn BlobStore>,
//! #     descriptions: Arc<dyn DescriptionGenerator>,
//! # ) -> aria_ingest::Result<()> {
//! let mut playlist = Playlist::new();
//! let mut pipeline = IngestPipeline::new(blob_store, descriptions);
//!
//! let audio = CandidateFile::new("M83 - Midnight City.mp3", "audio/mpeg", vec![0; 1024]);
//! pipeline.select_audio(audio)?;
//!
//! // Both uploads settle before the playlist grows
//! let track = pipeline.commit(&mut playlist).await?;
//! assert_eq!(playlist.find_index(&track.id), Some(playlist.len() - 1));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod metadata;
mod pipeline;
mod preview;
mod types;

pub use error::{IngestError, Result, ValidationError};
pub use pipeline::{IngestPipeline, MAX_AUDIO_BYTES, MAX_COVER_BYTES};
pub use preview::PreviewRegistry;
pub use types::{CandidateFile, PendingUpload};

// Filename-derived metadata defaults are part of the public surface so
// hosts can pre-fill forms without selecting a file first.
pub use metadata::derive_from_name;
