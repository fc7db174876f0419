//! Integration tests for the ingestion pipeline
//!
//! Fake blob store and description generator stand in for the external
//! collaborators; tests assert both the returned errors and the observable
//! upload traffic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use aria_core::{BlobStore, DescriptionGenerator, Playlist, Track};
use aria_ingest::{CandidateFile, IngestError, IngestPipeline, ValidationError};

const MB: usize = 1024 * 1024;

#[derive(Default)]
struct FakeBlobStore {
    uploaded: Mutex<Vec<String>>,
    fail_audio: AtomicBool,
    fail_images: AtomicBool,
}

#[async_trait::async_trait]
impl BlobStore for FakeBlobStore {
    async fn upload(&self, bytes: &[u8], mime: &str) -> anyhow::Result<String> {
        self.uploaded.lock().unwrap().push(mime.to_string());
        if mime.starts_with("audio/") && self.fail_audio.load(Ordering::Relaxed) {
            anyhow::bail!("audio upload refused");
        }
        if mime.starts_with("image/") && self.fail_images.load(Ordering::Relaxed) {
            anyhow::bail!("cover upload refused");
        }
        Ok(format!("https://blobs.example/{}/{}", mime, bytes.len()))
    }
}

impl FakeBlobStore {
    fn upload_count(&self) -> usize {
        self.uploaded.lock().unwrap().len()
    }

    fn uploaded_mimes(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

struct FakeGenerator {
    fail: bool,
}

#[async_trait::async_trait]
impl DescriptionGenerator for FakeGenerator {
    async fn generate(&self, title: &str, artist: &str) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("generator offline");
        }
        if title.trim().is_empty() || artist.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{title} by {artist}"))
    }
}

fn pipeline() -> (IngestPipeline, Arc<FakeBlobStore>) {
    pipeline_with_generator(FakeGenerator { fail: false })
}

fn pipeline_with_generator(generator: FakeGenerator) -> (IngestPipeline, Arc<FakeBlobStore>) {
    let store = Arc::new(FakeBlobStore::default());
    let pipeline = IngestPipeline::new(Arc::clone(&store) as Arc<dyn BlobStore>, Arc::new(generator));
    (pipeline, store)
}

fn file(name: &str, mime: &str, size: usize) -> CandidateFile {
    CandidateFile::new(name, mime, vec![0u8; size])
}

// ===== Validation =====

#[test]
fn oversized_audio_is_rejected() {
    let (mut pipeline, _store) = pipeline();

    let err = pipeline
        .select_audio(file("big.mp3", "audio/mpeg", 20 * MB))
        .unwrap_err();

    assert_eq!(err, ValidationError::TooLarge { limit_mb: 15 });
    assert!(pipeline.pending().audio.is_none());
    assert_eq!(pipeline.pending().validation_error, Some(err));
}

#[test]
fn non_audio_mime_is_rejected() {
    let (mut pipeline, _store) = pipeline();

    let err = pipeline
        .select_audio(file("notes.txt", "text/plain", 1024))
        .unwrap_err();

    assert_eq!(
        err,
        ValidationError::WrongType { mime: "text/plain".to_string() }
    );
    assert!(pipeline.pending().audio.is_none());
}

#[test]
fn accepted_audio_derives_artist_and_title() {
    let (mut pipeline, _store) = pipeline();

    pipeline
        .select_audio(file("M83 - Midnight City.mp3", "audio/mpeg", 10 * MB))
        .unwrap();

    assert_eq!(pipeline.pending().artist, "M83");
    assert_eq!(pipeline.pending().title, "Midnight City");
    assert!(pipeline.pending().audio.is_some());
    assert!(pipeline.pending().validation_error.is_none());
}

#[test]
fn rejection_clears_previously_selected_audio() {
    let (mut pipeline, _store) = pipeline();

    pipeline
        .select_audio(file("ok.mp3", "audio/mpeg", MB))
        .unwrap();
    pipeline
        .select_audio(file("big.mp3", "audio/mpeg", 20 * MB))
        .unwrap_err();

    assert!(pipeline.pending().audio.is_none());
}

#[test]
fn cover_type_is_checked_before_size() {
    let (mut pipeline, _store) = pipeline();

    // Oversized AND wrong type: the type failure wins
    let err = pipeline
        .select_cover(file("cover.pdf", "application/pdf", 6 * MB))
        .unwrap_err();

    assert_eq!(
        err,
        ValidationError::WrongType { mime: "application/pdf".to_string() }
    );
}

#[test]
fn oversized_cover_is_rejected() {
    let (mut pipeline, _store) = pipeline();

    let err = pipeline
        .select_cover(file("cover.png", "image/png", 6 * MB))
        .unwrap_err();

    assert_eq!(err, ValidationError::TooLarge { limit_mb: 5 });
    assert!(pipeline.pending().cover.is_none());
}

#[test]
fn selecting_a_new_cover_replaces_the_preview() {
    let (mut pipeline, _store) = pipeline();

    pipeline
        .select_cover(file("a.png", "image/png", MB))
        .unwrap();
    let first = pipeline.pending().cover_preview.clone().unwrap();

    pipeline
        .select_cover(file("b.png", "image/png", MB))
        .unwrap();
    let second = pipeline.pending().cover_preview.clone().unwrap();

    assert_ne!(first, second);
    assert_eq!(pipeline.preview(), Some(second.as_str()));
}

#[test]
fn remove_cover_releases_the_preview() {
    let (mut pipeline, _store) = pipeline();

    pipeline
        .select_cover(file("a.png", "image/png", MB))
        .unwrap();
    pipeline.remove_cover();

    assert!(pipeline.pending().cover.is_none());
    assert!(pipeline.pending().cover_preview.is_none());
    assert_eq!(pipeline.preview(), None);
}

// ===== Commit =====

#[tokio::test]
async fn commit_without_required_fields_performs_no_upload() {
    let (mut pipeline, store) = pipeline();
    let mut playlist = Playlist::new();

    // No audio selected at all
    let err = pipeline.commit(&mut playlist).await.unwrap_err();
    assert!(matches!(
        err,
        IngestError::Validation(ValidationError::MissingFields)
    ));

    // Audio selected but artist still blank
    pipeline
        .select_audio(file("Genesis.ogg", "audio/ogg", MB))
        .unwrap();
    let err = pipeline.commit(&mut playlist).await.unwrap_err();
    assert!(matches!(
        err,
        IngestError::Validation(ValidationError::MissingFields)
    ));

    assert_eq!(store.upload_count(), 0);
    assert!(playlist.is_empty());
}

#[tokio::test]
async fn commit_without_cover_uses_title_placeholder() {
    let (mut pipeline, _store) = pipeline();
    let mut playlist = Playlist::new();

    pipeline
        .select_audio(file("Echoes.mp3", "audio/mpeg", 2 * MB))
        .unwrap();
    pipeline.set_artist("Pink Floyd");

    let track = pipeline.commit(&mut playlist).await.unwrap();

    assert_eq!(track.cover_art, Track::placeholder_cover("Echoes"));
    assert_eq!(track.audio_src, format!("https://blobs.example/audio/mpeg/{}", 2 * MB));
    assert_eq!(playlist.find_index(&track.id), Some(0));

    // Success clears the form
    assert!(pipeline.pending().audio.is_none());
    assert!(pipeline.pending().title.is_empty());
    assert!(!pipeline.pending().is_committing);
}

#[tokio::test]
async fn commit_with_cover_uses_uploaded_uri() {
    let (mut pipeline, store) = pipeline();
    let mut playlist = Playlist::new();

    pipeline
        .select_audio(file("M83 - Midnight City.mp3", "audio/mpeg", 4 * MB))
        .unwrap();
    pipeline
        .select_cover(file("cover.jpg", "image/jpeg", MB))
        .unwrap();
    pipeline.set_release_date("2011-08-16");
    pipeline.set_genre("Synth-pop");

    let track = pipeline.commit(&mut playlist).await.unwrap();

    assert_eq!(track.cover_art, format!("https://blobs.example/image/jpeg/{MB}"));
    assert_eq!(track.release_date.as_deref(), Some("2011-08-16"));
    assert_eq!(track.genre.as_deref(), Some("Synth-pop"));
    assert_eq!(store.upload_count(), 2);

    // The cover preview is released on success
    assert_eq!(pipeline.preview(), None);
}

#[tokio::test]
async fn cover_rejection_fails_the_whole_commit() {
    let (mut pipeline, store) = pipeline();
    store.fail_images.store(true, Ordering::Relaxed);
    let mut playlist = Playlist::new();

    pipeline
        .select_audio(file("M83 - Midnight City.mp3", "audio/mpeg", 4 * MB))
        .unwrap();
    pipeline
        .select_cover(file("cover.jpg", "image/jpeg", MB))
        .unwrap();

    let err = pipeline.commit(&mut playlist).await.unwrap_err();

    assert!(matches!(err, IngestError::Upload(_)));
    assert!(playlist.is_empty());
    // Both uploads were attempted before the failure was reported
    let mimes = store.uploaded_mimes();
    assert!(mimes.contains(&"audio/mpeg".to_string()));
    assert!(mimes.contains(&"image/jpeg".to_string()));

    // The form is retained for retry
    assert!(pipeline.pending().audio.is_some());
    assert_eq!(pipeline.pending().title, "Midnight City");
    assert!(!pipeline.pending().is_committing);
}

#[tokio::test]
async fn audio_rejection_fails_the_commit() {
    let (mut pipeline, store) = pipeline();
    store.fail_audio.store(true, Ordering::Relaxed);
    let mut playlist = Playlist::new();

    pipeline
        .select_audio(file("Intro.mp3", "audio/mpeg", MB))
        .unwrap();
    pipeline.set_artist("The xx");

    let err = pipeline.commit(&mut playlist).await.unwrap_err();

    assert!(matches!(err, IngestError::Upload(_)));
    assert!(playlist.is_empty());
}

#[tokio::test]
async fn retry_succeeds_without_reselecting_files() {
    let (mut pipeline, store) = pipeline();
    store.fail_images.store(true, Ordering::Relaxed);
    let mut playlist = Playlist::new();

    pipeline
        .select_audio(file("M83 - Midnight City.mp3", "audio/mpeg", 4 * MB))
        .unwrap();
    pipeline
        .select_cover(file("cover.jpg", "image/jpeg", MB))
        .unwrap();

    pipeline.commit(&mut playlist).await.unwrap_err();

    store.fail_images.store(false, Ordering::Relaxed);
    let track = pipeline.commit(&mut playlist).await.unwrap();

    assert_eq!(playlist.len(), 1);
    assert_eq!(track.title, "Midnight City");
}

// ===== Description =====

#[tokio::test]
async fn description_is_stored_and_committed() {
    let (mut pipeline, _store) = pipeline();
    let mut playlist = Playlist::new();

    pipeline
        .select_audio(file("M83 - Midnight City.mp3", "audio/mpeg", MB))
        .unwrap();

    let description = pipeline.generate_description().await.unwrap();
    assert_eq!(description, "Midnight City by M83");

    let track = pipeline.commit(&mut playlist).await.unwrap();
    assert_eq!(track.description.as_deref(), Some("Midnight City by M83"));
}

#[tokio::test]
async fn blank_inputs_yield_empty_description() {
    let (mut pipeline, _store) = pipeline();

    pipeline.set_title("Echoes");
    // Artist left blank
    let description = pipeline.generate_description().await.unwrap();

    assert_eq!(description, "");
    assert!(pipeline.pending().description.is_empty());
}

#[tokio::test]
async fn generator_rejection_is_reported() {
    let (mut pipeline, _store) = pipeline_with_generator(FakeGenerator { fail: true });

    pipeline.set_title("Echoes");
    pipeline.set_artist("Pink Floyd");
    let err = pipeline.generate_description().await.unwrap_err();

    assert!(matches!(err, IngestError::Description(_)));
    assert!(pipeline.pending().description.is_empty());
}

// ===== Reset =====

#[test]
fn reset_clears_form_and_preview() {
    let (mut pipeline, _store) = pipeline();

    pipeline
        .select_audio(file("M83 - Midnight City.mp3", "audio/mpeg", MB))
        .unwrap();
    pipeline
        .select_cover(file("cover.png", "image/png", MB))
        .unwrap();
    pipeline.set_genre("Synth-pop");

    pipeline.reset();

    assert!(pipeline.pending().audio.is_none());
    assert!(pipeline.pending().cover.is_none());
    assert!(pipeline.pending().title.is_empty());
    assert!(pipeline.pending().genre.is_empty());
    assert_eq!(pipeline.preview(), None);
}
