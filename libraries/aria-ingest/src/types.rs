//! Types for track ingestion

use crate::error::ValidationError;

/// A user-supplied file awaiting validation and upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Original file name, e.g. `"M83 - Midnight City.mp3"`
    pub name: String,

    /// MIME type as reported by the picker, e.g. `"audio/mpeg"`
    pub mime: String,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    /// Create a candidate file
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// File size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Transient upload form state
///
/// Created when the first file is selected, cleared on a successful commit
/// or an explicit reset. The cover preview URI is owned exclusively by this
/// form and released when replaced or discarded.
#[derive(Debug, Clone, Default)]
pub struct PendingUpload {
    /// Validated audio file, required for commit
    pub audio: Option<CandidateFile>,

    /// Validated cover file, optional
    pub cover: Option<CandidateFile>,

    /// Track title, derived from the file name and user-editable
    pub title: String,

    /// Artist name, derived from the file name and user-editable
    pub artist: String,

    /// Release date, free-form
    pub release_date: String,

    /// Genre, free-form
    pub genre: String,

    /// Generated description text
    pub description: String,

    /// Local preview URI for the selected cover
    pub cover_preview: Option<String>,

    /// Most recent validation failure, surfaced verbatim
    pub validation_error: Option<ValidationError>,

    /// True while a commit is in flight
    pub is_committing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_file_size() {
        let file = CandidateFile::new("song.mp3", "audio/mpeg", vec![0u8; 1024]);
        assert_eq!(file.size(), 1024);
    }
}
