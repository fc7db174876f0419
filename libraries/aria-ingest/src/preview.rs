//! Local cover preview handles
//!
//! A preview URI stands in for a locally materialized resource (the
//! original UI's object URL). Ownership is exclusive: issuing a new preview
//! releases the previous one, and at most one is live per registry.

use tracing::debug;
use uuid::Uuid;

/// Issues and releases local preview URIs
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    active: Option<String>,
}

impl PreviewRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh preview URI, releasing the previous one
    pub fn create(&mut self) -> String {
        self.release();
        let uri = format!("preview:{}", Uuid::new_v4());
        self.active = Some(uri.clone());
        uri
    }

    /// Release the live preview, if any
    pub fn release(&mut self) {
        if let Some(uri) = self.active.take() {
            debug!(%uri, "released cover preview");
        }
    }

    /// The currently live preview URI
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
