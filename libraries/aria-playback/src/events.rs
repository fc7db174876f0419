//! Inbound engine events
//!
//! The media engine reports back through a typed event queue instead of ad
//! hoc callbacks. Events are processed one at a time in arrival order, which
//! keeps every state transition run-to-completion.

use serde::{Deserialize, Serialize};

/// Events emitted by the media engine towards the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Periodic progress report for the current source
    Progress {
        /// Elapsed time in seconds
        position: f64,
        /// Total duration in seconds (0.0 while unknown)
        duration: f64,
    },

    /// The current source played to its end
    Ended,
}
