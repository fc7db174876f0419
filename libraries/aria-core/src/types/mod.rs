//! Domain types for Aria Player

mod ids;
mod playlist;
mod track;

pub use ids::TrackId;
pub use playlist::{Direction, Playlist};
pub use track::Track;
