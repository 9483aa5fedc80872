//! Album model

use serde::{Deserialize, Serialize};

use super::Track;

/// An album and its ordered track listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Two-digit album id
    pub id: String,
    pub artist: String,
    pub title: String,
    /// Tracks in catalog order; the position defines the track id suffix
    pub tracks: Vec<Track>,
}

impl Album {
    /// Number of tracks on the album
    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    /// Look up a track by its 1-based position
    pub fn track_at(&self, number: usize) -> Option<&Track> {
        number.checked_sub(1).and_then(|index| self.tracks.get(index))
    }
}
