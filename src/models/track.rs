//! Track model

use serde::{Deserialize, Serialize};

/// A playable track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track id in `AA-TT` form
    pub id: String,
    /// Track title
    pub title: String,
    /// Duration as `MM:SS` or `H:MM:SS`
    pub duration: String,
    /// Where the audio lives
    pub media_url: String,
}

impl Track {
    pub fn new(id: String, title: String, duration: String, media_url: String) -> Self {
        Self {
            id,
            title,
            duration,
            media_url,
        }
    }
}

