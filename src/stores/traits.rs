//! Collaborator contracts
//!
//! The service only sees these traits; concrete stores are picked from the
//! settings at startup.

use crate::error::{CatalogError, CreditError, QueueError};
use crate::models::{Album, Page, Track};

/// Read-only source of albums and tracks
pub trait Discography: Send + Sync {
    /// Albums sorted ascending by id
    fn list_albums(&self, page: Option<&Page>) -> Result<Vec<Album>, CatalogError>;

    /// Tracks of one album in catalog order
    fn list_tracks(&self, album_id: &str, page: Option<&Page>)
        -> Result<Vec<Track>, CatalogError>;

    /// A single track by its `AA-TT` id
    fn get_track(&self, track_id: &str) -> Result<Track, CatalogError>;
}

/// Spendable play credits
pub trait CreditLedger: Send + Sync {
    fn add(&self, credits: u64);

    /// Take `credits` away, leaving the balance untouched when it is too low
    fn remove(&self, credits: u64) -> Result<(), CreditError>;

    fn balance(&self) -> u64;
}

/// FIFO of track ids waiting to be played
pub trait PlaybackQueue: Send + Sync {
    fn enqueue(&self, track_id: &str) -> Result<(), QueueError>;

    /// Remove and return the oldest track id
    fn dequeue(&self) -> Result<String, QueueError>;

    /// Oldest track id without removing it
    fn peek(&self) -> Result<String, QueueError>;

    fn len(&self) -> usize;

    /// Copy of the queued ids, oldest first
    fn snapshot(&self) -> Vec<String>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that knows which track is playing right now
pub trait CurrentTrack: Send + Sync {
    /// Id of the playing track, `""` when nothing is playing
    fn current_track_id(&self) -> String;
}
