//! Jukebox service
//!
//! Composes the catalog, the credit ledger, the playback queue and the
//! player into the operations callers see.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::credits::dollars_to_credits;
use crate::error::{QueueError, ServiceError, ServiceResult};
use crate::models::{Album, Charge, Page, Track};
use crate::stores::{CreditLedger, CurrentTrack, Discography, PlaybackQueue};

/// Credits spent per queued track
const CREDITS_PER_TRACK: u64 = 1;

/// Main domain logic for the jukebox
pub struct JukeboxService {
    discography: Arc<dyn Discography>,
    queue: Arc<dyn PlaybackQueue>,
    current: Arc<dyn CurrentTrack>,
    credits: Arc<dyn CreditLedger>,
}

impl JukeboxService {
    pub fn new(
        discography: Arc<dyn Discography>,
        queue: Arc<dyn PlaybackQueue>,
        current: Arc<dyn CurrentTrack>,
        credits: Arc<dyn CreditLedger>,
    ) -> Self {
        Self {
            discography,
            queue,
            current,
            credits,
        }
    }

    /// Track the player is on right now, if any
    pub fn current_track(&self) -> ServiceResult<Option<Track>> {
        let track_id = self.current.current_track_id();
        if track_id.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.discography.get_track(&track_id)?))
    }

    /// Track waiting at the head of the queue, if any
    pub fn next_track(&self) -> ServiceResult<Option<Track>> {
        let track_id = match self.queue.peek() {
            Ok(id) => id,
            Err(QueueError::Empty) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(self.discography.get_track(&track_id)?))
    }

    pub fn list_albums(&self, page: Option<&Page>) -> ServiceResult<Vec<Album>> {
        Ok(self.discography.list_albums(page)?)
    }

    pub fn list_album_tracks(
        &self,
        album_id: &str,
        page: Option<&Page>,
    ) -> ServiceResult<Vec<Track>> {
        Ok(self.discography.list_tracks(album_id, page)?)
    }

    pub fn get_track(&self, track_id: &str) -> ServiceResult<Track> {
        Ok(self.discography.get_track(track_id)?)
    }

    /// Convert a deposit into credits and add them in one ledger call.
    ///
    /// Fractional amounts are truncated to whole dollars and the currency is
    /// not converted. Returns the credits added.
    pub fn add_balance(&self, charge: &Charge) -> ServiceResult<u64> {
        let dollars = charge
            .whole_dollars()
            .ok_or(ServiceError::InvalidCharge(charge.amount))?;
        let credits = dollars_to_credits(dollars);
        self.credits.add(credits);
        info!(
            amount = charge.amount,
            currency = %charge.currency,
            credits,
            "Added credits"
        );
        Ok(credits)
    }

    /// Ids waiting to be played, oldest first
    pub fn queued_tracks(&self) -> Vec<String> {
        self.queue.snapshot()
    }

    pub fn balance(&self) -> u64 {
        self.credits.balance()
    }

    /// Spend a credit and put the track at the back of the queue.
    ///
    /// The track is resolved before any credit is touched. If the queue
    /// refuses the track the credit is refunded and the queue error returned.
    pub fn enqueue_track(&self, track_id: &str) -> ServiceResult<()> {
        self.discography.get_track(track_id)?;

        if let Err(e) = self.credits.remove(CREDITS_PER_TRACK) {
            debug!(track_id, "Rejected enqueue: {}", e);
            return Err(ServiceError::NoCredits);
        }

        if let Err(e) = self.queue.enqueue(track_id) {
            self.credits.add(CREDITS_PER_TRACK);
            warn!(track_id, "Enqueue failed, credit refunded: {}", e);
            return Err(e.into());
        }

        info!(
            track_id,
            balance = self.credits.balance(),
            queued = self.queue.len(),
            "Track queued"
        );
        Ok(())
    }
}
