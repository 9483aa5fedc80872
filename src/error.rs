//! Error types for the jukebox
//!
//! Each collaborator has its own error enum; the service folds them into
//! [`ServiceError`] for callers.

use thiserror::Error;

/// Errors raised by a catalog repository.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Album id is not exactly two decimal digits.
    #[error("{0} is an invalid album id")]
    InvalidAlbumId(String),

    /// Track id is not of the form `AA-TT`.
    #[error("{0} is an invalid track id")]
    InvalidTrackId(String),

    /// Page cursor is not a non-negative integer offset.
    #[error("{0} is an invalid cursor")]
    InvalidCursor(String),

    /// Well-formed id with no matching album or track.
    #[error("{0} not found")]
    NotFound(String),

    /// Backing data could not be loaded.
    #[error("failed to load catalog: {0}")]
    Load(String),
}

/// Errors raised by a playback queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,

    #[error("queue is full ({0} tracks)")]
    Full(usize),
}

/// Errors raised by a credit ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreditError {
    #[error("not enough credits: requested {requested}, available {available}")]
    Insufficient { requested: u64, available: u64 },
}

/// Errors surfaced by the jukebox service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("not enough credits available to queue track")]
    NoCredits,

    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Charge amount is negative or not a number.
    #[error("invalid charge amount: {0}")]
    InvalidCharge(f64),
}

/// Errors raised by the playback engine lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("player is already running")]
    AlreadyRunning,

    #[error("player has been stopped")]
    Stopped,
}

/// No collaborator could be built from the given settings.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Load(#[from] config::ConfigError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
