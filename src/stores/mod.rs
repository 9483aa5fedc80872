//! Stores backing the jukebox: the album catalog, the credit ledger and the
//! playback queue, plus the contracts the service consumes them through.

mod catalog_store;
mod credit_store;
mod queue_store;
mod traits;

use anyhow::Result;
use std::sync::Arc;

pub use catalog_store::JsonCatalog;
pub use credit_store::InMemoryLedger;
pub use queue_store::ListQueue;
pub use traits::{CreditLedger, CurrentTrack, Discography, PlaybackQueue};

#[cfg(test)]
pub(crate) use catalog_store::sample_catalog;

use crate::config::Settings;
use crate::error::ConfigurationError;

const IN_MEMORY_QUEUE: &str = "mem://in-memory-queue";
const IN_MEMORY_LEDGER: &str = "mem://in-memory-store";

/// Build the catalog repository named by `discography.url`
pub fn catalog_from_config(settings: &Settings) -> Result<Arc<dyn Discography>> {
    let url = settings.discography.url.as_str();
    if url.starts_with("file://") && url.ends_with(".json") {
        let catalog = JsonCatalog::open(url)?;
        tracing::info!("Loaded {} albums from {}", catalog.count(), catalog.url());
        return Ok(Arc::new(catalog));
    }
    Err(ConfigurationError::Invalid(format!("no discography defined for {:?}", url)).into())
}

/// Build the playback queue named by `queue.url`
pub fn queue_from_config(settings: &Settings) -> Result<Arc<ListQueue>, ConfigurationError> {
    if settings.queue.url == IN_MEMORY_QUEUE {
        return Ok(Arc::new(ListQueue::new(settings.queue.size)));
    }
    Err(ConfigurationError::Invalid(format!(
        "unknown queue configuration {:?}",
        settings.queue.url
    )))
}

/// Build the credit ledger named by `credit.url`
pub fn ledger_from_config(
    settings: &Settings,
) -> Result<Arc<dyn CreditLedger>, ConfigurationError> {
    if settings.credit.url == IN_MEMORY_LEDGER {
        return Ok(Arc::new(InMemoryLedger::new()));
    }
    Err(ConfigurationError::Invalid(format!(
        "unknown credit repository configuration {:?}",
        settings.credit.url
    )))
}
