//! Credit store - in-memory credit balance

use parking_lot::Mutex;

use super::CreditLedger;
use crate::error::CreditError;

/// Keeps the credit count in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    credits: Mutex<u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CreditLedger for InMemoryLedger {
    fn add(&self, credits: u64) {
        let mut balance = self.credits.lock();
        *balance = balance.saturating_add(credits);
    }

    fn remove(&self, credits: u64) -> Result<(), CreditError> {
        let mut balance = self.credits.lock();
        if credits > *balance {
            return Err(CreditError::Insufficient {
                requested: credits,
                available: *balance,
            });
        }
        *balance -= credits;
        Ok(())
    }

    fn balance(&self) -> u64 {
        *self.credits.lock()
    }
}
