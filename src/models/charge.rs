//! Money deposited in exchange for play credits

use serde::{Deserialize, Serialize};

/// A deposit to be converted into credits.
///
/// The currency is carried along but never converted; every amount is
/// treated as whole dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub amount: f64,
    pub currency: String,
}

impl Charge {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Whole dollars in the charge, fractions are dropped.
    ///
    /// Returns `None` for negative or non-finite amounts.
    pub fn whole_dollars(&self) -> Option<u64> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return None;
        }
        Some(self.amount.trunc() as u64)
    }
}
