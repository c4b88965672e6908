//! # Nonce Store
//!
//! One replay-protection counter per holder, implicitly 0 until first
//! consumed. The counter advances by exactly 1 per successful delegated
//! transfer and never moves on a failed attempt; the service layer
//! guarantees this by verifying signatures against `current()` and calling
//! `consume()` only after every other check has passed.

use shared_types::Address;
use std::collections::HashMap;

/// Keyed store mapping holder -> next-expected signature nonce.
#[derive(Clone, Debug, Default)]
pub struct NonceStore {
    counters: HashMap<Address, u64>,
}

impl NonceStore {
    /// Create an empty nonce store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nonce for `holder` - O(1), default 0.
    pub fn current(&self, holder: &Address) -> u64 {
        self.counters.get(holder).copied().unwrap_or(0)
    }

    /// Advance the counter for `holder`, returning the pre-increment value
    /// (the nonce the just-verified signature was bound to).
    pub fn consume(&mut self, holder: Address) -> u64 {
        let counter = self.counters.entry(holder).or_insert(0);
        let used = *counter;
        *counter += 1;
        used
    }
}
