//! In-memory implementation of the `Ledger` port, for tests and demos.

use crate::ports::outbound::{Ledger, LedgerError};
use parking_lot::RwLock;
use shared_types::{Address, U256};
use std::collections::HashMap;

/// Balance table plus a block counter. `mint` and `advance_block` exist
/// for fixture bootstrapping; the authorizer only uses the `Ledger` trait
/// surface.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, U256>>,
    block: RwLock<u64>,
}

impl InMemoryLedger {
    /// Create an empty ledger at block 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `holder` out of thin air.
    pub fn mint(&self, holder: Address, amount: U256) {
        let mut balances = self.balances.write();
        let entry = balances.entry(holder).or_insert_with(U256::zero);
        *entry += amount;
    }

    /// Advance the block counter by one, returning the new block number.
    pub fn advance_block(&self) -> u64 {
        let mut block = self.block.write();
        *block += 1;
        *block
    }
}

impl Ledger for InMemoryLedger {
    fn balance_of(&self, holder: &Address) -> U256 {
        self.balances
            .read()
            .get(holder)
            .copied()
            .unwrap_or_else(U256::zero)
    }

    fn transfer(&self, from: Address, to: Address, amount: U256) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();

        let from_balance = balances.get(&from).copied().unwrap_or_else(U256::zero);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        balances.insert(from, from_balance - amount);
        let to_balance = balances.entry(to).or_insert_with(U256::zero);
        *to_balance += amount;
        Ok(())
    }

    fn block_number(&self) -> u64 {
        *self.block.read()
    }
}
