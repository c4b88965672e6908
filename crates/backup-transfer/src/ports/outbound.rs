//! # Outbound Ports (Driven Ports / SPI)
//!
//! The ledger collaborator this subsystem consumes. Balances are owned
//! by the ledger; the authorizer never sees them except through this
//! trait.

use shared_types::{Address, U256};
use thiserror::Error;

/// Error from ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The debited account's balance is below the requested amount
    #[error("Exceeds user balance")]
    InsufficientBalance,
}

/// Gateway to the balance/ledger subsystem.
///
/// `transfer` is the only state-mutating call the authorizer makes.
pub trait Ledger: Send + Sync {
    /// Current balance of `holder` (pure read).
    fn balance_of(&self, holder: &Address) -> U256;

    /// Move `amount` from `from` to `to`.
    ///
    /// # Errors
    /// * `LedgerError::InsufficientBalance` - `from` balance below `amount`
    fn transfer(&self, from: Address, to: Address, amount: U256) -> Result<(), LedgerError>;

    /// The ledger's current block number, recorded in transfer events.
    fn block_number(&self) -> u64;
}
