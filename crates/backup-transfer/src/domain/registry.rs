//! # Backup Registry
//!
//! One optional backup address per holder. Entries are only ever written
//! by the holder themselves (enforced by the service layer, which passes
//! the authenticated caller as the key) and are never deleted: the
//! protocol defines no unregister operation.

use super::entities::SelfBackupPolicy;
use super::errors::TransferError;
use shared_types::{is_zero_address, Address};
use std::collections::HashMap;

/// Keyed store mapping holder -> registered backup address.
#[derive(Clone, Debug, Default)]
pub struct BackupRegistry {
    entries: HashMap<Address, Address>,
}

impl BackupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `backup` for `holder`, overwriting any previous entry.
    ///
    /// The zero address is never a valid backup. `backup == holder` is
    /// rejected only under `SelfBackupPolicy::Reject`. On failure the
    /// previous entry (if any) is untouched.
    pub fn register(
        &mut self,
        holder: Address,
        backup: Address,
        policy: SelfBackupPolicy,
    ) -> Result<(), TransferError> {
        if is_zero_address(&backup) {
            return Err(TransferError::InvalidBackupAddress);
        }
        if policy == SelfBackupPolicy::Reject && backup == holder {
            return Err(TransferError::InvalidBackupAddress);
        }

        self.entries.insert(holder, backup);
        Ok(())
    }

    /// Look up the registered backup for `holder` - O(1).
    pub fn backup_of(&self, holder: &Address) -> Option<Address> {
        self.entries.get(holder).copied()
    }
}
