//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the backup-transfer subsystem. The `caller` /
//! `submitter` arguments are the authenticated identity of the party
//! invoking the operation; callers of this trait are responsible for
//! that authentication (in an on-chain deployment it is the transaction
//! sender).

use crate::domain::entities::EcdsaSignature;
use crate::domain::errors::TransferError;
use shared_types::{Address, U256};

/// Primary backup-transfer API.
///
/// Implementations must be thread-safe (`Send + Sync`), but the protocol
/// semantics assume calls touching one holder are serialized: each call
/// completes fully before the next begins.
pub trait BackupTransferApi: Send + Sync {
    /// Register (or replace) the caller's backup address.
    ///
    /// # Errors
    /// * `InvalidBackupAddress` - `backup` is the zero address, or equals
    ///   the caller under a rejecting self-backup policy
    fn register_backup_address(
        &self,
        caller: Address,
        backup: Address,
    ) -> Result<(), TransferError>;

    /// The backup registered for `holder`, if any.
    fn backup_address(&self, holder: Address) -> Option<Address>;

    /// The nonce the holder's next signed message must be bound to.
    /// Published for off-chain message construction.
    fn user_transfer_allowance_nonce(&self, holder: Address) -> u64;

    /// Move `amount` from the caller to their registered backup.
    ///
    /// # Errors
    /// * `BackupNotRegistered` - caller has no backup on file
    /// * `InsufficientBalance` - caller balance below `amount`
    fn transfer_to_backup(&self, caller: Address, amount: U256) -> Result<(), TransferError>;

    /// Move `amount` from `from` to their registered backup, authorized by
    /// a message `from` signed off-chain and a third-party `submitter`
    /// presents here.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// delegation, registration, signature, balance.
    ///
    /// # Errors
    /// * `NotDelegator` - `submitter == from`; self-service must use
    ///   [`transfer_to_backup`](Self::transfer_to_backup)
    /// * `BackupNotRegistered` - `from` has no backup on file
    /// * `InvalidSignature` - recovered signer is not `from`, for any
    ///   reason (wrong key, stale nonce, wrong domain, malformed bytes)
    /// * `InsufficientBalance` - `from` balance below `amount`
    fn transfer_to_backup_with_signed_message(
        &self,
        submitter: Address,
        from: Address,
        amount: U256,
        signature: EcdsaSignature,
    ) -> Result<(), TransferError>;
}
