//! # Protocol Errors
//!
//! `TransferError` is the only error type callers ever see. Signature
//! verification keeps a richer private taxonomy (`SignatureError`) for
//! logging and tests, but the authorizer collapses every variant of it to
//! `TransferError::InvalidSignature`: callers must not be able to tell a
//! stale nonce from a wrong signer.

use thiserror::Error;

/// Errors surfaced by the backup-transfer API. All are immediately
/// terminal for the call; nothing is retried and no partial state change
/// survives a failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
    /// Backup registration target is the zero address (or the holder
    /// itself, under `SelfBackupPolicy::Reject`)
    #[error("Invalid backup address")]
    InvalidBackupAddress,

    /// No backup on file for the source holder
    #[error("Backup address is not registered")]
    BackupNotRegistered,

    /// The delegated entry point was invoked by the holder themselves
    #[error("Not delegator")]
    NotDelegator,

    /// Recovered signer does not match the claimed holder. Covers a wrong
    /// key, a stale or future nonce, wrong domain parameters, and a
    /// malformed signature alike.
    #[error("INVALID_SIGNATURE")]
    InvalidSignature,

    /// Holder balance is below the requested amount (propagated from the
    /// ledger collaborator)
    #[error("Exceeds user balance")]
    InsufficientBalance,
}

/// Internal signature verification failures. Never crosses the API
/// boundary; see [`TransferError::InvalidSignature`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// R or S is zero or not below the curve order
    #[error("Signature scalar out of range")]
    InvalidScalar,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key, or recovery produced a degenerate
    /// (zero) address
    #[error("Failed to recover signer")]
    RecoveryFailed,

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch")]
    SignerMismatch,
}
