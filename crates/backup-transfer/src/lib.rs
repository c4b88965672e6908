//! # Backup-Transfer Protocol
//!
//! A token holder registers a backup address; funds can then be moved from
//! the holder to that backup either directly by the holder, or by a
//! third-party initiator submitting a message the holder signed off-chain.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure protocol logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): In-memory ledger for tests and demos
//! - **Service Layer** (`service.rs`): The authorizer, wiring domain logic to ports
//!
//! ## Security Notes
//!
//! - **Replay Protection**: Every successful delegated transfer consumes the
//!   holder's nonce; a signed message is valid at most once.
//! - **Domain Separation**: Signed messages bind the token name, verifying
//!   contract address, chain id, and protocol version (EIP-712 style).
//! - **Opaque Rejection**: A stale nonce, wrong domain, and wrong signer are
//!   indistinguishable to callers; all surface as `InvalidSignature`.
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are
//!   rejected.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    BackupTransferMessage, EcdsaSignature, SelfBackupPolicy, SigningDomain, TokenConfig,
    TransferredToBackup,
};
pub use domain::errors::TransferError;
pub use domain::typed_data::{backup_transfer_digest, domain_separator, keccak256};
pub use ports::inbound::BackupTransferApi;
pub use ports::outbound::{Ledger, LedgerError};
pub use service::BackupTransferService;
