//! # Domain Entities
//!
//! Core data structures for the backup-transfer protocol.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

// =============================================================================
// Signature Types (secp256k1)
// =============================================================================

/// ECDSA signature on the secp256k1 curve, in recoverable (v, r, s) form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

// =============================================================================
// Signed Message Types
// =============================================================================

/// The EIP-712 domain a backup-transfer message is bound to.
///
/// Published to off-chain signers; a signature produced under a different
/// domain (other chain, other contract, other version) recovers to the
/// wrong address and is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningDomain {
    /// Token name, e.g. `"Backup Token"`
    pub name: String,
    /// Protocol version string, e.g. `"1"`
    pub version: String,
    /// Chain identifier
    pub chain_id: u64,
    /// Address of the verifying contract instance
    pub verifying_contract: Address,
}

/// The structured payload a holder signs off-chain to authorize one
/// delegated transfer. Ephemeral: constructed independently by signer and
/// verifier, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackupTransferMessage {
    /// Holder whose funds move
    pub from: Address,
    /// Amount to move to the holder's backup
    pub amount: U256,
    /// Holder's current replay-protection nonce
    pub nonce: u64,
}

// =============================================================================
// Events
// =============================================================================

/// Emitted once per successful transfer (either path), in call order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferredToBackup {
    /// Holder the funds were debited from
    pub from: Address,
    /// Backup address the funds were credited to
    pub backup: Address,
    /// Amount moved
    pub amount: U256,
    /// Ledger block number at which the transfer applied
    pub block_number: u64,
}

// =============================================================================
// Configuration
// =============================================================================

/// Whether a holder may register themselves as their own backup.
///
/// The observed contract behavior never exercises this case, so it is a
/// deployment knob rather than a hardcoded rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfBackupPolicy {
    /// Permit `backup == holder` (matches observed behavior)
    #[default]
    Allow,
    /// Reject `backup == holder` at registration time
    Reject,
}

/// Deployment configuration for one token instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token name, e.g. `"Backup Token"`
    pub name: String,
    /// Token symbol, e.g. `"BKT"`
    pub symbol: String,
    /// Display decimals
    pub decimals: u8,
    /// Protocol version string used in signature hashing
    pub version: String,
    /// Chain identifier used in signature hashing
    pub chain_id: u64,
    /// Address of this token contract instance
    pub contract: Address,
    /// Self-backup registration policy
    #[serde(default)]
    pub self_backup: SelfBackupPolicy,
}

impl TokenConfig {
    /// The EIP-712 domain parameters derived from this configuration.
    pub fn signing_domain(&self) -> SigningDomain {
        SigningDomain {
            name: self.name.clone(),
            version: self.version.clone(),
            chain_id: self.chain_id,
            verifying_contract: self.contract,
        }
    }
}
