//! # Backup-Transfer Authorizer
//!
//! Application service that owns the backup registry and nonce store,
//! drives signature verification, and invokes the external ledger. This
//! is the only component with externally observable side effects.
//!
//! ## Check Ordering
//!
//! Both entry points evaluate their checks in a fixed order and the first
//! failure short-circuits with no state mutation. The order is part of
//! the compatibility surface: it determines which error a caller sees
//! for a request that is malformed in more than one way.
//!
//! Delegated path: delegation check, registry lookup, signature
//! verification against the CURRENT nonce, balance check, ledger
//! transfer, nonce consume, event append. The nonce moves only once all
//! of steps 1-6 have succeeded.

use crate::domain::ecdsa;
use crate::domain::entities::{
    BackupTransferMessage, EcdsaSignature, SigningDomain, TokenConfig, TransferredToBackup,
};
use crate::domain::errors::TransferError;
use crate::domain::nonces::NonceStore;
use crate::domain::registry::BackupRegistry;
use crate::domain::typed_data;
use crate::ports::inbound::BackupTransferApi;
use crate::ports::outbound::{Ledger, LedgerError};
use parking_lot::RwLock;
use shared_types::{display_address, Address, U256};
use tracing::{debug, info, warn};

/// The backup-transfer service.
///
/// Wraps the two per-holder keyed stores in locks so that every port
/// method takes `&self`; the protocol still assumes calls affecting one
/// holder are serialized (see `BackupTransferApi`).
pub struct BackupTransferService<L: Ledger> {
    config: TokenConfig,
    domain: SigningDomain,
    ledger: L,
    registry: RwLock<BackupRegistry>,
    nonces: RwLock<NonceStore>,
    events: RwLock<Vec<TransferredToBackup>>,
}

impl<L: Ledger> BackupTransferService<L> {
    /// Create a service for one token deployment.
    pub fn new(config: TokenConfig, ledger: L) -> Self {
        let domain = config.signing_domain();
        Self {
            config,
            domain,
            ledger,
            registry: RwLock::new(BackupRegistry::new()),
            nonces: RwLock::new(NonceStore::new()),
            events: RwLock::new(Vec::new()),
        }
    }

    /// Deployment configuration (token name, symbol, decimals, version).
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Domain parameters off-chain signers must hash against.
    pub fn signing_domain(&self) -> &SigningDomain {
        &self.domain
    }

    /// Transfer events emitted so far, in call order.
    pub fn events(&self) -> Vec<TransferredToBackup> {
        self.events.read().clone()
    }

    /// Shared access to the ledger collaborator.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    fn record_transfer(&self, from: Address, backup: Address, amount: U256) {
        let event = TransferredToBackup {
            from,
            backup,
            amount,
            block_number: self.ledger.block_number(),
        };
        info!(
            from = %display_address(&from),
            backup = %display_address(&backup),
            %amount,
            block_number = event.block_number,
            "transferred to backup"
        );
        self.events.write().push(event);
    }
}

impl From<LedgerError> for TransferError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance => TransferError::InsufficientBalance,
        }
    }
}

impl<L: Ledger> BackupTransferApi for BackupTransferService<L> {
    fn register_backup_address(
        &self,
        caller: Address,
        backup: Address,
    ) -> Result<(), TransferError> {
        self.registry
            .write()
            .register(caller, backup, self.config.self_backup)?;
        debug!(
            holder = %display_address(&caller),
            backup = %display_address(&backup),
            "backup address registered"
        );
        Ok(())
    }

    fn backup_address(&self, holder: Address) -> Option<Address> {
        self.registry.read().backup_of(&holder)
    }

    fn user_transfer_allowance_nonce(&self, holder: Address) -> u64 {
        self.nonces.read().current(&holder)
    }

    fn transfer_to_backup(&self, caller: Address, amount: U256) -> Result<(), TransferError> {
        let backup = self
            .registry
            .read()
            .backup_of(&caller)
            .ok_or(TransferError::BackupNotRegistered)?;

        if self.ledger.balance_of(&caller) < amount {
            warn!(
                holder = %display_address(&caller),
                %amount,
                "direct backup transfer rejected: exceeds balance"
            );
            return Err(TransferError::InsufficientBalance);
        }

        self.ledger.transfer(caller, backup, amount)?;
        self.record_transfer(caller, backup, amount);
        Ok(())
    }

    fn transfer_to_backup_with_signed_message(
        &self,
        submitter: Address,
        from: Address,
        amount: U256,
        signature: EcdsaSignature,
    ) -> Result<(), TransferError> {
        if submitter == from {
            return Err(TransferError::NotDelegator);
        }

        let backup = self
            .registry
            .read()
            .backup_of(&from)
            .ok_or(TransferError::BackupNotRegistered)?;

        // Verify against the holder's CURRENT nonce. A signature bound to
        // any other nonce recovers a different address and is rejected
        // here, indistinguishably from a wrong signer.
        let nonce = self.nonces.read().current(&from);
        let message = BackupTransferMessage {
            from,
            amount,
            nonce,
        };
        let digest = typed_data::backup_transfer_digest(&self.domain, &message);
        if let Err(err) = ecdsa::verify_signer(&digest, &signature, from) {
            warn!(
                holder = %display_address(&from),
                submitter = %display_address(&submitter),
                reason = %err,
                "delegated backup transfer rejected"
            );
            return Err(TransferError::InvalidSignature);
        }

        if self.ledger.balance_of(&from) < amount {
            warn!(
                holder = %display_address(&from),
                %amount,
                "delegated backup transfer rejected: exceeds balance"
            );
            return Err(TransferError::InsufficientBalance);
        }

        self.ledger.transfer(from, backup, amount)?;

        // All checks passed and funds have moved: burn the nonce, once.
        let used = self.nonces.write().consume(from);
        debug!(
            holder = %display_address(&from),
            nonce = used,
            "transfer allowance nonce consumed"
        );

        self.record_transfer(from, backup, amount);
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
