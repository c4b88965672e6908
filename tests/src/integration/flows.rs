//! # Integration Test Flows
//!
//! Full protocol scenarios driving the service through its public port:
//! registration, direct transfers, and initiator-submitted delegated
//! transfers with holder-signed messages.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{
        deploy, sign_backup_transfer, token_config, Account,
    };
    use backup_transfer::{BackupTransferApi, EcdsaSignature, Ledger, TransferError};
    use shared_types::U256;

    // =========================================================================
    // TOKEN METADATA
    // =========================================================================

    #[test]
    fn test_token_data() {
        let service = deploy();
        assert_eq!(service.config().name, "Backup Token");
        assert_eq!(service.config().symbol, "BKT");
        assert_eq!(service.config().decimals, 18);
        assert_eq!(service.config().version, "1");
    }

    #[test]
    fn test_signing_domain_is_published() {
        let service = deploy();
        let domain = service.signing_domain();
        assert_eq!(domain.name, token_config().name);
        assert_eq!(domain.version, token_config().version);
        assert_eq!(domain.chain_id, token_config().chain_id);
        assert_eq!(domain.verifying_contract, token_config().contract);
    }

    // =========================================================================
    // SET BACKUP
    // =========================================================================

    #[test]
    fn test_set_backup_reverted_case() {
        let service = deploy();
        let admin = Account::random();

        let err = service
            .register_backup_address(admin.address, [0u8; 20])
            .unwrap_err();
        assert_eq!(err, TransferError::InvalidBackupAddress);
    }

    #[test]
    fn test_set_backup_success_case() {
        let service = deploy();
        let admin = Account::random();
        let backup = Account::random();

        service
            .register_backup_address(admin.address, backup.address)
            .unwrap();
        assert_eq!(service.backup_address(admin.address), Some(backup.address));
    }

    #[test]
    fn test_set_backup_overwrites_previous() {
        let service = deploy();
        let admin = Account::random();
        let first = Account::random();
        let second = Account::random();

        service
            .register_backup_address(admin.address, first.address)
            .unwrap();
        service
            .register_backup_address(admin.address, second.address)
            .unwrap();
        assert_eq!(service.backup_address(admin.address), Some(second.address));
    }

    // =========================================================================
    // TRANSFER TO BACKUP WITHOUT SIGNED MESSAGE
    // =========================================================================

    #[test]
    fn test_direct_transfer_reverted_cases() {
        let service = deploy();
        let admin = Account::random();
        let bob = Account::random();
        let backup = Account::random();

        // bob registered a backup but holds nothing
        service
            .register_backup_address(bob.address, backup.address)
            .unwrap();
        let err = service
            .transfer_to_backup(bob.address, U256::from(100u64))
            .unwrap_err();
        assert_eq!(err, TransferError::InsufficientBalance);

        // admin holds funds but never registered
        service.ledger().mint(admin.address, U256::from(100u64));
        let err = service
            .transfer_to_backup(admin.address, U256::from(100u64))
            .unwrap_err();
        assert_eq!(err, TransferError::BackupNotRegistered);
    }

    #[test]
    fn test_direct_transfer_success_case() {
        let service = deploy();
        let admin = Account::random();
        let backup = Account::random();

        service.ledger().mint(admin.address, U256::from(5000u64));
        service.ledger().advance_block();
        service
            .register_backup_address(admin.address, backup.address)
            .unwrap();

        service
            .transfer_to_backup(admin.address, U256::from(1000u64))
            .unwrap();

        let events = service.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].from, admin.address);
        assert_eq!(events[0].backup, backup.address);
        assert_eq!(events[0].amount, U256::from(1000u64));
        assert_eq!(events[0].block_number, service.ledger().block_number());
    }

    // =========================================================================
    // TRANSFER TO BACKUP WITH SIGNED MESSAGE
    // =========================================================================

    #[test]
    fn test_delegated_transfer_success_case() {
        let service = deploy();
        let bob = Account::random();
        let initiator = Account::random();
        let backup = Account::random();

        // fund bob and register bob's backup address
        service.ledger().mint(bob.address, U256::from(1000u64));
        service
            .register_backup_address(bob.address, backup.address)
            .unwrap();

        // bob signs off-chain at the published nonce; initiator submits
        let nonce = service.user_transfer_allowance_nonce(bob.address);
        let sig = sign_backup_transfer(
            service.signing_domain(),
            &bob.key,
            bob.address,
            U256::from(1000u64),
            nonce,
        );
        service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                bob.address,
                U256::from(1000u64),
                sig,
            )
            .unwrap();

        assert_eq!(service.ledger().balance_of(&bob.address), U256::zero());
        assert_eq!(
            service.ledger().balance_of(&backup.address),
            U256::from(1000u64)
        );
        assert_eq!(service.user_transfer_allowance_nonce(bob.address), 1);
    }

    #[test]
    fn test_delegated_transfer_reverted_cases() {
        let service = deploy();
        let admin = Account::random();
        let initiator = Account::random();
        let backup = Account::random();

        service.ledger().mint(admin.address, U256::from(10_000u64));

        // self-submission
        let sig = sign_backup_transfer(
            service.signing_domain(),
            &admin.key,
            admin.address,
            U256::from(1000u64),
            0,
        );
        let err = service
            .transfer_to_backup_with_signed_message(
                admin.address,
                admin.address,
                U256::from(1000u64),
                sig.clone(),
            )
            .unwrap_err();
        assert_eq!(err, TransferError::NotDelegator);

        // no backup registered yet
        let err = service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                admin.address,
                U256::from(1000u64),
                sig,
            )
            .unwrap_err();
        assert_eq!(err, TransferError::BackupNotRegistered);

        service
            .register_backup_address(admin.address, backup.address)
            .unwrap();

        // garbage signature bytes
        let garbage = EcdsaSignature {
            r: [0x52; 32],
            s: [0x01; 32],
            v: 1,
        };
        let err = service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                admin.address,
                U256::from(1000u64),
                garbage,
            )
            .unwrap_err();
        assert_eq!(err, TransferError::InvalidSignature);
    }

    #[test]
    fn test_delegated_transfer_replay_is_rejected() {
        let service = deploy();
        let bob = Account::random();
        let initiator = Account::random();
        let backup = Account::random();

        service.ledger().mint(bob.address, U256::from(2000u64));
        service
            .register_backup_address(bob.address, backup.address)
            .unwrap();

        let sig = sign_backup_transfer(
            service.signing_domain(),
            &bob.key,
            bob.address,
            U256::from(1000u64),
            0,
        );
        service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                bob.address,
                U256::from(1000u64),
                sig.clone(),
            )
            .unwrap();

        let err = service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                bob.address,
                U256::from(1000u64),
                sig,
            )
            .unwrap_err();
        assert_eq!(err, TransferError::InvalidSignature);

        // Funds moved exactly once
        assert_eq!(service.ledger().balance_of(&bob.address), U256::from(1000u64));
        assert_eq!(
            service.ledger().balance_of(&backup.address),
            U256::from(1000u64)
        );
    }

    #[test]
    fn test_sequential_delegated_transfers_advance_nonce() {
        let service = deploy();
        let bob = Account::random();
        let initiator = Account::random();
        let backup = Account::random();

        service.ledger().mint(bob.address, U256::from(300u64));
        service
            .register_backup_address(bob.address, backup.address)
            .unwrap();

        for expected_nonce in 0..3u64 {
            assert_eq!(
                service.user_transfer_allowance_nonce(bob.address),
                expected_nonce
            );
            let sig = sign_backup_transfer(
                service.signing_domain(),
                &bob.key,
                bob.address,
                U256::from(100u64),
                expected_nonce,
            );
            service
                .transfer_to_backup_with_signed_message(
                    initiator.address,
                    bob.address,
                    U256::from(100u64),
                    sig,
                )
                .unwrap();
        }

        assert_eq!(service.user_transfer_allowance_nonce(bob.address), 3);
        assert_eq!(
            service.ledger().balance_of(&backup.address),
            U256::from(300u64)
        );
        assert_eq!(service.events().len(), 3);
    }

    #[test]
    fn test_signature_from_foreign_domain_is_rejected() {
        let service = deploy();
        let bob = Account::random();
        let initiator = Account::random();
        let backup = Account::random();

        service.ledger().mint(bob.address, U256::from(1000u64));
        service
            .register_backup_address(bob.address, backup.address)
            .unwrap();

        // Signed for another chain
        let mut foreign = service.signing_domain().clone();
        foreign.chain_id = 1;
        let sig = sign_backup_transfer(&foreign, &bob.key, bob.address, U256::from(1000u64), 0);
        let err = service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                bob.address,
                U256::from(1000u64),
                sig,
            )
            .unwrap_err();
        assert_eq!(err, TransferError::InvalidSignature);

        // Signed for another contract instance
        let mut foreign = service.signing_domain().clone();
        foreign.verifying_contract = [0x99; 20];
        let sig = sign_backup_transfer(&foreign, &bob.key, bob.address, U256::from(1000u64), 0);
        let err = service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                bob.address,
                U256::from(1000u64),
                sig,
            )
            .unwrap_err();
        assert_eq!(err, TransferError::InvalidSignature);

        // Nothing was consumed by the failed attempts
        assert_eq!(service.user_transfer_allowance_nonce(bob.address), 0);
        assert_eq!(service.ledger().balance_of(&bob.address), U256::from(1000u64));
    }

    #[test]
    fn test_signed_amount_is_binding() {
        let service = deploy();
        let bob = Account::random();
        let initiator = Account::random();
        let backup = Account::random();

        service.ledger().mint(bob.address, U256::from(1000u64));
        service
            .register_backup_address(bob.address, backup.address)
            .unwrap();

        // bob authorized 100; initiator tries to move 1000
        let sig = sign_backup_transfer(
            service.signing_domain(),
            &bob.key,
            bob.address,
            U256::from(100u64),
            0,
        );
        let err = service
            .transfer_to_backup_with_signed_message(
                initiator.address,
                bob.address,
                U256::from(1000u64),
                sig,
            )
            .unwrap_err();
        assert_eq!(err, TransferError::InvalidSignature);
        assert_eq!(service.ledger().balance_of(&bob.address), U256::from(1000u64));
    }
}
