//! # Typed-Data Hashing (EIP-712 style)
//!
//! Canonical, domain-separated digest for backup-transfer messages. The
//! signer and the verifier each build this digest independently; any
//! byte-level mismatch (wrong chain id, wrong contract, wrong amount,
//! stale nonce) yields a different digest and therefore recovers a
//! different address downstream. There is deliberately no way to tell
//! WHICH field mismatched.
//!
//! Encoding rules (byte-compatible with EIP-712):
//! - dynamic `string` fields enter as their keccak256 hash
//! - `uint256` fields enter big-endian, 32 bytes
//! - `address` fields enter left-padded to 32 bytes
//! - final digest is `keccak256(0x19 0x01 || domain_separator || struct_hash)`

use super::entities::{BackupTransferMessage, SigningDomain};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, U256};

/// Type string for the EIP-712 domain struct.
const EIP712_DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Type string for the backup-transfer message struct.
const BACKUP_TRANSFER_TYPE: &[u8] =
    b"BackupTransfer(address from,uint256 amount,uint256 nonce)";

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Hash-separator for one deployment: binds signatures to a specific
/// token name, protocol version, chain, and contract instance.
pub fn domain_separator(domain: &SigningDomain) -> Hash {
    let mut encoded = Vec::with_capacity(5 * 32);
    encoded.extend_from_slice(&keccak256(EIP712_DOMAIN_TYPE));
    encoded.extend_from_slice(&keccak256(domain.name.as_bytes()));
    encoded.extend_from_slice(&keccak256(domain.version.as_bytes()));
    encoded.extend_from_slice(&encode_u256(U256::from(domain.chain_id)));
    encoded.extend_from_slice(&encode_address(&domain.verifying_contract));
    keccak256(&encoded)
}

/// Hash of the structured message fields `(from, amount, nonce)`.
pub fn backup_transfer_struct_hash(message: &BackupTransferMessage) -> Hash {
    let mut encoded = Vec::with_capacity(4 * 32);
    encoded.extend_from_slice(&keccak256(BACKUP_TRANSFER_TYPE));
    encoded.extend_from_slice(&encode_address(&message.from));
    encoded.extend_from_slice(&encode_u256(message.amount));
    encoded.extend_from_slice(&encode_u256(U256::from(message.nonce)));
    keccak256(&encoded)
}

/// The digest a holder signs to authorize one delegated transfer.
pub fn backup_transfer_digest(domain: &SigningDomain, message: &BackupTransferMessage) -> Hash {
    let mut encoded = Vec::with_capacity(2 + 2 * 32);
    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(&domain_separator(domain));
    encoded.extend_from_slice(&backup_transfer_struct_hash(message));
    keccak256(&encoded)
}

/// Left-pad a 20-byte address to a 32-byte word.
fn encode_address(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}

/// Big-endian 32-byte encoding of a uint256.
fn encode_u256(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}
