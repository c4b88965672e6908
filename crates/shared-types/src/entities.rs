//! Core primitive types.

// Re-export U256 from primitive-types for use across the workspace
pub use primitive_types::U256;

/// Keccak256 digest.
pub type Hash = [u8; 32];

/// Ethereum-style account address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// The all-zeros address. Used as the "no address" sentinel on external
/// surfaces that cannot carry an `Option`.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Whether an address is the zero/null sentinel.
pub fn is_zero_address(address: &Address) -> bool {
    address == &ZERO_ADDRESS
}

/// `0x`-prefixed lowercase hex rendering of an address, for logs.
pub fn display_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}
