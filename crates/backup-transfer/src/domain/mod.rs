//! Pure domain logic: entities, keyed stores, typed-data hashing, and
//! signature recovery. Nothing in this module performs I/O.

pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod nonces;
pub mod registry;
pub mod typed_data;
