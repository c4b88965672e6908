//! # Shared Types Crate
//!
//! Primitive types shared across the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate primitive types are
//!   defined here.
//! - **By-value semantics**: Addresses and hashes are small fixed-size
//!   arrays, copied freely.

pub mod entities;

pub use entities::*;
