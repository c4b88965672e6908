//! Port definitions: the inbound API this subsystem exposes and the
//! outbound ledger interface it consumes.

pub mod inbound;
pub mod outbound;
