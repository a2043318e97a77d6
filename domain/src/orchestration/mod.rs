//! Orchestration subdomain: the phases a conversation turn moves through
//! and the result handed back to the caller.

pub mod field_meta;
pub mod phase;
pub mod result;
