//! Publishing subdomain: what gets posted to the content backend and what
//! comes back.

pub mod draft;
pub mod entities;
