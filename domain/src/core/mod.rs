//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-empty user question
//! - [`error::DomainError`]: validation failures raised before any external call

pub mod error;
pub mod question;
