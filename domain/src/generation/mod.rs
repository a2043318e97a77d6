//! Answer generation concepts: prompt defaults, retry policy and the
//! provider-neutral generation settings.

pub mod prompt;
pub mod retry;
pub mod settings;
