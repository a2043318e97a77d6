//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_answer;
pub mod orchestrator;
pub mod publish_answer;

#[cfg(test)]
pub(crate) mod test_support;
