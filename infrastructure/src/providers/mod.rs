//! Text generation provider adapters.
//!
//! [`MockProvider`] answers deterministically without network access. The
//! AWS Bedrock adapter is compiled with the `bedrock` feature.

mod mock;

#[cfg(feature = "bedrock")]
pub mod bedrock;

pub use mock::MockProvider;
