//! AWS Bedrock Converse API provider
//!
//! Sends a single system prompt plus user question through the Converse
//! API, authenticated with the standard AWS credential chain.

mod adapter;
mod types;

pub use adapter::BedrockProvider;
