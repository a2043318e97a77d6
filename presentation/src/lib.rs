//! Presentation layer for qna-relay
//!
//! This crate contains the HTTP API, CLI definitions and console output.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::{AppState, build_router, serve};
pub use output::console::ConsoleFormatter;
