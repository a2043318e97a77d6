//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for qna-relay
#[derive(Parser, Debug)]
#[command(name = "qna-relay")]
#[command(author, version, about = "Answer questions with an LLM and publish them to a content backend")]
#[command(long_about = r#"
qna-relay answers a user's question with a text-generation model and, when
asked to, publishes the question as a post with the answer as a comment.

Configuration files are loaded from (in priority order):
1. QNA_* environment variables (e.g. QNA_CONTENT_BACKEND__BASE_URL)
2. --config <path>       Explicit config file
3. ./qna-relay.toml      Project-level config
4. ~/.config/qna-relay/config.toml   Global config

Example:
  qna-relay serve --bind 127.0.0.1:8001
  qna-relay ask "What is log aggregation?"
  qna-relay ask --simulate-error "Does the failure path work?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind, overriding [server] bind_addr
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Generate one answer and print it
    Ask {
        /// The question to answer
        question: String,

        /// Force the deterministic generation failure path
        #[arg(long)]
        simulate_error: bool,
    },
}

impl Cli {
    /// The requested command, `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { bind: None })
    }
}
