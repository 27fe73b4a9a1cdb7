//! CLI module
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, ConvertConfig, DEFAULT_REPORT};
pub use setup::{init_logging, normalize_legacy_args};

use clap::Parser;

/// Parse process arguments, accepting the single-dash legacy spellings
pub fn parse_args() -> Cli {
    Cli::parse_from(normalize_legacy_args(std::env::args_os()))
}
