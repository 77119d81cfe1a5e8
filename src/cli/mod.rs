//! Command-line interface for dbflavor.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, DetectArgs, FeaturesArgs, ProbeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
