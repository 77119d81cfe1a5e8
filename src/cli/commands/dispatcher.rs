//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::context::FlavorContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: FlavorContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher around a loaded context.
    pub fn new(context: FlavorContext) -> Self {
        Self { context }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Detect(args) => {
                super::detect::DetectCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Check(args) => {
                super::check::CheckCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Features(args) => {
                super::features::FeaturesCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Probe(args) => {
                super::probe::ProbeCommand::new(&self.context, args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_constructors() {
        assert_eq!(
            CommandResult::success(),
            CommandResult {
                success: true,
                exit_code: 0
            }
        );
        let failure = CommandResult::failure(2);
        assert!(!failure.success);
        assert_eq!(failure.exit_code, 2);
    }

    #[test]
    fn dispatches_check() {
        let dispatcher = CommandDispatcher::new(FlavorContext::builtin().unwrap());
        let cli = Cli::parse_from(["dbflavor", "check", "mysql", "roles", "8.0.21"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
    }

    #[test]
    fn dispatches_features() {
        let dispatcher = CommandDispatcher::new(FlavorContext::builtin().unwrap());
        let cli = Cli::parse_from(["dbflavor", "features", "--json"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.data_lines().len(), 1);
    }
}
