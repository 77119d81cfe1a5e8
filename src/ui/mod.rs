//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use dbflavor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("mysql");
//! assert_eq!(ui.successes(), &["mysql".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, FlavorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Print machine-readable output. Shown in every mode.
    fn data(&mut self, text: &str);

    /// Show a key-value line (`flavor: mysql`).
    fn field(&mut self, key: &str, value: &str) {
        self.message(&format!("{}: {}", key, value));
    }
}
