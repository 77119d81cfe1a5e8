//! Detect command implementation.
//!
//! The `dbflavor detect` command reports which flavor is installed under a
//! root directory. An undetectable root is not a failure: it prints
//! `unknown` and exits 0.

use crate::cli::args::DetectArgs;
use crate::context::FlavorContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::print_json;

/// The detect command implementation.
pub struct DetectCommand<'a> {
    context: &'a FlavorContext,
    args: DetectArgs,
}

impl<'a> DetectCommand<'a> {
    /// Create a new detect command.
    pub fn new(context: &'a FlavorContext, args: DetectArgs) -> Self {
        Self { context, args }
    }
}

impl Command for DetectCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detection = self.context.detect(&self.args.root);

        if self.args.json {
            print_json(ui, &detection)?;
            return Ok(CommandResult::success());
        }

        if detection.is_unknown() {
            ui.warning(&format!(
                "No known flavor found under {}",
                self.args.root.display()
            ));
            ui.data(&detection.flavor);
            return Ok(CommandResult::success());
        }

        ui.data(&detection.flavor);
        for element in &detection.matched {
            ui.field("matched", element);
        }

        Ok(CommandResult::success())
    }
}
