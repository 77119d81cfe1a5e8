//! Check command implementation.
//!
//! The `dbflavor check` command answers a single capability query. The exit
//! code carries the answer: 0 when supported, 1 when not, 2 when the
//! version cannot be parsed.

use serde::Serialize;

use crate::capability;
use crate::cli::args::CheckArgs;
use crate::context::FlavorContext;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::Version;

use super::dispatcher::{Command, CommandResult};
use super::display::{format_window, print_json};

/// Exit code when the feature is not supported.
pub const EXIT_UNSUPPORTED: i32 = 1;

/// Exit code for malformed input.
pub const EXIT_INVALID: i32 = 2;

#[derive(Serialize)]
struct CheckReport<'a> {
    flavor: &'a str,
    feature: &'a str,
    version: &'a Version,
    supported: bool,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a FlavorContext,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a FlavorContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = match Version::parse(&self.args.version) {
            Ok(v) => v,
            Err(e) => {
                ui.error(&format!("Invalid version: {}", e));
                return Ok(CommandResult::failure(EXIT_INVALID));
            }
        };

        let catalog = self.context.catalog();
        let flavor = self.args.flavor.as_str();
        let feature = self.args.feature.as_str();
        let supported = capability::supports(catalog, flavor, feature, &version);

        if self.args.json {
            print_json(
                ui,
                &CheckReport {
                    flavor,
                    feature,
                    version: &version,
                    supported,
                },
            )?;
        } else if supported {
            ui.success(&format!("{} {} supports {}", flavor, version, feature));
        } else {
            ui.message(&format!("{} {} does not support {}", flavor, version, feature));
            match catalog.flavor(flavor) {
                None => ui.warning(&format!("Unknown flavor '{}'", flavor)),
                Some(_) => match catalog.lookup_feature(flavor, feature) {
                    None => ui.warning(&format!("'{}' is not defined for {}", feature, flavor)),
                    Some(definition) => ui.field("available", &format_window(definition)),
                },
            }
        }

        Ok(if supported {
            CommandResult::success()
        } else {
            CommandResult::failure(EXIT_UNSUPPORTED)
        })
    }
}
