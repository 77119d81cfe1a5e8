//! Features command implementation.
//!
//! Without a flavor, `dbflavor features` lists the catalog's flavors. With
//! one, it lists that flavor's features and their version windows.

use serde::Serialize;

use crate::catalog::FeatureSet;
use crate::cli::args::FeaturesArgs;
use crate::context::FlavorContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::EXIT_INVALID;
use super::dispatcher::{Command, CommandResult};
use super::display::{feature_line, print_json};

#[derive(Serialize)]
struct FlavorSummary<'a> {
    flavor: &'a str,
    description: &'a str,
    features: usize,
}

/// The features command implementation.
pub struct FeaturesCommand<'a> {
    context: &'a FlavorContext,
    args: FeaturesArgs,
}

impl<'a> FeaturesCommand<'a> {
    /// Create a new features command.
    pub fn new(context: &'a FlavorContext, args: FeaturesArgs) -> Self {
        Self { context, args }
    }

    fn list_flavors(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let summaries: Vec<FlavorSummary<'_>> = self
            .context
            .catalog()
            .flavors()
            .map(|caps| FlavorSummary {
                flavor: &caps.flavor,
                description: &caps.description,
                features: caps.features.len(),
            })
            .collect();

        if self.args.json {
            print_json(ui, &summaries)?;
            return Ok(CommandResult::success());
        }

        for summary in &summaries {
            ui.message(&format!(
                "  {:<10} {:>3} features  {}",
                summary.flavor, summary.features, summary.description
            ));
        }
        Ok(CommandResult::success())
    }

    fn list_features(&self, flavor: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = self.context.catalog();
        let Some(caps) = catalog.flavor(flavor) else {
            ui.error(&format!("Unknown flavor '{}'", flavor));
            return Ok(CommandResult::failure(EXIT_INVALID));
        };

        let features: FeatureSet = if self.args.only.is_empty() {
            caps.features.clone()
        } else {
            for name in &self.args.only {
                if !caps.features.contains_key(name) {
                    ui.warning(&format!("'{}' is not defined for {}", name, flavor));
                }
            }
            catalog.select_subset(flavor, &self.args.only)
        };

        if self.args.json {
            print_json(ui, &features)?;
            return Ok(CommandResult::success());
        }

        if features.is_empty() {
            ui.message(&format!("{} has no features", flavor));
        }
        for feature in features.values() {
            ui.message(&feature_line(feature));
        }
        Ok(CommandResult::success())
    }
}

impl Command for FeaturesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.flavor {
            Some(flavor) => self.list_features(flavor, ui),
            None => self.list_flavors(ui),
        }
    }
}
