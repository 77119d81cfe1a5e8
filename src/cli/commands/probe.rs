//! Probe command implementation.
//!
//! The `dbflavor probe` command combines detection with the catalog: it
//! detects the flavor under a root, works out the version, and lists every
//! feature that flavor supports at that version.

use std::path::Path;

use serde::Serialize;

use crate::cli::args::ProbeArgs;
use crate::context::FlavorContext;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::Version;

use super::check::EXIT_INVALID;
use super::dispatcher::{Command, CommandResult};
use super::display::{feature_line, print_json};

#[derive(Serialize)]
struct ProbeReport<'a> {
    root: &'a Path,
    flavor: &'a str,
    version: &'a Version,
    features: Vec<&'a str>,
}

/// Version carried by the last component of `root`, if any.
pub fn version_from_dir_name(root: &Path) -> Option<Version> {
    let name = root.file_name()?.to_string_lossy();
    Version::find_in(&name)
}

/// The probe command implementation.
pub struct ProbeCommand<'a> {
    context: &'a FlavorContext,
    args: ProbeArgs,
}

impl<'a> ProbeCommand<'a> {
    /// Create a new probe command.
    pub fn new(context: &'a FlavorContext, args: ProbeArgs) -> Self {
        Self { context, args }
    }

    fn resolve_version(&self, ui: &mut dyn UserInterface) -> Option<Version> {
        match &self.args.version_override {
            Some(raw) => match Version::parse(raw) {
                Ok(v) => Some(v),
                Err(e) => {
                    ui.error(&format!("Invalid version: {}", e));
                    None
                }
            },
            None => {
                let found = version_from_dir_name(&self.args.root);
                if found.is_none() {
                    ui.error(&format!(
                        "No version in '{}'; pass --version",
                        self.args.root.display()
                    ));
                }
                found
            }
        }
    }
}

impl Command for ProbeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(version) = self.resolve_version(ui) else {
            return Ok(CommandResult::failure(EXIT_INVALID));
        };

        let detection = self.context.detect(&self.args.root);
        let features = self
            .context
            .catalog()
            .supported_features(&detection.flavor, &version);

        tracing::debug!(
            "probe: {} is {} {} with {} features",
            self.args.root.display(),
            detection.flavor,
            version,
            features.len()
        );

        if self.args.json {
            print_json(
                ui,
                &ProbeReport {
                    root: &self.args.root,
                    flavor: &detection.flavor,
                    version: &version,
                    features: features.iter().map(|f| f.name.as_str()).collect(),
                },
            )?;
            return Ok(CommandResult::success());
        }

        if detection.is_unknown() {
            ui.warning(&format!(
                "No known flavor found under {}",
                self.args.root.display()
            ));
        }
        ui.field("flavor", &detection.flavor);
        ui.field("version", &version.to_string());
        for feature in features {
            ui.message(&feature_line(feature));
        }

        Ok(CommandResult::success())
    }
}
