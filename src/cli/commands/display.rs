//! Shared rendering helpers for command output.

use serde::Serialize;

use crate::catalog::Feature;
use crate::error::{FlavorError, Result};
use crate::ui::UserInterface;

/// Print `value` as pretty JSON on the data channel.
pub fn print_json<T: Serialize + ?Sized>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| FlavorError::Other(e.into()))?;
    ui.data(&json);
    Ok(())
}

/// Version window of a feature: `>= 5.6.9` or `3.3.23 ..= 5.7.5`.
pub fn format_window(feature: &Feature) -> String {
    match &feature.until {
        Some(until) => format!("{} ..= {}", feature.since, until),
        None => format!(">= {}", feature.since),
    }
}

/// One aligned feature line for text listings.
pub fn feature_line(feature: &Feature) -> String {
    format!(
        "  {:<18} {:<18} {}",
        feature.name,
        format_window(feature),
        feature.description
    )
}
