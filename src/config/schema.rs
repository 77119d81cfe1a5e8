//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::catalog::FlavorOverlay;
use crate::detection::FlavorSignature;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlavorConfig {
    /// Extra signatures, tried before the built-in ones in file order.
    pub signatures: Vec<FlavorSignature>,

    /// Catalog overlays keyed by flavor.
    pub flavors: BTreeMap<String, FlavorOverlay>,
}

impl FlavorConfig {
    /// True when the config changes nothing.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty() && self.flavors.is_empty()
    }
}
