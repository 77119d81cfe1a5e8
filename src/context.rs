//! Composition root: the catalog and detector a process works with.
//!
//! Built once at startup from the built-in data plus an optional config
//! file, then handed out by reference.

use std::path::Path;

use crate::capability;
use crate::catalog::Catalog;
use crate::config::{load_config, FlavorConfig};
use crate::detection::{builtin_signatures, FlavorDetection, FlavorDetector};
use crate::error::Result;
use crate::version::VersionParseError;

/// Frozen catalog and signature list.
#[derive(Debug)]
pub struct FlavorContext {
    catalog: Catalog,
    detector: FlavorDetector,
}

impl FlavorContext {
    /// Built-in catalog and signatures only.
    pub fn builtin() -> Result<Self> {
        Self::from_config(&FlavorConfig::default())
    }

    /// Built-in data with the config file at `path` (if any) applied.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;
        Self::from_config(&config)
    }

    /// Built-in data with `config` applied.
    ///
    /// Config signatures are evaluated before the built-in ones.
    pub fn from_config(config: &FlavorConfig) -> Result<Self> {
        let catalog = Catalog::builtin_with_overlays(&config.flavors)?;

        let mut signatures = config.signatures.clone();
        signatures.extend(builtin_signatures());

        tracing::debug!(
            "context: {} flavors, {} signatures ({} from config)",
            catalog.flavor_names().count(),
            signatures.len(),
            config.signatures.len()
        );

        Ok(Self {
            catalog,
            detector: FlavorDetector::new(signatures),
        })
    }

    /// The capability catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The flavor detector.
    pub fn detector(&self) -> &FlavorDetector {
        &self.detector
    }

    /// Detect the flavor installed under `root`.
    pub fn detect(&self, root: &Path) -> FlavorDetection {
        self.detector.detect(root)
    }

    /// See [`capability::has_capability`].
    pub fn has_capability(
        &self,
        flavor: &str,
        feature: &str,
        version: &str,
    ) -> std::result::Result<bool, VersionParseError> {
        capability::has_capability(&self.catalog, flavor, feature, version)
    }
}
