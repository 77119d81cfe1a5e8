//! Capability catalog: which features each flavor has, and when.
//!
//! A [`Catalog`] is built once (see [`Catalog::builtin`]) and then only read.
//! Derived flavors are resolved while building, so lookups never chase
//! `extends` chains.
//!
//! # Example
//!
//! ```
//! use dbflavor::catalog::{names, Catalog};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let roles = catalog.lookup_feature(names::flavor::MYSQL, names::feature::ROLES).unwrap();
//! assert_eq!(roles.since.to_string(), "8.0.0");
//!
//! // Unknown flavors and features are simply absent
//! assert!(catalog.lookup_feature("oracle", names::feature::ROLES).is_none());
//! ```

pub mod builtin;
pub mod document;
pub mod feature;
pub mod names;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{FlavorError, Result};
use crate::version::Version;

pub use document::{CatalogDocument, FeatureDocument, FlavorDocument, FlavorOverlay};
pub use feature::{derive_features, Feature, FeatureSet};

/// Everything known about one flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlavorCapabilities {
    pub flavor: String,
    pub description: String,
    pub features: FeatureSet,
}

/// Flavor identifier to capabilities.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flavors: BTreeMap<String, FlavorCapabilities>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        builtin::load_builtin()
    }

    /// Parse and build a catalog from a YAML document.
    ///
    /// `source_name` only appears in error messages.
    pub fn from_yaml(source_name: &str, content: &str) -> Result<Self> {
        Self::from_document(&CatalogDocument::from_yaml(source_name, content)?)
    }

    /// The built-in catalog with `overlays` layered in before derivation.
    ///
    /// See [`CatalogDocument::with_overlays`] for how overlays reach flavors
    /// that extend or inherit from the overlaid one.
    pub fn builtin_with_overlays(overlays: &BTreeMap<String, FlavorOverlay>) -> Result<Self> {
        Self::from_document(&builtin::builtin_document()?.with_overlays(overlays))
    }

    /// Build a catalog, resolving `extends` and `inherit` in declaration order.
    pub fn from_document(document: &CatalogDocument) -> Result<Self> {
        let mut catalog = Catalog::default();

        for entry in &document.flavors {
            if catalog.flavors.contains_key(&entry.flavor) {
                return Err(FlavorError::DuplicateFlavor {
                    flavor: entry.flavor.clone(),
                });
            }

            let mut base = match &entry.extends {
                Some(parent) => catalog.base_features(&entry.flavor, parent)?.clone(),
                None => FeatureSet::new(),
            };

            if let Some(inherit) = &entry.inherit {
                catalog.base_features(&entry.flavor, &inherit.from)?;
                let subset = catalog.select_subset(&inherit.from, &inherit.features);
                base = derive_features(&base, &subset);
            }

            let own = document::to_feature_set(&entry.features);
            let features = derive_features(&base, &own);

            tracing::debug!(
                "catalog: flavor '{}' resolved with {} features",
                entry.flavor,
                features.len()
            );

            catalog.flavors.insert(
                entry.flavor.clone(),
                FlavorCapabilities {
                    flavor: entry.flavor.clone(),
                    description: entry.description.clone(),
                    features,
                },
            );
        }

        Ok(catalog)
    }

    fn base_features(&self, flavor: &str, base: &str) -> Result<&FeatureSet> {
        self.flavors
            .get(base)
            .map(|caps| &caps.features)
            .ok_or_else(|| FlavorError::UnknownBaseFlavor {
                flavor: flavor.to_string(),
                base: base.to_string(),
            })
    }

    /// Capabilities of one flavor.
    pub fn flavor(&self, flavor: &str) -> Option<&FlavorCapabilities> {
        self.flavors.get(flavor)
    }

    /// All flavors, sorted by identifier.
    pub fn flavors(&self) -> impl Iterator<Item = &FlavorCapabilities> {
        self.flavors.values()
    }

    /// All flavor identifiers, sorted.
    pub fn flavor_names(&self) -> impl Iterator<Item = &str> {
        self.flavors.keys().map(String::as_str)
    }

    /// Look up a feature definition.
    ///
    /// `None` means the flavor does not define the feature at all, which is
    /// different from a feature defined for versions other than yours.
    pub fn lookup_feature(&self, flavor: &str, feature: &str) -> Option<&Feature> {
        self.flavors.get(flavor)?.features.get(feature)
    }

    /// The named features of a flavor.
    ///
    /// Unknown flavors and names are skipped, not reported.
    pub fn select_subset<I, S>(&self, flavor: &str, names: I) -> FeatureSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(caps) = self.flavors.get(flavor) else {
            return FeatureSet::new();
        };

        names
            .into_iter()
            .filter_map(|name| caps.features.get(name.as_ref()))
            .map(|feature| (feature.name.clone(), feature.clone()))
            .collect()
    }

    /// Every feature of `flavor` available at `version`, sorted by name.
    pub fn supported_features(&self, flavor: &str, version: &Version) -> Vec<&Feature> {
        self.flavors
            .get(flavor)
            .map(|caps| {
                caps.features
                    .values()
                    .filter(|feature| feature.is_available_at(version))
                    .collect()
            })
            .unwrap_or_default()
    }
}
