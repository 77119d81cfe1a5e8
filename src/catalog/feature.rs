//! Features and their availability windows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::version::Version;

/// Features of one flavor, keyed by feature name.
pub type FeatureSet = BTreeMap<String, Feature>;

/// A named optional behavior available within a version window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Unique name within a flavor.
    pub name: String,

    /// Human readable description.
    pub description: String,

    /// First version with the feature (inclusive).
    pub since: Version,

    /// Last version with the feature (inclusive). `None` means still available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<Version>,
}

impl Feature {
    /// Create a feature available from `since` onwards.
    pub fn new(name: &str, description: &str, since: Version) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            since,
            until: None,
        }
    }

    /// Set the last version that still has the feature.
    pub fn until(mut self, until: Version) -> Self {
        self.until = Some(until);
        self
    }

    /// Returns true if `version` lies in `[since, until]`.
    pub fn is_available_at(&self, version: &Version) -> bool {
        let over_minimum = version.is_at_least(&self.since);
        let within_maximum = self
            .until
            .as_ref()
            .is_none_or(|until| until.is_at_least(version));
        over_minimum && within_maximum
    }
}

/// Returns `base` with every entry of `overrides` added or replaced by name.
///
/// Neither input is modified.
pub fn derive_features(base: &FeatureSet, overrides: &FeatureSet) -> FeatureSet {
    let mut features = base.clone();
    for (name, feature) in overrides {
        features.insert(name.clone(), feature.clone());
    }
    features
}
