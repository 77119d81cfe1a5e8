//! Declarative catalog format.
//!
//! A catalog document lists flavors in order. A flavor may start from
//! another flavor's features (`extends`), from a named subset of them
//! (`inherit`), or both; its own `features` are then added on top. Base
//! flavors must be declared earlier in the list.
//!
//! ```yaml
//! flavors:
//!   - flavor: mysql
//!     description: MySQL server
//!     features:
//!       roles: { description: Roles supported, since: "8.0.0" }
//!   - flavor: percona
//!     description: Percona Server
//!     extends: mysql
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use super::feature::{Feature, FeatureSet};
use crate::error::{FlavorError, Result};
use crate::version::Version;

/// Top level of a catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Flavors in declaration order.
    #[serde(default)]
    pub flavors: Vec<FlavorDocument>,
}

impl CatalogDocument {
    /// Parse a catalog document. `source_name` only appears in errors.
    pub fn from_yaml(source_name: &str, content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FlavorError::CatalogParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Return a copy with `overlays` merged into the declared flavors.
    ///
    /// Overlay features replace or join a flavor's own `features` before any
    /// `extends` or `inherit` is resolved, so flavors built on an overlaid
    /// flavor see the change unless they redefine the same feature. Overlays
    /// for undeclared flavors are appended as standalone flavors.
    pub fn with_overlays(&self, overlays: &BTreeMap<String, FlavorOverlay>) -> Self {
        let mut layered = self.clone();

        for (name, overlay) in overlays {
            match layered.flavors.iter_mut().find(|entry| &entry.flavor == name) {
                Some(entry) => {
                    entry.features.extend(
                        overlay
                            .features
                            .iter()
                            .map(|(feature, doc)| (feature.clone(), doc.clone())),
                    );
                    if let Some(description) = &overlay.description {
                        entry.description = description.clone();
                    }
                }
                None => layered.flavors.push(FlavorDocument {
                    flavor: name.clone(),
                    description: overlay.description.clone().unwrap_or_default(),
                    extends: None,
                    inherit: None,
                    features: overlay.features.clone(),
                }),
            }
        }

        layered
    }
}

/// One flavor entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlavorDocument {
    /// Flavor identifier.
    pub flavor: String,

    #[serde(default)]
    pub description: String,

    /// Take every feature of this flavor as the starting set.
    #[serde(default)]
    pub extends: Option<String>,

    /// Take only the listed features of another flavor.
    #[serde(default)]
    pub inherit: Option<InheritDocument>,

    /// Features added or replaced on top of the starting set.
    #[serde(default)]
    pub features: BTreeMap<String, FeatureDocument>,
}

/// A named subset of another flavor's features.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InheritDocument {
    pub from: String,
    pub features: Vec<String>,
}

/// A feature window as written in YAML. The name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureDocument {
    #[serde(default)]
    pub description: String,
    pub since: Version,
    #[serde(default)]
    pub until: Option<Version>,
}

impl FeatureDocument {
    /// Attach the name and turn this into a [`Feature`].
    pub fn to_feature(&self, name: &str) -> Feature {
        Feature {
            name: name.to_string(),
            description: self.description.clone(),
            since: self.since.clone(),
            until: self.until.clone(),
        }
    }
}

/// Changes layered onto an already built flavor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlavorOverlay {
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,

    /// Features added or replaced by name.
    #[serde(default)]
    pub features: BTreeMap<String, FeatureDocument>,
}

/// Convert a name -> document map into a [`FeatureSet`].
pub fn to_feature_set(features: &BTreeMap<String, FeatureDocument>) -> FeatureSet {
    features
        .iter()
        .map(|(name, doc)| (name.clone(), doc.to_feature(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flavor_with_features() {
        let doc: CatalogDocument = serde_yaml::from_str(
            r#"
flavors:
  - flavor: mysql
    description: MySQL server
    features:
      installdb:
        description: uses mysql_install_db
        since: "3.3.23"
        until: "5.7.5"
      roles: { description: Roles supported, since: "8.0.0" }
"#,
        )
        .unwrap();

        assert_eq!(doc.flavors.len(), 1);
        let mysql = &doc.flavors[0];
        assert_eq!(mysql.flavor, "mysql");
        assert_eq!(mysql.features.len(), 2);
        assert_eq!(
            mysql.features["installdb"].until,
            Some(Version::parse("5.7.5").unwrap())
        );
        assert!(mysql.features["roles"].until.is_none());
    }

    #[test]
    fn parses_extends_and_inherit() {
        let doc: CatalogDocument = serde_yaml::from_str(
            r#"
flavors:
  - flavor: pxc
    extends: percona
  - flavor: mariadb
    inherit:
      from: mysql
      features: [dynVars, semiSync]
"#,
        )
        .unwrap();

        assert_eq!(doc.flavors[0].extends.as_deref(), Some("percona"));
        let inherit = doc.flavors[1].inherit.as_ref().unwrap();
        assert_eq!(inherit.from, "mysql");
        assert_eq!(inherit.features, vec!["dynVars", "semiSync"]);
    }

    #[test]
    fn overlays_merge_into_declared_flavors() {
        let doc = CatalogDocument::from_yaml(
            "doc",
            r#"
flavors:
  - flavor: mysql
    description: MySQL server
    features:
      roles: { since: "8.0.0" }
  - flavor: percona
    extends: mysql
"#,
        )
        .unwrap();
        let overlays: BTreeMap<String, FlavorOverlay> = serde_yaml::from_str(
            r#"
mysql:
  features:
    clone: { since: "8.0.17" }
aurora:
  description: Aurora MySQL
"#,
        )
        .unwrap();

        let layered = doc.with_overlays(&overlays);

        let names: Vec<_> = layered.flavors.iter().map(|f| f.flavor.as_str()).collect();
        assert_eq!(names, vec!["mysql", "percona", "aurora"]);
        assert_eq!(layered.flavors[0].description, "MySQL server");
        assert!(layered.flavors[0].features.contains_key("clone"));
        assert!(layered.flavors[0].features.contains_key("roles"));
        assert!(layered.flavors[1].features.is_empty());
        assert_eq!(layered.flavors[2].description, "Aurora MySQL");
        // The source document is untouched
        assert!(!doc.flavors[0].features.contains_key("clone"));
    }

    #[test]
    fn from_yaml_names_the_source() {
        let err = CatalogDocument::from_yaml("broken.yml", "flavors: [").unwrap_err();
        assert!(err.to_string().contains("broken.yml"));
    }

    #[test]
    fn rejects_bad_version() {
        let result: std::result::Result<CatalogDocument, _> = serde_yaml::from_str(
            r#"
flavors:
  - flavor: mysql
    features:
      roles: { since: "8.x" }
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: std::result::Result<CatalogDocument, _> = serde_yaml::from_str(
            r#"
flavors:
  - flavor: mysql
    extend: percona
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn to_feature_set_uses_map_keys_as_names() {
        let mut docs = BTreeMap::new();
        docs.insert(
            "GTID".to_string(),
            FeatureDocument {
                description: "Global transaction identifiers".into(),
                since: Version::parse("5.6.9").unwrap(),
                until: None,
            },
        );

        let set = to_feature_set(&docs);
        assert_eq!(set["GTID"].name, "GTID");
        assert_eq!(set["GTID"].description, "Global transaction identifiers");
    }
}
