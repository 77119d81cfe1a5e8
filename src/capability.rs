//! Capability queries: does flavor F at version V support feature X?
//!
//! # Example
//!
//! ```
//! use dbflavor::capability::has_capability;
//! use dbflavor::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert!(has_capability(&catalog, "mysql", "roles", "8.0.21").unwrap());
//! assert!(!has_capability(&catalog, "mysql", "roles", "5.7.30").unwrap());
//!
//! // Unknown flavors support nothing
//! assert!(!has_capability(&catalog, "oracle", "roles", "8.0.21").unwrap());
//!
//! // A malformed version is the only error
//! assert!(has_capability(&catalog, "mysql", "roles", "8.x").is_err());
//! ```

use crate::catalog::Catalog;
use crate::version::{Version, VersionParseError};

/// Parse `version` and check whether `flavor` supports `feature` at it.
///
/// Unknown flavors and features answer `false`. Only an unparseable
/// version is an error, since no answer would be meaningful for it.
pub fn has_capability(
    catalog: &Catalog,
    flavor: &str,
    feature: &str,
    version: &str,
) -> Result<bool, VersionParseError> {
    let version = Version::parse(version)?;
    Ok(supports(catalog, flavor, feature, &version))
}

/// [`has_capability`] for an already parsed version.
pub fn supports(catalog: &Catalog, flavor: &str, feature: &str, version: &Version) -> bool {
    let Some(caps) = catalog.flavor(flavor) else {
        tracing::debug!("capability: unknown flavor '{}'", flavor);
        return false;
    };
    let Some(definition) = caps.features.get(feature) else {
        tracing::debug!("capability: flavor '{}' has no '{}'", flavor, feature);
        return false;
    };

    definition.is_available_at(version)
}
