//! Built-in catalog embedded at compile time.

use super::{Catalog, CatalogDocument};
use crate::error::Result;

/// Name reported in parse errors for the embedded document.
pub const BUILTIN_SOURCE: &str = "data/capabilities.yml";

/// Embedded catalog document.
static CAPABILITIES_YML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/capabilities.yml"
));

/// Parse the built-in catalog document, before derivation.
pub fn builtin_document() -> Result<CatalogDocument> {
    CatalogDocument::from_yaml(BUILTIN_SOURCE, CAPABILITIES_YML)
}

/// Build the built-in catalog.
pub fn load_builtin() -> Result<Catalog> {
    Catalog::from_document(&builtin_document()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::{feature, flavor};
    use crate::version::Version;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn builtin_loads() {
        let catalog = load_builtin().unwrap();
        let names: Vec<_> = catalog.flavor_names().collect();
        assert_eq!(
            names,
            vec![
                flavor::MARIADB,
                flavor::MYSQL,
                flavor::NDB,
                flavor::PERCONA,
                flavor::PXC,
                flavor::TIDB
            ]
        );
    }

    #[test]
    fn mysql_has_full_feature_list() {
        let catalog = load_builtin().unwrap();
        let mysql = catalog.flavor(flavor::MYSQL).unwrap();
        assert_eq!(mysql.description, "MySQL server");
        assert_eq!(mysql.features.len(), 17);

        let installdb = &mysql.features[feature::INSTALL_DB];
        assert_eq!(installdb.since, v("3.3.23"));
        assert_eq!(installdb.until, Some(v("5.7.5")));
    }

    #[test]
    fn percona_matches_mysql_features() {
        let catalog = load_builtin().unwrap();
        let mysql = catalog.flavor(flavor::MYSQL).unwrap();
        let percona = catalog.flavor(flavor::PERCONA).unwrap();
        assert_eq!(percona.features, mysql.features);
        assert_eq!(percona.description, "Percona Server");
    }

    #[test]
    fn pxc_adds_xtradb_cluster_to_percona() {
        let catalog = load_builtin().unwrap();
        let percona = catalog.flavor(flavor::PERCONA).unwrap();
        let pxc = catalog.flavor(flavor::PXC).unwrap();

        assert_eq!(pxc.features.len(), percona.features.len() + 1);
        assert!(pxc.features.contains_key(feature::XTRADB_CLUSTER));
        assert!(!percona.features.contains_key(feature::XTRADB_CLUSTER));
        assert_eq!(pxc.features[feature::GTID], percona.features[feature::GTID]);
    }

    #[test]
    fn mariadb_takes_a_subset_of_mysql() {
        let catalog = load_builtin().unwrap();
        let mariadb = catalog.flavor(flavor::MARIADB).unwrap();
        let mysql = catalog.flavor(flavor::MYSQL).unwrap();

        let mut names: Vec<_> = mariadb.features.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                feature::DYN_VARIABLES,
                feature::INSTALL_DB,
                feature::ROOT_AUTH,
                feature::SEMI_SYNCH
            ]
        );
        assert_eq!(
            mariadb.features[feature::SEMI_SYNCH],
            mysql.features[feature::SEMI_SYNCH]
        );
        // MariaDB still ships mysql_install_db
        assert!(mariadb.features[feature::INSTALL_DB].until.is_none());
    }

    #[test]
    fn tidb_and_ndb_have_no_features() {
        let catalog = load_builtin().unwrap();
        assert!(catalog.flavor(flavor::TIDB).unwrap().features.is_empty());
        assert!(catalog.flavor(flavor::NDB).unwrap().features.is_empty());
    }

    #[test]
    fn builtin_document_keeps_declaration_order() {
        let doc = builtin_document().unwrap();
        let mysql = doc.flavors.iter().position(|f| f.flavor == flavor::MYSQL);
        let percona = doc.flavors.iter().position(|f| f.flavor == flavor::PERCONA);
        let pxc = doc.flavors.iter().position(|f| f.flavor == flavor::PXC);
        assert!(mysql < percona && percona < pxc);
    }
}
