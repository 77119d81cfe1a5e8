//! Well-known flavor and feature identifiers.
//!
//! Identifiers are plain strings so that user catalogs can add their own;
//! these constants name the ones shipped in the built-in catalog.

/// Flavor identifiers.
pub mod flavor {
    pub const MYSQL: &str = "mysql";
    pub const PERCONA: &str = "percona";
    pub const MARIADB: &str = "mariadb";
    pub const NDB: &str = "ndb";
    pub const PXC: &str = "pxc";
    pub const TIDB: &str = "tidb";

    /// Reported by detection when no signature matches.
    pub const UNKNOWN: &str = "unknown";
}

/// Feature identifiers.
pub mod feature {
    pub const INSTALL_DB: &str = "installdb";
    pub const DYN_VARIABLES: &str = "dynVars";
    pub const SEMI_SYNCH: &str = "semiSync";
    pub const CRASH_SAFE: &str = "crashSafe";
    pub const GTID: &str = "GTID";
    pub const ENHANCED_GTID: &str = "enhancedGTID";
    pub const INITIALIZE: &str = "initialize";
    pub const CREATE_USER: &str = "createUser";
    pub const SUPER_READ_ONLY: &str = "superReadOnly";
    pub const MYSQLX: &str = "mysqlx";
    pub const MYSQLX_DEFAULT: &str = "mysqlxDefault";
    pub const MULTI_SOURCE: &str = "multiSource";
    pub const GROUP_REPLICATION: &str = "groupReplication";
    pub const SET_PERSIST: &str = "setPersist";
    pub const ROLES: &str = "roles";
    pub const NATIVE_AUTH: &str = "nativeAuth";
    pub const DATA_DICT: &str = "datadict";
    pub const XTRADB_CLUSTER: &str = "xtradbCluster";
    pub const ROOT_AUTH: &str = "rootAuth";
}
