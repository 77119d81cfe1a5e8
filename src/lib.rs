//! dbflavor - Database flavor detection and version-gated capabilities.
//!
//! dbflavor looks at the files of a database server installation to tell
//! which flavor it is (MySQL, Percona Server, Percona XtraDB Cluster,
//! MariaDB, TiDB, NDB) and answers whether a flavor at a given version
//! supports a named feature.
//!
//! # Modules
//!
//! - [`version`] - Dotted numeric versions and their ordering
//! - [`catalog`] - Per-flavor feature sets with version windows
//! - [`detection`] - Filesystem signatures and first-match detection
//! - [`capability`] - The "flavor F at version V supports X?" query
//! - [`config`] - Optional YAML with extra signatures and flavor overlays
//! - [`context`] - The catalog and detector built at startup
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use dbflavor::context::FlavorContext;
//!
//! let ctx = FlavorContext::builtin().unwrap();
//! assert!(ctx.has_capability("percona", "GTID", "5.6.9").unwrap());
//! assert!(!ctx.has_capability("mariadb", "GTID", "10.4.12").unwrap());
//! ```

pub mod capability;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod detection;
pub mod error;
pub mod ui;
pub mod version;

pub use error::{FlavorError, Result};
