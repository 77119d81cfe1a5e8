//! Optional user configuration.
//!
//! A config file can add signatures (tried before the built-in list) and
//! layer features onto the built-in catalog:
//!
//! ```yaml
//! signatures:
//!   - flavor: mysql
//!     all_needed: false
//!     elements: [bin/mysqld-custom]
//! flavors:
//!   mysql:
//!     features:
//!       clone: { description: Clone plugin, since: "8.0.17" }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::FlavorConfig;
