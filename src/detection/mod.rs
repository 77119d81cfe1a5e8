//! Flavor detection from installed files.
//!
//! # Example
//!
//! ```
//! use dbflavor::detection::FlavorDetector;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join("bin")).unwrap();
//! fs::write(temp.path().join("bin").join("mysqld"), "").unwrap();
//!
//! let detection = FlavorDetector::builtin().detect(temp.path());
//! assert_eq!(detection.flavor, "mysql");
//! ```

pub mod detector;
pub mod signature;

pub use detector::{detect_flavor, FlavorDetection, FlavorDetector};
pub use signature::{builtin_signatures, ElementPath, FlavorSignature, FsProbe, PathProbe};
