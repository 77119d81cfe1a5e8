//! Filesystem signatures that identify a flavor.
//!
//! A signature is a list of `(subdir, filename)` elements relative to an
//! installation root, plus a policy: either every element must exist, or any
//! one of them is enough.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::names::flavor;

/// One file expected under the installation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElementPath {
    /// Directory below the root (`bin`, `lib`). May be empty.
    pub dir: String,

    /// File name inside `dir`.
    pub file_name: String,
}

impl ElementPath {
    /// Create an element from its directory and file name.
    pub fn new(dir: &str, file_name: &str) -> Self {
        Self {
            dir: dir.to_string(),
            file_name: file_name.to_string(),
        }
    }

    /// Full path of this element under `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        if self.dir.is_empty() {
            root.join(&self.file_name)
        } else {
            root.join(&self.dir).join(&self.file_name)
        }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dir.is_empty() {
            f.write_str(&self.file_name)
        } else {
            write!(f, "{}/{}", self.dir, self.file_name)
        }
    }
}

impl TryFrom<String> for ElementPath {
    type Error = String;

    /// Parse `"bin/mysqld"` style paths; the last `/` separates the file name.
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.starts_with('/') {
            return Err(format!("element path must be relative: {}", s));
        }
        if s.split('/').any(|part| part == "..") {
            return Err(format!("element path must stay under the root: {}", s));
        }

        let (dir, file_name) = match s.rsplit_once('/') {
            Some((dir, file_name)) => (dir, file_name),
            None => ("", s.as_str()),
        };
        if file_name.is_empty() {
            return Err(format!("element path has no file name: {}", s));
        }

        Ok(Self::new(dir, file_name))
    }
}

impl From<ElementPath> for String {
    fn from(e: ElementPath) -> Self {
        e.to_string()
    }
}

/// Existence check used by the detector.
pub trait PathProbe {
    /// `Ok(true)` if `path` exists, `Ok(false)` if it does not, `Err` if the
    /// answer could not be determined.
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probes the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }
}

/// A flavor fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlavorSignature {
    /// Flavor reported when this signature matches.
    pub flavor: String,

    /// `true`: every element must exist. `false`: one is enough.
    pub all_needed: bool,

    /// Elements in evaluation order.
    pub elements: Vec<ElementPath>,
}

impl FlavorSignature {
    /// Signature that needs every element.
    pub fn all(flavor: &str, elements: Vec<ElementPath>) -> Self {
        Self {
            flavor: flavor.to_string(),
            all_needed: true,
            elements,
        }
    }

    /// Signature that needs any one element.
    pub fn any(flavor: &str, elements: Vec<ElementPath>) -> Self {
        Self {
            flavor: flavor.to_string(),
            all_needed: false,
            elements,
        }
    }

    /// Evaluate against `root`, returning the elements that proved the match.
    ///
    /// Probe errors count as "absent". Evaluation stops as soon as the
    /// outcome is known. A signature without elements never matches.
    pub fn evaluate(&self, root: &Path, probe: &dyn PathProbe) -> Option<Vec<&ElementPath>> {
        if self.elements.is_empty() {
            return None;
        }

        let mut found = Vec::new();
        for element in &self.elements {
            let present = element_present(root, element, probe);
            match (self.all_needed, present) {
                (true, false) => return None,
                (true, true) => found.push(element),
                (false, true) => return Some(vec![element]),
                (false, false) => {}
            }
        }

        if self.all_needed {
            Some(found)
        } else {
            None
        }
    }
}

fn element_present(root: &Path, element: &ElementPath, probe: &dyn PathProbe) -> bool {
    let path = element.resolve(root);
    match probe.exists(&path) {
        Ok(present) => present,
        Err(e) => {
            tracing::debug!(
                "detection: cannot probe {}: {}; treating as absent",
                path.display(),
                e
            );
            false
        }
    }
}

/// Static form of a built-in signature.
struct SignatureDef {
    flavor: &'static str,
    all_needed: bool,
    elements: &'static [(&'static str, &'static str)],
}

/// Built-in signatures, most specific first.
///
/// PXC ships the Percona client library too, so the PXC signatures (three
/// co-occurring files) must come before the single-file Percona one. MySQL
/// comes last because every other flavor also ships a `mysqld`.
const BUILTIN_SIGNATURES: &[SignatureDef] = &[
    SignatureDef {
        flavor: flavor::PXC,
        all_needed: true,
        elements: &[
            ("bin", "garbd"),
            ("lib", "libgalera_smm.so"),
            ("lib", "libperconaserverclient.so"),
        ],
    },
    SignatureDef {
        flavor: flavor::PXC,
        all_needed: true,
        elements: &[
            ("bin", "garbd"),
            ("lib", "libgalera_smm.a"),
            ("lib", "libperconaserverclient.a"),
        ],
    },
    SignatureDef {
        flavor: flavor::PXC,
        all_needed: true,
        elements: &[
            ("bin", "garbd"),
            ("lib", "libgalera_smm.dylib"),
            ("lib", "libperconaserverclient.dylib"),
        ],
    },
    SignatureDef {
        flavor: flavor::MARIADB,
        all_needed: false,
        elements: &[
            ("bin", "aria_chk"),
            ("lib", "libmariadbclient.a"),
            ("lib", "libmariadbclient.dylib"),
            ("lib", "libmariadb.a"),
            ("lib", "libmariadb.dylib"),
        ],
    },
    SignatureDef {
        flavor: flavor::PERCONA,
        all_needed: false,
        elements: &[
            ("lib", "libperconaserverclient.a"),
            ("lib", "libperconaserverclient.so"),
            ("lib", "libperconaserverclient.dylib"),
        ],
    },
    SignatureDef {
        flavor: flavor::TIDB,
        all_needed: false,
        elements: &[("bin", "tidb-server")],
    },
    SignatureDef {
        flavor: flavor::MYSQL,
        all_needed: false,
        elements: &[
            ("bin", "mysqld"),
            ("bin", "mysqld-debug"),
            ("lib", "libmysqlclient.a"),
        ],
    },
];

/// The built-in signature list, in evaluation order.
pub fn builtin_signatures() -> Vec<FlavorSignature> {
    BUILTIN_SIGNATURES
        .iter()
        .map(|def| FlavorSignature {
            flavor: def.flavor.to_string(),
            all_needed: def.all_needed,
            elements: def
                .elements
                .iter()
                .map(|(dir, file_name)| ElementPath::new(dir, file_name))
                .collect(),
        })
        .collect()
}
