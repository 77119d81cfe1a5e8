//! First-match flavor detection over an ordered signature list.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::signature::{builtin_signatures, FlavorSignature, FsProbe, PathProbe};
use crate::catalog::names::flavor;

/// Outcome of scanning one installation root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlavorDetection {
    /// The scanned root.
    pub root: PathBuf,

    /// Detected flavor, or `"unknown"`.
    pub flavor: String,

    /// Position of the matching signature in the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_index: Option<usize>,

    /// Elements that proved the match, as `dir/file`.
    pub matched: Vec<String>,
}

impl FlavorDetection {
    fn unknown(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            flavor: flavor::UNKNOWN.to_string(),
            signature_index: None,
            matched: Vec::new(),
        }
    }

    /// True when no signature matched.
    pub fn is_unknown(&self) -> bool {
        self.signature_index.is_none()
    }
}

/// Infers the flavor installed under a root directory.
///
/// Signatures are tried in list order and the first match wins, so more
/// specific signatures must precede broader ones.
#[derive(Debug)]
pub struct FlavorDetector<P: PathProbe = FsProbe> {
    signatures: Vec<FlavorSignature>,
    probe: P,
}

impl FlavorDetector {
    /// Detector over the real filesystem.
    pub fn new(signatures: Vec<FlavorSignature>) -> Self {
        Self::with_probe(signatures, FsProbe)
    }

    /// Detector with the built-in signature list.
    pub fn builtin() -> Self {
        Self::new(builtin_signatures())
    }
}

impl<P: PathProbe> FlavorDetector<P> {
    /// Detector using a custom existence probe.
    pub fn with_probe(signatures: Vec<FlavorSignature>, probe: P) -> Self {
        Self { signatures, probe }
    }

    /// Signatures in evaluation order.
    pub fn signatures(&self) -> &[FlavorSignature] {
        &self.signatures
    }

    /// Scan `root` and report the first matching signature.
    pub fn detect(&self, root: &Path) -> FlavorDetection {
        for (index, signature) in self.signatures.iter().enumerate() {
            if let Some(matched) = signature.evaluate(root, &self.probe) {
                tracing::debug!(
                    "detection: {} matched signature #{} ({})",
                    root.display(),
                    index,
                    signature.flavor
                );
                return FlavorDetection {
                    root: root.to_path_buf(),
                    flavor: signature.flavor.clone(),
                    signature_index: Some(index),
                    matched: matched.iter().map(|e| e.to_string()).collect(),
                };
            }
        }

        tracing::debug!("detection: no signature matched {}", root.display());
        FlavorDetection::unknown(root)
    }
}

/// Flavor of the first signature matching under `root`, or `"unknown"`.
pub fn detect_flavor<'a>(root: &Path, signatures: &'a [FlavorSignature]) -> &'a str {
    signatures
        .iter()
        .find(|signature| signature.evaluate(root, &FsProbe).is_some())
        .map_or(flavor::UNKNOWN, |signature| signature.flavor.as_str())
}
