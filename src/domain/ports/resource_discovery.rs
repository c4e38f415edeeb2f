//! ResourceDiscovery port
//!
//! Discovers translation resources below a root directory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::CandidateResource;

pub trait ResourceDiscovery {
    /// Start discovering below `root`.
    ///
    /// Only an unusable root is an error; the returned sequence is lazy and
    /// yields `(locale, absolute path)` candidates in discovery order.
    fn discover(&self, root: &Path) -> Result<Discovered, DiscoveryError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("translation directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("translation path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied reading translation directory: {path}\n  → Fix: Check file permissions\n  → Run: chmod -R +r {path}")]
    PermissionDenied { path: PathBuf },

    #[error("failed to read translation directory {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// Lazy sequence of discovered candidates below a canonical root.
pub struct Discovered {
    root: PathBuf,
    candidates: Box<dyn Iterator<Item = CandidateResource<PathBuf>>>,
}

impl Discovered {
    pub fn new(
        root: PathBuf,
        candidates: impl Iterator<Item = CandidateResource<PathBuf>> + 'static,
    ) -> Self {
        Self {
            root,
            candidates: Box::new(candidates),
        }
    }

    /// Canonical root the candidates were discovered under
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for Discovered {
    type Item = CandidateResource<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        self.candidates.next()
    }
}

impl fmt::Debug for Discovered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discovered")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
