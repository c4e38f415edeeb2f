//! File system ResourceDiscovery implementation
//!
//! Walks a translation directory with the `ignore` walker (gitignore rules
//! disabled, hidden entries skipped) and yields every file named
//! `<domain>.<locale>.<format>`. Files below a non UTF-8 path are skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::{CandidateResource, Registry};
use crate::domain::ports::{Discovered, DiscoveryError, ResourceDiscovery};
use crate::domain::services::{Insertion, RegistryBuilder};
use crate::domain::value_objects::{TranslationFileName, TraversalOrder};

use super::translation_walker;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsScanner {
    traversal: TraversalOrder,
}

impl FsScanner {
    pub fn new(traversal: TraversalOrder) -> Self {
        Self { traversal }
    }

    pub fn traversal(&self) -> TraversalOrder {
        self.traversal
    }

    /// Discover and group by locale, newest discovered first.
    pub fn scan(&self, root: &Path) -> Result<Registry, DiscoveryError> {
        let mut builder = RegistryBuilder::new(Insertion::NewestFirst);
        builder.extend(self.discover(root)?);
        Ok(builder.build())
    }
}

impl ResourceDiscovery for FsScanner {
    fn discover(&self, root: &Path) -> Result<Discovered, DiscoveryError> {
        let root = canonical_root(root)?;

        let candidates = translation_walker(&root, self.traversal)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(|entry| {
                let locale = TranslationFileName::parse(entry.file_name().to_str()?)?
                    .locale()
                    .to_string();
                if entry.path().to_str().is_none() {
                    warn!(
                        path = %entry.path().display(),
                        "skipping translation file with a non UTF-8 path"
                    );
                    return None;
                }
                Some((locale, entry.into_path()))
            })
            .enumerate()
            .map(|(priority, (locale, path))| {
                debug!(locale = %locale, path = %path.display(), "discovered translation file");
                CandidateResource::new(locale, path, priority)
            });

        Ok(Discovered::new(root, candidates))
    }
}

fn canonical_root(root: &Path) -> Result<PathBuf, DiscoveryError> {
    let canonical = fs::canonicalize(root).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DiscoveryError::NotFound {
            path: root.to_path_buf(),
        },
        ErrorKind::PermissionDenied => DiscoveryError::PermissionDenied {
            path: root.to_path_buf(),
        },
        _ => DiscoveryError::Unreadable {
            path: root.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    if !canonical.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    if let Err(e) = fs::read_dir(&canonical) {
        if matches!(e.kind(), ErrorKind::PermissionDenied) {
            return Err(DiscoveryError::PermissionDenied { path: canonical });
        }
        return Err(DiscoveryError::Unreadable {
            path: canonical,
            message: e.to_string(),
        });
    }

    Ok(canonical)
}
