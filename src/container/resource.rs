//! Tracked directory resources
//!
//! A compiled container is only valid as long as the directories it was built
//! from are unchanged. Each tracked directory is fingerprinted (SHA-256 over
//! the sorted relative path, size and mtime of every matching file) so a
//! cached container can tell whether it must be rebuilt.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::domain::value_objects::TraversalOrder;
use crate::infrastructure::discovery::translation_walker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResource {
    path: PathBuf,
    pattern: Option<String>,
}

impl DirectoryResource {
    /// Prefix of every fingerprint
    pub const PREFIX: &'static str = "sha256:";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pattern: None,
        }
    }

    /// Only track files whose name matches a glob (gitignore syntax).
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.path.to_string_lossy().as_bytes());

        if !self.path.is_dir() {
            hasher.update(b"\0missing");
            return format!("{}{:x}", Self::PREFIX, hasher.finalize());
        }

        let matcher = self.pattern.as_deref().and_then(|p| self.matcher(p));

        let walker = translation_walker(&self.path, TraversalOrder::FileName);

        for entry in walker.build().flatten() {
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if let Some(matcher) = &matcher {
                if !matcher.matched(entry.path(), false).is_ignore() {
                    continue;
                }
            }
            let Ok(meta) = entry.metadata() else {
                continue;
            };

            let relative = entry.path().strip_prefix(&self.path).unwrap_or(entry.path());
            let mtime = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_nanos())
                .unwrap_or(0);

            hasher.update(relative.to_string_lossy().as_bytes());
            hasher.update([0u8]);
            hasher.update(meta.len().to_le_bytes());
            hasher.update(mtime.to_le_bytes());
        }

        format!("{}{:x}", Self::PREFIX, hasher.finalize())
    }

    /// Whether the directory still matches a fingerprint taken earlier.
    pub fn is_fresh(&self, fingerprint: &str) -> bool {
        self.fingerprint() == fingerprint
    }

    fn matcher(&self, pattern: &str) -> Option<Gitignore> {
        let mut builder = GitignoreBuilder::new(&self.path);
        let built = builder
            .add_line(None, pattern)
            .map_err(|e| e.to_string())
            .and_then(|b| b.build().map_err(|e| e.to_string()));
        match built {
            Ok(matcher) => Some(matcher),
            Err(err) => {
                warn!(pattern, error = %err, "invalid resource pattern, tracking every file");
                None
            }
        }
    }
}
