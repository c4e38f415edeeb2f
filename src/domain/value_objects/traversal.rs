//! Directory traversal order

use serde::{Deserialize, Serialize};

/// Order in which directory entries are visited during discovery.
///
/// Discovery order decides which file lands first for a locale, so the
/// default sorts entries by file name to keep builds reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Entries sorted by file name at every directory level
    #[default]
    FileName,
    /// Whatever order the operating system returns
    Filesystem,
}

impl TraversalOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "file-name" | "filename" | "name" | "sorted" => Some(Self::FileName),
            "filesystem" | "fs" | "unsorted" => Some(Self::Filesystem),
            _ => None,
        }
    }
}
