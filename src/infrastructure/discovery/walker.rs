//! Directory walker shared by discovery and freshness tracking

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::value_objects::TraversalOrder;

/// Walker over a translation directory.
///
/// Gitignore rules are disabled, hidden entries are skipped and symlinks are
/// followed. Discovery and fingerprinting must visit the same files, so both
/// build their walker here.
pub(crate) fn translation_walker(root: &Path, traversal: TraversalOrder) -> WalkBuilder {
    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(false).hidden(true).follow_links(true);
    if traversal == TraversalOrder::FileName {
        walker.sort_by_file_name(|a, b| a.cmp(b));
    }
    walker
}
