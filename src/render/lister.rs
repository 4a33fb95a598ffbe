use std::path::Path;
use walkdir::WalkDir;

use super::entry::DirEntry;

/// List the immediate children of a directory.
///
/// Listing order is unspecified; callers sort. A missing or unreadable
/// directory yields an empty listing rather than an error, so a
/// permission problem deep in the tree never aborts the whole render.
pub fn list_children(dir: &Path) -> Vec<DirEntry> {
    let mut children = Vec::new();

    for result in WalkDir::new(dir).min_depth(1).max_depth(1) {
        match result {
            Ok(entry) => children.push(DirEntry::from_walkdir(&entry)),
            Err(err) => {
                tracing::debug!(path = %dir.display(), error = %err, "Skipping unreadable entry");
            }
        }
    }

    children
}
