use std::cmp::Ordering;

use super::entry::DirEntry;

/// Compare two entry names case-insensitively, breaking ties by exact
/// codepoint order, so entries differing only in case sort with the
/// earlier exact bytes first ("Cat.png" before "cat.png").
///
/// Directories and files are not segregated; an entry's position depends
/// on its name alone.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        ordering => ordering,
    }
}

/// Sort a sibling set into display order.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
}
