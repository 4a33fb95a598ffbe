use std::path::PathBuf;

/// A single child of a directory, as reported by the lister.
/// Read-only to the renderer.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Full path to the file or directory
    pub path: PathBuf,

    /// Entry name (last component of path)
    pub name: String,

    /// True if this is a directory
    pub is_dir: bool,

    /// True if this entry is hidden (name starts with '.')
    pub is_hidden: bool,
}

impl DirEntry {
    pub(crate) fn from_walkdir(entry: &walkdir::DirEntry) -> Self {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_hidden = name.starts_with('.');
        Self {
            path: entry.path().to_path_buf(),
            name,
            is_dir: entry.file_type().is_dir(),
            is_hidden,
        }
    }
}
