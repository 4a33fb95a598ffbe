use std::fs;
use std::io::Write;
use std::path::Path;

use crossterm::style::Color;

use crate::error::{Result, TreeError};

use super::lister::list_children;
use super::options::RenderOptions;
use super::sort::sort_entries;
use super::writer::LineWriter;

/// Three spaces per depth level, no tabs.
const INDENT: &str = "   ";

/// Render a directory tree to the writer.
///
/// The root line is always White, independent of the color setting; the
/// cycle applies from depth 1 down. Directories are visited pre-order:
/// an entry's line is written before its children are. A directory that
/// cannot be listed contributes no lines; a write failure aborts the
/// render immediately.
///
/// Symbolic-link loops are not detected; a circular tree recurses until
/// the process dies.
pub fn render_tree<W: Write>(options: &RenderOptions, out: &mut LineWriter<W>) -> Result<()> {
    let root = fs::canonicalize(&options.root)
        .map_err(|_| TreeError::InvalidRoot(options.root.clone()))?;
    let metadata =
        fs::metadata(&root).map_err(|_| TreeError::InvalidRoot(options.root.clone()))?;
    if !metadata.is_dir() {
        return Err(TreeError::InvalidRoot(options.root.clone()));
    }

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    out.write_line(&format!("{}/", name), Color::White)?;
    visit(&root, 1, options, out)?;
    out.flush()?;

    Ok(())
}

fn visit<W: Write>(
    dir: &Path,
    depth: usize,
    options: &RenderOptions,
    out: &mut LineWriter<W>,
) -> Result<()> {
    let mut entries = list_children(dir);

    if !options.show_hidden {
        entries.retain(|e| !e.is_hidden);
    }
    sort_entries(&mut entries);

    let indent = INDENT.repeat(depth);

    for entry in entries {
        let color = if options.use_color {
            options.colors.color_for_depth(depth)
        } else {
            Color::White
        };

        let line = if entry.is_dir {
            format!("{}{}/", indent, entry.name)
        } else {
            format!("{}{}", indent, entry.name)
        };
        out.write_line(&line, color)?;

        if entry.is_dir {
            visit(&entry.path, depth + 1, options, out)?;
        }
    }

    Ok(())
}
