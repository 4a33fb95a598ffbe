use std::path::PathBuf;

use super::color::ColorSequence;

/// Configuration for one render invocation. Built once, never mutated
/// while rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Root directory to render
    pub root: PathBuf,

    /// Include hidden files/directories (starting with .)
    pub show_hidden: bool,

    /// Cycle colors per depth level; when false every line is plain
    pub use_color: bool,

    /// Colors cycled through by depth
    pub colors: ColorSequence,
}

impl RenderOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            show_hidden: false,
            use_color: true,
            colors: ColorSequence::default(),
        }
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Set whether to colorize output
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }

    /// Set the color cycle
    pub fn with_colors(mut self, colors: ColorSequence) -> Self {
        self.colors = colors;
        self
    }
}
