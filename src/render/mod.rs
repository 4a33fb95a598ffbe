mod color;
mod entry;
mod lister;
mod options;
mod sort;
mod tree;
mod writer;

pub use color::{parse_color, ColorSequence};
pub use entry::DirEntry;
pub use lister::list_children;
pub use options::RenderOptions;
pub use sort::{compare_names, sort_entries};
pub use tree::render_tree;
pub use writer::LineWriter;
