use crossterm::style::Color;

/// An ordered, non-empty sequence of colors cycled through by depth.
/// Fixed for the lifetime of a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSequence {
    colors: Vec<Color>,
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self {
            colors: vec![Color::White, Color::Magenta, Color::Yellow],
        }
    }
}

impl ColorSequence {
    /// Build a sequence from an explicit color list. Returns `None` for an
    /// empty list; the cycle index is undefined without at least one color.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Color assigned to a depth level: `colors[depth % len]`.
    /// Pure function of the depth and the sequence.
    pub fn color_for_depth(&self, depth: usize) -> Color {
        self.colors[depth % self.colors.len()]
    }
}

/// Parse a color name as written in the configuration file.
pub fn parse_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "purple" | "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "grey" | "gray" => Some(Color::Grey),
        "dark_red" => Some(Color::DarkRed),
        "dark_green" => Some(Color::DarkGreen),
        "dark_yellow" => Some(Color::DarkYellow),
        "dark_blue" => Some(Color::DarkBlue),
        "dark_magenta" => Some(Color::DarkMagenta),
        "dark_cyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" => Some(Color::DarkGrey),
        _ => None,
    }
}
