use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

/// Writes one line at a time to an output sink, in a given color.
///
/// The color travels with each call instead of living on the writer as
/// settable state, so a line can never be emitted under a stale color.
/// With colors disabled the text is written verbatim, with no escape
/// sequences. The writer appends the line terminator itself and owns
/// flush behavior.
pub struct LineWriter<W: Write> {
    out: W,
    color_enabled: bool,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W, color_enabled: bool) -> Self {
        Self { out, color_enabled }
    }

    /// Emit one line of text in the given color.
    pub fn write_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color_enabled {
            queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(color_enabled: bool, text: &str, color: Color) -> Vec<u8> {
        let mut writer = LineWriter::new(Vec::new(), color_enabled);
        writer.write_line(text, color).unwrap();
        writer.into_inner()
    }

    #[test]
    fn plain_mode_writes_text_verbatim() {
        let out = written(false, "   Apple.txt", Color::Magenta);
        assert_eq!(out, b"   Apple.txt\n");
    }

    #[test]
    fn plain_mode_has_no_escapes() {
        let out = written(false, "Documents/", Color::Yellow);
        assert!(!out.contains(&0x1b));
    }

    #[test]
    fn color_mode_wraps_text_in_escapes() {
        let out = written(true, "Documents/", Color::Yellow);
        let text_pos = out
            .windows(b"Documents/".len())
            .position(|w| w == b"Documents/")
            .unwrap();

        // Escape before the text, reset after it, newline last
        assert_eq!(out[0], 0x1b);
        assert!(text_pos > 0);
        assert!(out[text_pos + b"Documents/".len()..].contains(&0x1b));
        assert_eq!(*out.last().unwrap(), b'\n');
    }

    #[test]
    fn same_color_produces_same_bytes() {
        let a = written(true, "x", Color::Magenta);
        let b = written(true, "x", Color::Magenta);
        assert_eq!(a, b);
    }

    #[test]
    fn different_colors_produce_different_bytes() {
        let a = written(true, "x", Color::Magenta);
        let b = written(true, "x", Color::Yellow);
        assert_ne!(a, b);
    }

    #[test]
    fn write_errors_propagate() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = LineWriter::new(FailingSink, false);
        assert!(writer.write_line("anything", Color::White).is_err());
    }
}
