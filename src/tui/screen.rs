//! Character grid that views draw into.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Rejected write on a [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The write started outside the grid.
    OutOfBounds { row: u16, col: u16 },
    /// The text ran past the right edge; the part that fit was written.
    Truncated { row: u16, col: u16 },
}

impl DrawError {
    /// Whether this is the bottom-right boundary case some terminals reject
    /// even though everything visible was written.
    pub fn is_terminal_edge(&self, size: Rect) -> bool {
        match *self {
            DrawError::Truncated { row, .. } => size.height > 0 && row == size.bottom() - 1,
            DrawError::OutOfBounds { .. } => false,
        }
    }
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::OutOfBounds { row, col } => {
                write!(f, "write at row {} col {} is outside the screen", row, col)
            }
            DrawError::Truncated { row, col } => {
                write!(f, "text truncated at row {} col {}", row, col)
            }
        }
    }
}

impl std::error::Error for DrawError {}

/// A character grid addressed by absolute `(row, col)`.
pub trait Screen {
    /// The drawable area.
    fn size(&self) -> Rect;

    /// Overwrites cells starting at `(row, col)`.
    fn write_at(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<(), DrawError>;

    /// Writes without disturbing anything outside the grid; never fails.
    fn insert_at(&mut self, row: u16, col: u16, text: &str, style: Style);

    /// Blanks every cell.
    fn erase(&mut self);
}

/// [`Screen`] over a ratatui [`Buffer`], usually the frame being drawn.
pub struct BufferScreen<'a> {
    buf: &'a mut Buffer,
}

impl<'a> BufferScreen<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    fn contains(&self, row: u16, col: u16) -> bool {
        let area = self.buf.area;
        row >= area.top() && row < area.bottom() && col >= area.left() && col < area.right()
    }
}

impl Screen for BufferScreen<'_> {
    fn size(&self) -> Rect {
        self.buf.area
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<(), DrawError> {
        if !self.contains(row, col) {
            return Err(DrawError::OutOfBounds { row, col });
        }
        let room = (self.buf.area.right() - col) as usize;
        self.buf.set_stringn(col, row, text, room, style);
        if text.chars().count() > room {
            return Err(DrawError::Truncated {
                row,
                col: self.buf.area.right(),
            });
        }
        Ok(())
    }

    fn insert_at(&mut self, row: u16, col: u16, text: &str, style: Style) {
        if self.contains(row, col) {
            let room = (self.buf.area.right() - col) as usize;
            self.buf.set_stringn(col, row, text, room, style);
        }
    }

    fn erase(&mut self) {
        self.buf.reset();
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::rows;
    use super::*;

    #[test]
    fn test_write_at_overwrites() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
        let mut screen = BufferScreen::new(&mut buf);
        screen.write_at(0, 0, "abcdef", Style::default()).unwrap();
        screen.write_at(0, 2, "XY", Style::default()).unwrap();
        assert_eq!(rows(&buf)[0], "abXYef  ");
    }

    #[test]
    fn test_write_at_truncates_at_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        let mut screen = BufferScreen::new(&mut buf);
        let err = screen.write_at(0, 3, "hello", Style::default()).unwrap_err();
        assert_eq!(err, DrawError::Truncated { row: 0, col: 5 });
        assert!(!err.is_terminal_edge(screen.size()));

        let edge = screen.write_at(1, 4, "xy", Style::default()).unwrap_err();
        assert!(edge.is_terminal_edge(screen.size()));
        assert_eq!(rows(&buf), vec!["   he", "    x"]);
    }

    #[test]
    fn test_write_at_outside() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let mut screen = BufferScreen::new(&mut buf);
        let err = screen.write_at(1, 0, "a", Style::default()).unwrap_err();
        assert_eq!(err, DrawError::OutOfBounds { row: 1, col: 0 });
        assert!(!err.is_terminal_edge(screen.size()));
    }

    #[test]
    fn test_insert_at_clips_silently() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let mut screen = BufferScreen::new(&mut buf);
        screen.insert_at(0, 1, "abc", Style::default());
        screen.insert_at(4, 4, "zzz", Style::default());
        assert_eq!(rows(&buf), vec![" ab"]);
    }

    #[test]
    fn test_erase() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let mut screen = BufferScreen::new(&mut buf);
        screen.write_at(0, 0, "abc", Style::default()).unwrap();
        screen.erase();
        assert_eq!(rows(&buf), vec!["   "]);
    }
}
