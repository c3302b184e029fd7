//! Character grid that screens print into.

use tracing::trace;

use crate::screen::Printer;

/// Fixed-size text grid implementing [`Printer`].
///
/// Text running past the right edge or printed below the last row is
/// clipped. Fonts are ignored; every glyph is one terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    width: u16,
    height: u16,
    cells: Vec<char>,
    dirty: bool,
}

impl TextCanvas {
    /// Creates a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
            dirty: true,
        }
    }

    /// Canvas width in characters.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in characters.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the canvas rows as strings.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Returns whether anything was printed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Printer for TextCanvas {
    fn clear(&mut self) {
        self.cells.fill(' ');
        self.dirty = true;
    }

    fn text(&mut self, text: &str, x: u16, y: u16, font: &str) {
        trace!(text, x, y, font, "Printing text");
        if y >= self.height {
            return;
        }
        let start = y as usize * self.width as usize;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.cells[start + col as usize] = ch;
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lands_at_position() {
        let mut canvas = TextCanvas::new(8, 3);
        canvas.text("ab", 2, 1, "font");
        assert_eq!(canvas.lines(), vec!["        ", "  ab    ", "        "]);
    }

    #[test]
    fn test_text_is_clipped() {
        let mut canvas = TextCanvas::new(4, 2);
        canvas.text("abcdef", 2, 0, "");
        canvas.text("zz", 0, 5, "");
        assert_eq!(canvas.lines(), vec!["  ab", "    "]);
    }

    #[test]
    fn test_clear_blanks_and_marks_dirty() {
        let mut canvas = TextCanvas::new(3, 1);
        canvas.text("xyz", 0, 0, "");
        assert!(canvas.take_dirty());
        assert!(!canvas.take_dirty());
        canvas.clear();
        assert!(canvas.take_dirty());
        assert_eq!(canvas.lines(), vec!["   "]);
    }
}
