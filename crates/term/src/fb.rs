//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(230, 230, 230);
    pub const RED: Rgb = Rgb::new(220, 70, 60);
    pub const GREEN: Rgb = Rgb::new(90, 200, 90);
    pub const YELLOW: Rgb = Rgb::new(240, 210, 70);
}

/// Minimal per-cell styling.
///
/// `bg: None` keeps the terminal's own background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::WHITE)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Drawing helpers take signed coordinates and silently clip anything
/// outside the buffer, so sprites can scroll partly off screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    /// One row of cells, or an empty slice past the bottom.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(i32::from(x), i32::from(y)).map(|i| self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (dx, ch) in s.chars().enumerate() {
            self.put_char(x + dx as i32, y, ch, style);
        }
    }

    /// Draw a multi-line sprite whose top-left cell is `(x, y)`.
    ///
    /// Spaces are transparent.
    pub fn put_sprite(&mut self, x: i32, y: i32, rows: &[&str], style: CellStyle) {
        for (dy, row) in rows.iter().enumerate() {
            for (dx, ch) in row.chars().enumerate() {
                if ch != ' ' {
                    self.put_char(x + dx as i32, y + dy as i32, ch, style);
                }
            }
        }
    }

    /// Collect the buffer's characters, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            out.extend(self.row(y).iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_both_edges() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(-2, 0, "abcdef", CellStyle::default());
        assert_eq!(fb.to_text(), "cdef\n");
    }

    #[test]
    fn sprite_spaces_are_transparent() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "xxx", CellStyle::default());
        fb.put_sprite(0, 0, &[" O ", "/|\\"], CellStyle::default());
        assert_eq!(fb.to_text(), "xOx\n/|\\\n");
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 0, 'x', CellStyle::default());
        fb.put_char(0, -1, 'x', CellStyle::default());
        assert_eq!(fb.to_text(), "  \n  \n");
        assert_eq!(fb.get(2, 0), None);
        assert!(fb.row(2).is_empty());
    }

    #[test]
    fn resize_reuses_buffer() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 1);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 1);
        assert_eq!(fb.row(0).len(), 3);
    }
}
