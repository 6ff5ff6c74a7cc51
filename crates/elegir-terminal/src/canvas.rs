//! Cell-grid canvas rasterizing draw commands for a terminal.
//!
//! One canvas unit maps to one character cell. Widgets paint in f32
//! coordinates; the grid floors them to cell positions and clips anything
//! outside the viewport.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color as CrosstermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use elegir_core::{Canvas, Color, FontWeight, Point, Rect, TextStyle};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// One terminal cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Character shown in the cell
    pub ch: char,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold attribute
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
            bold: false,
        }
    }
}

/// A fixed-size grid of cells implementing [`Canvas`].
#[derive(Debug)]
pub struct CellCanvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Create a canvas of the given size, filled with blank cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, resetting all cells.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); usize::from(width) * usize::from(height)];
    }

    /// Reset all cells to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cell at (x, y), if inside the grid.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        (x < self.width && y < self.height)
            .then(|| &self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)])
    }

    /// The characters of row `y` with trailing blanks removed.
    ///
    /// Intended for tests and debugging.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut row = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.cell(x, y) {
                row.push(cell.ch);
            }
        }
        row.trim_end().to_string()
    }

    /// Queue the whole grid to a writer. The caller flushes.
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for y in 0..self.height {
            queue!(out, MoveTo(0, y))?;
            for x in 0..self.width {
                let Some(cell) = self.cell(x, y) else {
                    continue;
                };
                queue!(
                    out,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg)),
                )?;
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, Print(cell.ch))?;
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
        }
        Ok(())
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let index = y as usize * usize::from(self.width) + x as usize;
        self.cells.get_mut(index)
    }
}

impl Canvas for CellCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.floor() as i32;
        let y0 = rect.y.floor() as i32;
        let x1 = rect.right().ceil() as i32;
        let y1 = rect.bottom().ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.ch = ' ';
                    cell.bg = color;
                    cell.bold = false;
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, _width: f32) {
        let x0 = rect.x.floor() as i32;
        let y0 = rect.y.floor() as i32;
        let x1 = rect.right().ceil() as i32 - 1;
        let y1 = rect.bottom().ceil() as i32 - 1;
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let mut put = |x: i32, y: i32, ch: char| {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.ch = ch;
                cell.fg = color;
            }
        };

        for x in (x0 + 1)..x1 {
            put(x, y0, '─');
            put(x, y1, '─');
        }
        for y in (y0 + 1)..y1 {
            put(x0, y, '│');
            put(x1, y, '│');
        }
        put(x0, y0, '┌');
        put(x1, y0, '┐');
        put(x0, y1, '└');
        put(x1, y1, '┘');
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let mut x = position.x.floor() as i32;
        let y = position.y.floor() as i32;
        let bold = style.weight == FontWeight::Bold;

        for ch in text.chars() {
            let advance = match ch.width() {
                Some(w) if w > 0 => w as i32,
                _ => continue,
            };
            if let Some(cell) = self.cell_mut(x, y) {
                cell.ch = ch;
                cell.fg = style.color;
                cell.bold = bold;
            }
            // A wide glyph visually occupies the following cell too.
            if advance == 2 {
                if let Some(cell) = self.cell_mut(x + 1, y) {
                    cell.ch = ' ';
                }
            }
            x += advance;
        }
    }
}

fn to_crossterm(color: Color) -> CrosstermColor {
    let (r, g, b) = color.to_rgb8();
    CrosstermColor::Rgb { r, g, b }
}
