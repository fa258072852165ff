//! Draw targets
//!
//! A `Canvas` is a character-cell pixel surface. Lines are rasterised
//! through `draw_pixel`, so an adapter that only overrides `draw_pixel`
//! affects every drawn point.

use crate::sim::Playfield;

/// Solid block glyph used for every pixel
pub const SOLID: char = '\u{2588}';

/// Console palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    White,
    Cyan,
    Red,
    Yellow,
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SHIP: Color = Color::Cyan;
    pub const FLAME: Color = Color::Red;
    pub const ASTEROID: Color = Color::Yellow;
    pub const BULLET: Color = Color::White;
}

/// Pixel surface supplied by the rendering backend
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self);
    fn draw_pixel(&mut self, x: i32, y: i32, glyph: char, color: Color);

    /// Bresenham line, every point routed through `draw_pixel`
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: char, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.draw_pixel(x, y, glyph, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Current extent as a simulation playfield
    fn playfield(&self) -> Playfield {
        Playfield::new(self.width(), self.height())
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw_pixel(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        (**self).draw_pixel(x, y, glyph, color);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: char, color: Color) {
        (**self).draw_line(x0, y0, x1, y1, glyph, color);
    }
}

/// Wraps every pixel onto the toroidal field before handing it on
#[derive(Debug)]
pub struct WrapCanvas<C> {
    inner: C,
}

impl<C: Canvas> WrapCanvas<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Backend access, e.g. to resize it between frames
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Canvas> Canvas for WrapCanvas<C> {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn draw_pixel(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        let (x, y) = self.inner.playfield().wrap_pixel(x, y);
        self.inner.draw_pixel(x, y, glyph, color);
    }
}

/// One lit character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// In-memory character grid; out-of-range pixels are clipped
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: u32,
    height: u32,
    cells: Vec<Option<Cell>>,
}

impl TextCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    /// Resize, clearing the contents
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some()
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows of glyphs, unlit cells as spaces
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.map_or(' ', |c| c.glyph)));
            out.push('\n');
        }
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for TextCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn draw_pixel(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Some(Cell { glyph, color });
        }
    }
}
