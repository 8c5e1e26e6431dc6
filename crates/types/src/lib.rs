//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (editor state, terminal rendering, export).
//!
//! # Coordinate Spaces
//!
//! - **Grid space**: integer `(col, row)` indices into the canvas ([`GridPos`])
//! - **World space**: `grid * CELL_SIZE`, floating point ([`Vec2`])
//! - **Screen space**: virtual pixels laid over terminal cells ([`Vec2`])
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_WIDTH` x `CANVAS_HEIGHT` | 500 x 500 | Canvas size in cells |
//! | `CELL_SIZE` | (2, 3) | World units per cell (cells are not square) |
//! | `ZOOM_MIN` .. `ZOOM_MAX` | 3 .. 25 | Camera zoom clamp |
//! | `ZOOM_DEFAULT` | 10 | Startup zoom |
//! | `CAMERA_MARGIN` | 50 | World units the camera may leave the canvas by |
//! | `KEY_REPEAT_SECS` | 0.2 | Brush cycling throttle |
//! | `SCROLL_UNITS_PER_NOTCH` | 30 | Scroll amount per wheel notch |
//!
//! # Examples
//!
//! ```
//! use ascii_art_types::{Glyph, ASCII_CHARS};
//!
//! let hash = Glyph::from_char('#').unwrap();
//! assert_eq!(hash.index(), 2);
//! assert_eq!(Glyph::from_index(ASCII_CHARS.len() + 2), hash);
//! assert!(Glyph::from_char(' ').is_none());
//! ```

use std::ops::{Add, Div, Mul, Sub};

/// Canvas width in cells
pub const CANVAS_WIDTH: usize = 500;

/// Canvas height in cells
pub const CANVAS_HEIGHT: usize = 500;

/// World-space size of a single cell (x, y)
pub const CELL_SIZE: Vec2 = Vec2::new(2.0, 3.0);

/// Lowest allowed camera zoom
pub const ZOOM_MIN: f64 = 3.0;

/// Highest allowed camera zoom
pub const ZOOM_MAX: f64 = 25.0;

/// Camera zoom at startup
pub const ZOOM_DEFAULT: f64 = 10.0;

/// How far (world units) the camera may travel past the canvas edges
pub const CAMERA_MARGIN: f64 = 50.0;

/// Scroll units are divided by this before being applied to zoom
pub const ZOOM_SCROLL_DIVISOR: f64 = 30.0;

/// Scroll units reported per mouse wheel notch
pub const SCROLL_UNITS_PER_NOTCH: f64 = 30.0;

/// Minimum time between brush steps while a cycle key is held
pub const KEY_REPEAT_SECS: f64 = 0.2;

/// Brush index selected at startup (`#`)
pub const DEFAULT_GLYPH_INDEX: usize = 2;

/// Screen pixels per terminal column
pub const PIXELS_PER_COLUMN: u16 = 8;

/// Screen pixels per terminal row
pub const PIXELS_PER_ROW: u16 = 16;

/// Frame rate cap, 0 means uncapped
pub const MAX_FPS: u32 = 0;

/// Caption shown in the terminal title
pub const WINDOW_CAPTION: &str = "ASCII Art Software";

/// Directory saved drawings are written into
pub const SAVE_DIR: &str = "saved";

/// The paintable alphabet: every printable ASCII character except space.
pub const ASCII_CHARS: &str =
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Character written for an empty cell on export.
pub const EMPTY_CHAR: char = ' ';

/// One entry of [`ASCII_CHARS`].
///
/// Stored as the byte value so a `Glyph` can only ever hold a member of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(u8);

impl Glyph {
    /// Number of glyphs in the alphabet (94).
    pub const COUNT: usize = ASCII_CHARS.len();

    /// Look up a character, returns `None` for anything outside the alphabet.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_graphic() {
            Some(Glyph(ch as u8))
        } else {
            None
        }
    }

    /// Glyph at `index`, wrapping modulo the alphabet length.
    pub fn from_index(index: usize) -> Self {
        Glyph(ASCII_CHARS.as_bytes()[index % Self::COUNT])
    }

    /// Position of this glyph in [`ASCII_CHARS`].
    pub fn index(self) -> usize {
        (self.0 - b'!') as usize
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

/// A canvas cell: `None` is EMPTY, otherwise the painted glyph.
pub type Cell = Option<Glyph>;

/// Character used to represent a cell in exported text.
pub fn cell_char(cell: Cell) -> char {
    cell.map(Glyph::as_char).unwrap_or(EMPTY_CHAR)
}

/// Two-component floating point vector used for world and screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise multiply.
    pub fn scale(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise divide.
    pub fn div_by(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x / other.x, self.y / other.y)
    }

    pub fn min_component(self) -> f64 {
        self.x.min(self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// Integer cell index `(col, row)`. May be out of range; callers range-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: i64,
    pub y: i64,
}

impl GridPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Virtual pixels per terminal cell.
///
/// Screen space is measured in these pixels so camera math stays independent
/// of how coarse the terminal grid is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelScale {
    pub px_per_col: u16,
    pub px_per_row: u16,
}

impl Default for PixelScale {
    fn default() -> Self {
        Self {
            px_per_col: PIXELS_PER_COLUMN,
            px_per_row: PIXELS_PER_ROW,
        }
    }
}

impl PixelScale {
    pub const fn new(px_per_col: u16, px_per_row: u16) -> Self {
        Self {
            px_per_col,
            px_per_row,
        }
    }

    /// Window size in pixels for a terminal of `cols` x `rows`.
    pub fn resolution(&self, cols: u16, rows: u16) -> Vec2 {
        Vec2::new(
            cols as f64 * self.px_per_col as f64,
            rows as f64 * self.px_per_row as f64,
        )
    }

    /// Pixel at the centre of a terminal cell.
    pub fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f64 + 0.5) * self.px_per_col as f64,
            (row as f64 + 0.5) * self.px_per_row as f64,
        )
    }

    /// Terminal cell containing pixel `p`, `None` left of or above the window.
    pub fn to_cell(&self, p: Vec2) -> Option<(u16, u16)> {
        let col = (p.x / self.px_per_col as f64).floor();
        let row = (p.y / self.px_per_row as f64).floor();
        if !(0.0..=u16::MAX as f64).contains(&col) || !(0.0..=u16::MAX as f64).contains(&row) {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

/// Discrete input events consumed by the editor in the order they arrived.
///
/// These are produced by the terminal input layer; held-key state travels
/// separately because it is sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Quit signal or escape released
    Quit,
    /// Flip grid-line visibility
    ToggleGrid,
    /// A key producing a printable character went down
    Char(char),
    /// Mouse wheel moved; positive zooms in
    Scroll(f64),
}
