//! Canvas module - the fixed-size character grid being drawn on
//!
//! Cells are stored in a flat row-major `Vec` (y * width + x). The canvas is
//! never resized after creation; paint and erase silently ignore targets that
//! fall outside `[0,width) x [0,height)`.

use crate::types::{cell_char, Cell, Glyph, GridPos};

/// Inclusive rectangle of cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CellRect {
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
}

/// The drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a canvas filled with EMPTY cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: GridPos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y as usize) * self.width + (pos.x as usize))
    }

    /// Whether `pos` addresses a cell of this canvas.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u64) < self.width as u64 && (pos.y as u64) < self.height as u64
    }

    /// Get cell at `pos`, `None` if out of bounds.
    pub fn get(&self, pos: GridPos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Get cell by unsigned index, for callers iterating known-valid ranges.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    /// Set cell at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: GridPos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn paint(&mut self, pos: GridPos, glyph: Glyph) -> bool {
        self.set(pos, Some(glyph))
    }

    pub fn erase(&mut self, pos: GridPos) -> bool {
        self.set(pos, None)
    }

    /// Reset every cell to EMPTY.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// One row of cells. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Smallest rectangle covering every painted cell, `None` for a blank canvas.
    pub fn bounding_box(&self) -> Option<CellRect> {
        let mut rect: Option<CellRect> = None;
        for y in 0..self.height {
            let row = self.row(y);
            let Some(first) = row.iter().position(Option::is_some) else {
                continue;
            };
            let last = row.iter().rposition(Option::is_some).unwrap_or(first);
            rect = Some(match rect {
                None => CellRect {
                    left: first,
                    top: y,
                    right: last,
                    bottom: y,
                },
                Some(r) => CellRect {
                    left: r.left.min(first),
                    top: r.top,
                    right: r.right.max(last),
                    bottom: y,
                },
            });
        }
        rect
    }

    /// Text of the painted region: one line per row of the bounding box,
    /// EMPTY cells as spaces, each line newline-terminated.
    ///
    /// Returns `None` when nothing is painted.
    pub fn export_text(&self) -> Option<String> {
        let rect = self.bounding_box()?;
        let mut out = String::with_capacity((rect.width() + 1) * rect.height());
        for y in rect.top..=rect.bottom {
            let row = self.row(y);
            out.extend(row[rect.left..=rect.right].iter().map(|&c| cell_char(c)));
            out.push('\n');
        }
        Some(out)
    }
}
