//! CanvasView: maps the editor state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Only the cells inside the camera's visible range are visited, so the cost
//! of a frame depends on the viewport, not on the canvas size.

use crate::core::{Camera, Editor, VisibleRange};
use crate::fb::{Cell, CellStyle, FrameBuffer, LineDir, Rgb};
use crate::types::{GridPos, PixelScale, Vec2};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colours used by [`CanvasView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    pub ghost: Rgb,
    pub marker: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            grid: Rgb::new(150, 150, 150),
            text: Rgb::new(255, 0, 255),
            ghost: Rgb::new(65, 55, 65),
            marker: Rgb::new(255, 255, 255),
        }
    }
}

const ANCHOR_MARKER: char = '+';
const CURSOR_MARKER: char = '•';

/// Renders the visible part of the canvas, grid lines and the cursor overlays.
#[derive(Debug, Clone, Default)]
pub struct CanvasView {
    scale: PixelScale,
    palette: Palette,
}

impl CanvasView {
    pub fn new(scale: PixelScale) -> Self {
        Self {
            scale,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn scale(&self) -> PixelScale {
        self.scale
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, editor: &Editor, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let bg = CellStyle::fg(self.palette.marker, self.palette.background);
        fb.clear(Cell::blank(bg));

        let camera = editor.camera();
        let canvas = editor.canvas();
        let resolution = self.scale.resolution(viewport.width, viewport.height);
        let visible = camera.visible_range(resolution, canvas.width(), canvas.height());

        if editor.show_grid() && !visible.is_empty() {
            self.draw_grid(fb, camera, &visible, resolution, canvas.width(), canvas.height());
        }

        let text = CellStyle::fg(self.palette.text, self.palette.background);
        let glyph_half = editor.glyph_px() / 2.0;
        for y in visible.rows.clone() {
            for x in visible.cols.clone() {
                let Some(glyph) = canvas.cell(x, y) else {
                    continue;
                };
                let origin = camera.grid_to_screen(GridPos::new(x as i64, y as i64));
                let anchor = origin + Vec2::new(glyph_half, glyph_half);
                if let Some((col, row)) = self.scale.to_cell(anchor) {
                    fb.put_char(col, row, glyph.as_char(), text);
                }
            }
        }

        let marker = CellStyle::fg(self.palette.marker, self.palette.background);
        if let Some((col, row)) = self.scale.to_cell(camera.offset()) {
            fb.put_char(col, row, ANCHOR_MARKER, marker);
        }

        if let Some((col, row)) = self.scale.to_cell(editor.cursor()) {
            let ghost = CellStyle::fg(self.palette.ghost, self.palette.background).bold();
            fb.put_char(col.saturating_add(1), row, editor.brush().glyph().as_char(), ghost);
            fb.put_char(col, row, CURSOR_MARKER, marker);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, editor: &Editor, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(editor, viewport, &mut fb);
        fb
    }

    /// One line per visible row and column boundary, clipped to both the
    /// viewport and the canvas edges.
    fn draw_grid(
        &self,
        fb: &mut FrameBuffer,
        camera: &Camera,
        visible: &VisibleRange,
        resolution: Vec2,
        width: usize,
        height: usize,
    ) {
        let style = CellStyle::fg(self.palette.grid, self.palette.background);
        let origin = camera.world_to_screen(Vec2::ZERO);
        let far = camera.grid_to_screen(GridPos::new(width as i64, height as i64));
        let (px_col, px_row) = (self.scale.px_per_col as f64, self.scale.px_per_row as f64);

        let cols = span_cells(origin.x.max(0.0), far.x.min(resolution.x), px_col, fb.width());
        let rows = span_cells(origin.y.max(0.0), far.y.min(resolution.y), px_row, fb.height());

        for y in visible.rows.start..=visible.rows.end {
            let sy = camera.grid_to_screen(GridPos::new(0, y as i64)).y;
            let Some(row) = pixel_to_cell(sy, px_row, fb.height()) else {
                continue;
            };
            for col in cols.clone() {
                fb.put_line(col, row, LineDir::Horizontal, style);
            }
        }

        for x in visible.cols.start..=visible.cols.end {
            let sx = camera.grid_to_screen(GridPos::new(x as i64, 0)).x;
            let Some(col) = pixel_to_cell(sx, px_col, fb.width()) else {
                continue;
            };
            for row in rows.clone() {
                fb.put_line(col, row, LineDir::Vertical, style);
            }
        }
    }
}

/// Terminal cells covered by the pixel span `[from, to)`.
fn span_cells(from: f64, to: f64, px: f64, limit: u16) -> std::ops::Range<u16> {
    if to <= from {
        return 0..0;
    }
    let start = (from / px).floor().clamp(0.0, limit as f64) as u16;
    let end = (to / px).ceil().clamp(0.0, limit as f64) as u16;
    start..end
}

fn pixel_to_cell(p: f64, px: f64, limit: u16) -> Option<u16> {
    let cell = (p / px).floor();
    if cell < 0.0 || cell >= limit as f64 {
        return None;
    }
    Some(cell as u16)
}
