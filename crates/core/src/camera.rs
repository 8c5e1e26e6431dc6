//! Camera module - pan/zoom mapping between world and screen space
//!
//! ```text
//! screen = (world - position) * zoom + offset
//! world  = (screen - offset) / zoom + position
//! grid   = floor(world / cell_size)
//! ```
//!
//! Painting and rendering both go through [`Camera::world_to_screen`] and
//! [`Camera::screen_to_world`] so the order of floating point operations is
//! identical on both paths.

use std::ops::Range;

use crate::types::{GridPos, Vec2, ZOOM_MAX, ZOOM_MIN, ZOOM_SCROLL_DIVISOR};

/// Rectangle the camera position is clamped into after a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl CameraBounds {
    /// Canvas extent in world units grown by `margin` on every side.
    pub fn around_canvas(width: usize, height: usize, cell_size: Vec2, margin: f64) -> Self {
        Self {
            min: Vec2::new(-margin, -margin),
            max: Vec2::new(
                width as f64 * cell_size.x + margin,
                height as f64 * cell_size.y + margin,
            ),
        }
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Cells intersecting the viewport, already clamped to the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRange {
    pub cols: Range<usize>,
    pub rows: Range<usize>,
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() || self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec2,
    zoom: f64,
    zoom_min: f64,
    zoom_max: f64,
    offset: Vec2,
    cell_size: Vec2,
    bounds: CameraBounds,
}

impl Camera {
    pub fn new(position: Vec2, zoom: f64, cell_size: Vec2, bounds: CameraBounds) -> Self {
        Self {
            position,
            zoom: zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            offset: Vec2::ZERO,
            cell_size,
            bounds,
        }
    }

    /// Set the zoom clamp range. The current zoom is clamped into it.
    pub fn with_zoom_bounds(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self.zoom = self.zoom.clamp(min, max);
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn bounds(&self) -> CameraBounds {
        self.bounds
    }

    /// Fixed screen anchor; the window centre.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Font size in screen pixels for the current zoom.
    pub fn glyph_px(&self) -> f64 {
        self.cell_size.min_component() * self.zoom
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + self.offset
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom + self.position
    }

    pub fn world_to_grid(&self, world: Vec2) -> GridPos {
        let g = world.div_by(self.cell_size);
        GridPos::new(g.x.floor() as i64, g.y.floor() as i64)
    }

    /// World position of a cell's top-left corner.
    pub fn grid_to_world(&self, pos: GridPos) -> Vec2 {
        Vec2::new(pos.x as f64, pos.y as f64).scale(self.cell_size)
    }

    pub fn screen_to_grid(&self, screen: Vec2) -> GridPos {
        self.world_to_grid(self.screen_to_world(screen))
    }

    pub fn grid_to_screen(&self, pos: GridPos) -> Vec2 {
        self.world_to_screen(self.grid_to_world(pos))
    }

    /// Apply a scroll amount: zoom changes by `round(amount / 30, 1)`, then clamps.
    ///
    /// Returns true if the zoom actually changed.
    pub fn apply_scroll(&mut self, amount: f64) -> bool {
        let step = (amount / ZOOM_SCROLL_DIVISOR * 10.0).round() / 10.0;
        let zoom = (self.zoom + step).clamp(self.zoom_min, self.zoom_max);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Pan by the screen-space pointer motion `from -> to`, then clamp.
    pub fn drag(&mut self, from: Vec2, to: Vec2) {
        let delta = (from - to) / self.zoom;
        self.position = self.bounds.clamp(self.position + delta);
    }

    /// Cells visible in a viewport of `resolution` pixels on a `width` x `height` canvas.
    pub fn visible_range(&self, resolution: Vec2, width: usize, height: usize) -> VisibleRange {
        let top_left = self.screen_to_grid(Vec2::ZERO);
        let bottom_right = self.screen_to_grid(resolution);
        VisibleRange {
            cols: clamp_span(top_left.x, bottom_right.x, width),
            rows: clamp_span(top_left.y, bottom_right.y, height),
        }
    }
}

fn clamp_span(first: i64, last: i64, len: usize) -> Range<usize> {
    let start = first.clamp(0, len as i64) as usize;
    let end = last.saturating_add(1).clamp(0, len as i64) as usize;
    start..end.max(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CELL_SIZE;
    use proptest::prelude::*;

    fn camera() -> Camera {
        let bounds = CameraBounds::around_canvas(500, 500, CELL_SIZE, 50.0);
        Camera::new(Vec2::new(500.0, 750.0), 10.0, CELL_SIZE, bounds)
            .with_zoom_bounds(ZOOM_MIN, ZOOM_MAX)
            .with_offset(Vec2::new(320.0, 192.0))
    }

    #[test]
    fn bounds_extend_past_canvas_by_margin() {
        let b = CameraBounds::around_canvas(500, 500, CELL_SIZE, 50.0);
        assert_eq!(b.min, Vec2::new(-50.0, -50.0));
        assert_eq!(b.max, Vec2::new(1050.0, 1550.0));
    }

    #[test]
    fn camera_position_maps_to_offset() {
        let cam = camera();
        assert_eq!(cam.world_to_screen(cam.position()), cam.offset());
        assert_eq!(cam.screen_to_world(cam.offset()), cam.position());
    }

    #[test]
    fn transforms_scale_by_zoom() {
        let cam = camera();
        let s = cam.world_to_screen(Vec2::new(501.0, 752.0));
        assert_eq!(s, Vec2::new(330.0, 212.0));
    }

    #[test]
    fn grid_index_floors_per_axis() {
        let cam = camera();
        assert_eq!(cam.world_to_grid(Vec2::new(3.9, 5.9)), GridPos::new(1, 1));
        assert_eq!(cam.world_to_grid(Vec2::new(-0.5, -0.1)), GridPos::new(-1, -1));
        assert_eq!(cam.grid_to_world(GridPos::new(4, 4)), Vec2::new(8.0, 12.0));
    }

    #[test]
    fn scroll_rounds_to_one_decimal() {
        let mut cam = camera();
        assert!(cam.apply_scroll(30.0));
        assert_eq!(cam.zoom(), 11.0);
        assert!(cam.apply_scroll(-4.0));
        assert!((cam.zoom() - 10.9).abs() < 1e-9);
        // 1/30 rounds to 0.0
        assert!(!cam.apply_scroll(1.0));
    }

    #[test]
    fn scroll_clamps_zoom() {
        let mut cam = camera();
        cam.apply_scroll(1.0e6);
        assert_eq!(cam.zoom(), ZOOM_MAX);
        cam.apply_scroll(-1.0e6);
        assert_eq!(cam.zoom(), ZOOM_MIN);
        assert!(!cam.apply_scroll(-30.0));
    }

    #[test]
    fn glyph_size_follows_zoom() {
        let mut cam = camera();
        assert_eq!(cam.glyph_px(), 20.0);
        cam.apply_scroll(60.0);
        assert_eq!(cam.glyph_px(), 24.0);
    }

    #[test]
    fn drag_moves_opposite_to_pointer_scaled_by_zoom() {
        let mut cam = camera();
        cam.drag(Vec2::new(100.0, 100.0), Vec2::new(80.0, 130.0));
        assert_eq!(cam.position(), Vec2::new(502.0, 747.0));
    }

    #[test]
    fn drag_clamps_into_bounds() {
        let mut cam = camera();
        cam.drag(Vec2::new(0.0, 0.0), Vec2::new(1.0e6, -1.0e6));
        assert_eq!(cam.position(), Vec2::new(-50.0, 1550.0));
    }

    #[test]
    fn visible_range_is_clamped_to_canvas() {
        let bounds = CameraBounds::around_canvas(500, 500, CELL_SIZE, 50.0);
        let cam = Camera::new(Vec2::new(0.0, 0.0), 10.0, CELL_SIZE, bounds)
            .with_zoom_bounds(ZOOM_MIN, ZOOM_MAX)
            .with_offset(Vec2::new(320.0, 192.0));
        let range = cam.visible_range(Vec2::new(640.0, 384.0), 500, 500);
        // 320 px / zoom 10 = 32 world units = 16 columns; 192 / 10 / 3 = 6.4 rows.
        assert_eq!(range.cols, 0..17);
        assert_eq!(range.rows, 0..7);
    }

    #[test]
    fn visible_range_outside_canvas_is_empty() {
        let bounds = CameraBounds::around_canvas(10, 10, CELL_SIZE, 1.0e6);
        let cam = Camera::new(Vec2::new(-5000.0, -5000.0), 10.0, CELL_SIZE, bounds)
            .with_zoom_bounds(ZOOM_MIN, ZOOM_MAX)
            .with_offset(Vec2::new(320.0, 192.0));
        assert!(cam.visible_range(Vec2::new(640.0, 384.0), 10, 10).is_empty());
    }

    proptest! {
        #[test]
        fn grid_screen_grid_round_trip(
            x in 0i64..500,
            y in 0i64..500,
            px in -50.0f64..1050.0,
            py in -50.0f64..1550.0,
            zoom in ZOOM_MIN..=ZOOM_MAX,
            ox in 0.0f64..2000.0,
            oy in 0.0f64..1000.0,
        ) {
            let bounds = CameraBounds::around_canvas(500, 500, CELL_SIZE, 50.0);
            let cam = Camera::new(Vec2::new(px, py), zoom, CELL_SIZE, bounds)
                .with_offset(Vec2::new(ox, oy));
            let pos = GridPos::new(x, y);
            let screen = cam.world_to_screen(cam.grid_to_world(pos) + CELL_SIZE / 2.0);
            prop_assert_eq!(cam.screen_to_grid(screen), pos);

            // Whole pixels still land inside the cell.
            let pixel = Vec2::new(screen.x.round(), screen.y.round());
            prop_assert_eq!(cam.screen_to_grid(pixel), pos);
        }
    }
}
