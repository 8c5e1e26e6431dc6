//! Editor module - the per-frame update of the drawing application
//!
//! [`Editor`] owns every piece of mutable state: canvas, camera, brush, the
//! grid-line toggle and the edge latches for the clear/save combinations. The
//! host samples its input devices once per frame into a [`FrameInput`] and calls
//! [`Editor::update`]; nothing here touches a terminal or the filesystem.
//!
//! Update order within a frame:
//!
//! 1. Discrete events (quit, grid toggle, direct glyph select, zoom)
//! 2. Brush cycling
//! 3. Clear combination
//! 4. Save combination
//! 5. Pointer action: drag, else erase, else paint

use crate::brush::Brush;
use crate::camera::{Camera, CameraBounds};
use crate::canvas::Canvas;
use crate::latch::ComboLatch;
use crate::types::{
    Glyph, InputEvent, Vec2, CAMERA_MARGIN, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE,
    DEFAULT_GLYPH_INDEX, KEY_REPEAT_SECS, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN,
};

/// Tunables for a new [`Editor`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub cell_size: Vec2,
    pub zoom: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub camera_margin: f64,
    pub key_repeat_secs: f64,
    pub glyph_index: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            zoom: ZOOM_DEFAULT,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            camera_margin: CAMERA_MARGIN,
            key_repeat_secs: KEY_REPEAT_SECS,
            glyph_index: DEFAULT_GLYPH_INDEX,
        }
    }
}

impl EditorConfig {
    pub fn with_canvas_size(mut self, width: usize, height: usize) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }
}

/// Keys whose held state matters this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub cycle_up: bool,
    pub cycle_down: bool,
    pub ctrl: bool,
    pub clear: bool,
    pub save: bool,
    /// Turns a left-button hold into a drag
    pub pan: bool,
}

/// Pointer position (screen pixels) and button state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    pub position: Vec2,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

/// Everything the editor needs to know about one frame of input.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub events: &'a [InputEvent],
    pub keys: HeldKeys,
    pub mouse: MouseState,
    /// Seconds since the previous frame
    pub dt: f64,
}

/// What the pointer did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerAction {
    #[default]
    None,
    Drag,
    Erase,
    Paint,
}

/// Result of [`Editor::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    pub quit: bool,
    pub cleared: bool,
    pub saved: bool,
    pub pointer: PointerAction,
}

pub struct Editor {
    canvas: Canvas,
    camera: Camera,
    brush: Brush,
    show_grid: bool,
    clear_latch: ComboLatch,
    save_latch: ComboLatch,
    resolution: Vec2,
    last_mouse: Vec2,
    glyph_px: f64,
}

impl Editor {
    /// Create an editor for a window of `resolution` pixels.
    ///
    /// The camera starts centred on the canvas.
    pub fn new(config: &EditorConfig, resolution: Vec2) -> Self {
        let bounds = CameraBounds::around_canvas(
            config.canvas_width,
            config.canvas_height,
            config.cell_size,
            config.camera_margin,
        );
        let centre = Vec2::new(
            config.canvas_width as f64 / 2.0,
            config.canvas_height as f64 / 2.0,
        )
        .scale(config.cell_size);
        let camera = Camera::new(centre, config.zoom, config.cell_size, bounds)
            .with_zoom_bounds(config.zoom_min, config.zoom_max)
            .with_offset(resolution / 2.0);
        let glyph_px = camera.glyph_px();

        Self {
            canvas: Canvas::new(config.canvas_width, config.canvas_height),
            camera,
            brush: Brush::new(config.glyph_index, config.key_repeat_secs),
            show_grid: true,
            clear_latch: ComboLatch::new(),
            save_latch: ComboLatch::new(),
            resolution,
            last_mouse: Vec2::ZERO,
            glyph_px,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    /// Pointer position recorded at the end of the last update.
    pub fn cursor(&self) -> Vec2 {
        self.last_mouse
    }

    /// Font size in pixels; recomputed whenever zoom changes.
    pub fn glyph_px(&self) -> f64 {
        self.glyph_px
    }

    /// The window changed size; the camera anchor follows its centre.
    pub fn resize(&mut self, resolution: Vec2) {
        self.resolution = resolution;
        self.camera.set_offset(resolution / 2.0);
    }

    /// Run one frame of input handling.
    ///
    /// `on_save` is invoked inline, before the pointer action, on the frame the
    /// save combination fires.
    pub fn update(&mut self, input: &FrameInput<'_>, mut on_save: impl FnMut(&Canvas)) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        for event in input.events {
            match *event {
                InputEvent::Quit => {
                    outcome.quit = true;
                    return outcome;
                }
                InputEvent::ToggleGrid => self.show_grid = !self.show_grid,
                InputEvent::Char(ch) => {
                    if let Some(glyph) = Glyph::from_char(ch) {
                        self.brush.select(glyph);
                    }
                }
                InputEvent::Scroll(amount) => {
                    if self.camera.apply_scroll(amount) {
                        self.glyph_px = self.camera.glyph_px();
                    }
                }
            }
        }

        let keys = input.keys;
        self.brush.update(input.dt, keys.cycle_up, keys.cycle_down);

        if self.clear_latch.update(keys.ctrl, keys.clear) {
            self.canvas.clear();
            outcome.cleared = true;
        }

        if self.save_latch.update(keys.ctrl, keys.save) {
            on_save(&self.canvas);
            outcome.saved = true;
        }

        outcome.pointer = self.apply_pointer(input.mouse, keys.pan);
        self.last_mouse = input.mouse.position;
        outcome
    }

    fn apply_pointer(&mut self, mouse: MouseState, pan_held: bool) -> PointerAction {
        if mouse.middle || (mouse.left && pan_held) {
            self.camera.drag(self.last_mouse, mouse.position);
            PointerAction::Drag
        } else if mouse.right {
            if self.inside_viewport(mouse.position) {
                let target = self.camera.screen_to_grid(mouse.position);
                self.canvas.erase(target);
            }
            PointerAction::Erase
        } else if mouse.left {
            let target = self.camera.screen_to_grid(mouse.position);
            self.canvas.paint(target, self.brush.glyph());
            PointerAction::Paint
        } else {
            PointerAction::None
        }
    }

    fn inside_viewport(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.resolution.x && p.y > 0.0 && p.y < self.resolution.y
    }
}
