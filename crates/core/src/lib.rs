//! Core editor logic module - pure, deterministic, and testable
//!
//! This module contains the drawing state and its per-frame update. It has
//! **no dependencies** on terminals, clocks, or the filesystem, making it:
//!
//! - **Deterministic**: the same [`FrameInput`] sequence yields the same canvas
//! - **Testable**: held keys and pointer state are plain values
//! - **Portable**: any host that can sample keys and a pointer can drive it
//!
//! # Module Structure
//!
//! - [`canvas`]: fixed-size character grid, bounding box and export text
//! - [`camera`]: world/screen/grid transforms, zoom and drag clamping, culling
//! - [`brush`]: selected glyph with throttled cycling
//! - [`latch`]: edge-triggered modifier+key combinations
//! - [`editor`]: the state struct owned by the main loop
//!
//! # Example
//!
//! ```
//! use ascii_art_core::{Editor, EditorConfig, FrameInput, HeldKeys, MouseState};
//! use ascii_art_types::{GridPos, Vec2};
//!
//! let resolution = Vec2::new(640.0, 384.0);
//! let mut editor = Editor::new(&EditorConfig::default(), resolution);
//!
//! // Left click in the middle of the window paints the centre cell.
//! let input = FrameInput {
//!     events: &[],
//!     keys: HeldKeys::default(),
//!     mouse: MouseState { position: resolution / 2.0, left: true, ..MouseState::default() },
//!     dt: 0.016,
//! };
//! editor.update(&input, |_| {});
//!
//! let painted = editor.canvas().get(GridPos::new(250, 250)).flatten();
//! assert_eq!(painted.map(|g| g.as_char()), Some('#'));
//! ```

pub mod brush;
pub mod camera;
pub mod canvas;
pub mod editor;
pub mod latch;

pub use ascii_art_types as types;

// Re-export commonly used types for convenience
pub use brush::Brush;
pub use camera::{Camera, CameraBounds, VisibleRange};
pub use canvas::{Canvas, CellRect};
pub use editor::{
    Editor, EditorConfig, FrameInput, FrameOutcome, HeldKeys, MouseState, PointerAction,
};
pub use latch::{ComboLatch, LatchState};
