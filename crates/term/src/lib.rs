//! Terminal rendering module.
//!
//! A small immediate-mode rendering layer: the editor state is drawn into a
//! framebuffer of styled cells which is then diffed and flushed to the
//! terminal. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer and styles
//! - [`canvas_view`]: editor state to framebuffer, with visible-range culling
//! - [`renderer`]: terminal session, diff encoding, title
//! - [`clock`]: frame pacing and frame-rate measurement

pub mod canvas_view;
pub mod clock;
pub mod fb;
pub mod renderer;

pub use ascii_art_core as core;
pub use ascii_art_types as types;

pub use canvas_view::{CanvasView, Palette, Viewport};
pub use clock::FrameClock;
pub use fb::{Cell, CellStyle, FrameBuffer, LineDir, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
