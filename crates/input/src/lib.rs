//! Terminal input module (editor-facing).
//!
//! Maps `crossterm` events into the editor's per-frame [`crate::core::FrameInput`]:
//! discrete events (quit, grid toggle, glyph select, scroll) in arrival order,
//! plus held-key and pointer state sampled once per frame. Works on terminals
//! with and without key-release events.

pub mod keys;
pub mod map;
pub mod mouse;
pub mod state;

pub use ascii_art_core as core;
pub use ascii_art_types as types;

pub use keys::KeyTracker;
pub use map::{is_quit_signal, map_key_event, tracked_key, TrackedKey};
pub use mouse::MouseTracker;
pub use state::InputState;
