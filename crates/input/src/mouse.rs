//! Pointer tracking from terminal mouse reports.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::core::MouseState;
use crate::types::{InputEvent, PixelScale, SCROLL_UNITS_PER_NOTCH};

/// Latest pointer cell and button state, converted to screen pixels on demand.
#[derive(Debug, Clone)]
pub struct MouseTracker {
    scale: PixelScale,
    column: u16,
    row: u16,
    left: bool,
    middle: bool,
    right: bool,
}

impl MouseTracker {
    pub fn new(scale: PixelScale) -> Self {
        Self {
            scale,
            column: 0,
            row: 0,
            left: false,
            middle: false,
            right: false,
        }
    }

    /// Update from a mouse report. Wheel motion comes back as a scroll event.
    pub fn handle(&mut self, ev: &MouseEvent) -> Option<InputEvent> {
        self.column = ev.column;
        self.row = ev.row;
        match ev.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                self.set_button(button, true);
                None
            }
            MouseEventKind::Up(button) => {
                self.set_button(button, false);
                None
            }
            MouseEventKind::ScrollUp => Some(InputEvent::Scroll(SCROLL_UNITS_PER_NOTCH)),
            MouseEventKind::ScrollDown => Some(InputEvent::Scroll(-SCROLL_UNITS_PER_NOTCH)),
            MouseEventKind::Moved | MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => None,
        }
    }

    fn set_button(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.left = down,
            MouseButton::Middle => self.middle = down,
            MouseButton::Right => self.right = down,
        }
    }

    pub fn state(&self) -> MouseState {
        MouseState {
            position: self.scale.cell_center(self.column, self.row),
            left: self.left,
            middle: self.middle,
            right: self.right,
        }
    }

    /// Forget pressed buttons, e.g. after focus loss swallowed the release.
    pub fn release_all(&mut self) {
        self.left = false;
        self.middle = false;
        self.right = false;
    }
}
