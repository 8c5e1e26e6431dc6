//! Per-frame input sampling.

use std::time::Instant;

use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{FrameInput, HeldKeys, MouseState};
use crate::keys::KeyTracker;
use crate::map::{map_key_event, tracked_key};
use crate::mouse::MouseTracker;
use crate::types::{InputEvent, PixelScale};

/// Collects terminal events between frames and produces the editor's
/// [`FrameInput`].
#[derive(Debug, Clone)]
pub struct InputState {
    keys: KeyTracker,
    mouse: MouseTracker,
    events: Vec<InputEvent>,
}

impl InputState {
    /// `reports_release` is whether the terminal delivers key release events.
    pub fn new(scale: PixelScale, reports_release: bool) -> Self {
        Self::with_keys(KeyTracker::new(reports_release), scale)
    }

    pub fn with_keys(keys: KeyTracker, scale: PixelScale) -> Self {
        Self {
            keys,
            mouse: MouseTracker::new(scale),
            events: Vec::with_capacity(32),
        }
    }

    /// Feed one terminal event received at `now`.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        let mapped = match event {
            Event::Key(key) => self.handle_key(*key, now),
            Event::Mouse(ev) => self.mouse.handle(ev),
            Event::FocusLost => {
                self.keys.reset();
                self.mouse.release_all();
                None
            }
            _ => None,
        };
        if let Some(ev) = mapped {
            self.events.push(ev);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<InputEvent> {
        if let Some(tracked) = tracked_key(key.code) {
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    self.keys.press(tracked, ctrl, now);
                }
                KeyEventKind::Release => self.keys.release(tracked),
            }
        }

        let key_up = if self.keys.reports_release() {
            KeyEventKind::Release
        } else {
            KeyEventKind::Press
        };
        map_key_event(key, key_up)
    }

    pub fn held(&self, now: Instant) -> HeldKeys {
        self.keys.snapshot(now)
    }

    pub fn mouse(&self) -> MouseState {
        self.mouse.state()
    }

    /// Snapshot for this frame. Call [`InputState::end_frame`] once the editor
    /// has consumed it.
    pub fn frame(&self, dt: f64, now: Instant) -> FrameInput<'_> {
        FrameInput {
            events: &self.events,
            keys: self.held(now),
            mouse: self.mouse(),
            dt,
        }
    }

    pub fn end_frame(&mut self, now: Instant) {
        self.events.clear();
        self.keys.end_frame(now);
    }
}
