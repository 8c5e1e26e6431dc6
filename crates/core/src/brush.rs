//! Brush selection with throttled cycling.

use crate::types::Glyph;

/// The glyph painted by the left mouse button.
///
/// Cycling is throttled by a countdown timer decremented by frame time, so
/// holding a cycle key steps at most once per `repeat_interval` seconds no
/// matter how fast frames or platform key repeats arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    index: usize,
    repeat_interval: f64,
    repeat_timer: f64,
}

impl Brush {
    pub fn new(index: usize, repeat_interval: f64) -> Self {
        Self {
            index: index % Glyph::COUNT,
            repeat_interval,
            repeat_timer: 0.0,
        }
    }

    pub fn glyph(&self) -> Glyph {
        Glyph::from_index(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn repeat_timer(&self) -> f64 {
        self.repeat_timer
    }

    /// Jump straight to `glyph`, keeping the cycle index in sync.
    pub fn select(&mut self, glyph: Glyph) {
        self.index = glyph.index();
    }

    pub fn step_up(&mut self) {
        self.index = (self.index + 1) % Glyph::COUNT;
    }

    pub fn step_down(&mut self) {
        self.index = (self.index + Glyph::COUNT - 1) % Glyph::COUNT;
    }

    /// Advance the repeat timer by `dt` seconds and apply at most one step.
    ///
    /// Returns true if the brush changed.
    pub fn update(&mut self, dt: f64, up_held: bool, down_held: bool) -> bool {
        self.repeat_timer = (self.repeat_timer - dt).max(0.0);
        let mut changed = false;
        if up_held && self.repeat_timer <= 0.0 {
            self.step_up();
            self.repeat_timer = self.repeat_interval;
            changed = true;
        }
        if down_held && self.repeat_timer <= 0.0 {
            self.step_down();
            self.repeat_timer = self.repeat_interval;
            changed = true;
        }
        changed
    }
}
