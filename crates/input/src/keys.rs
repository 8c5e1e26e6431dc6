//! Held-key tracking for terminals with and without key-release events.
//!
//! Terminals speaking the keyboard enhancement protocol report press, repeat
//! and release, so a key is held exactly between press and release. Legacy
//! terminals only report presses (plus auto-repeat presses), so a key counts as
//! held until `release_timeout` passes without another press. The brush cycle
//! keys are the exception: on legacy terminals they are held only for the frame
//! their press arrived, so a single tap steps the brush once.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::core::HeldKeys;
use crate::map::TrackedKey;

// Long enough to bridge the usual 500ms gap before terminal auto-repeat starts.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 550;

#[derive(Debug, Clone, Copy)]
struct Held {
    key: TrackedKey,
    ctrl: bool,
    last_seen: Instant,
}

#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: ArrayVec<Held, 8>,
    reports_release: bool,
    release_timeout: Duration,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: ArrayVec::new(),
            reports_release,
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Record a press or auto-repeat of `key`. `ctrl` is whether Ctrl was down.
    pub fn press(&mut self, key: TrackedKey, ctrl: bool, now: Instant) {
        if let Some(h) = self.held.iter_mut().find(|h| h.key == key) {
            h.ctrl = ctrl;
            h.last_seen = now;
            return;
        }
        let _ = self.held.try_push(Held {
            key,
            ctrl,
            last_seen: now,
        });
    }

    pub fn release(&mut self, key: TrackedKey) {
        self.held.retain(|h| h.key != key);
        if key == TrackedKey::Ctrl {
            for h in &mut self.held {
                h.ctrl = false;
            }
        }
    }

    fn live(&self, h: &Held, now: Instant) -> bool {
        self.reports_release || now.saturating_duration_since(h.last_seen) <= self.release_timeout
    }

    pub fn is_held(&self, key: TrackedKey, now: Instant) -> bool {
        self.held.iter().any(|h| h.key == key && self.live(h, now))
    }

    /// Ctrl is held while a Ctrl key is down. Terminals that never report
    /// modifier keys only show it as a flag, so it is also held while any
    /// held key was reported with it.
    pub fn ctrl_held(&self, now: Instant) -> bool {
        self.held
            .iter()
            .any(|h| (h.key == TrackedKey::Ctrl || h.ctrl) && self.live(h, now))
    }

    pub fn snapshot(&self, now: Instant) -> HeldKeys {
        HeldKeys {
            cycle_up: self.is_held(TrackedKey::CycleUp, now),
            cycle_down: self.is_held(TrackedKey::CycleDown, now),
            ctrl: self.ctrl_held(now),
            clear: self.is_held(TrackedKey::Clear, now),
            save: self.is_held(TrackedKey::Save, now),
            pan: self.is_held(TrackedKey::Pan, now),
        }
    }

    /// Drop expired and single-frame keys once the frame has consumed them.
    pub fn end_frame(&mut self, now: Instant) {
        if self.reports_release {
            return;
        }
        let timeout = self.release_timeout;
        self.held.retain(|h| {
            !matches!(h.key, TrackedKey::CycleUp | TrackedKey::CycleDown)
                && now.saturating_duration_since(h.last_seen) <= timeout
        });
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}
