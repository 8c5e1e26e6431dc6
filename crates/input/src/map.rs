//! Key mapping from terminal events to editor input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::types::{Glyph, InputEvent};

/// Keys whose held state is sampled every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedKey {
    CycleUp,
    CycleDown,
    /// `r`, clears the canvas together with Ctrl
    Clear,
    /// `s`, saves together with Ctrl
    Save,
    /// Space, turns a left-button hold into a drag
    Pan,
    /// Either Ctrl key; only reported by terminals that send modifier key events
    Ctrl,
}

/// Map a key code to the tracked key it drives, if any.
pub fn tracked_key(code: KeyCode) -> Option<TrackedKey> {
    match code {
        KeyCode::Up => Some(TrackedKey::CycleUp),
        KeyCode::Down => Some(TrackedKey::CycleDown),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TrackedKey::Clear),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(TrackedKey::Save),
        KeyCode::Char(' ') => Some(TrackedKey::Pan),
        KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
            Some(TrackedKey::Ctrl)
        }
        _ => None,
    }
}

/// Ctrl+C: raw mode delivers the interrupt as an ordinary key press.
pub fn is_quit_signal(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Map a key event to a discrete editor event.
///
/// Escape and Tab act on key-up. `key_up` is the event kind treated as key-up:
/// `Release` when the terminal reports releases, otherwise `Press`.
pub fn map_key_event(key: KeyEvent, key_up: KeyEventKind) -> Option<InputEvent> {
    if is_quit_signal(key) {
        return Some(InputEvent::Quit);
    }

    if key.kind == key_up {
        match key.code {
            KeyCode::Esc => return Some(InputEvent::Quit),
            KeyCode::Tab => return Some(InputEvent::ToggleGrid),
            _ => {}
        }
    }

    if key.kind != KeyEventKind::Press
        || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) if Glyph::from_char(ch).is_some() => Some(InputEvent::Char(ch)),
        _ => None,
    }
}
