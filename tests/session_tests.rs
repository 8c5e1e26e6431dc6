//! Session tests - terminal events flowing through InputState into the Editor

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton,
    MouseEvent, MouseEventKind,
};

use ascii_art::core::{Editor, EditorConfig, FrameOutcome, PointerAction};
use ascii_art::input::InputState;
use ascii_art::types::{Glyph, GridPos, PixelScale};

const FRAME: Duration = Duration::from_millis(16);

struct Session {
    editor: Editor,
    input: InputState,
    now: Instant,
    saves: usize,
}

impl Session {
    fn new(reports_release: bool) -> Self {
        let scale = PixelScale::default();
        Self {
            editor: Editor::new(&EditorConfig::default(), scale.resolution(80, 24)),
            input: InputState::new(scale, reports_release),
            now: Instant::now(),
            saves: 0,
        }
    }

    fn send(&mut self, event: Event) {
        self.input.handle_event(&event, self.now);
    }

    fn frame(&mut self) -> FrameOutcome {
        self.now += FRAME;
        let saves = &mut self.saves;
        let outcome = self
            .editor
            .update(&self.input.frame(FRAME.as_secs_f64(), self.now), |_| *saves += 1);
        self.input.end_frame(self.now);
        outcome
    }

    fn paint_centre(&mut self) {
        let glyph = Glyph::from_char('#').unwrap();
        self.editor.canvas_mut().paint(GridPos::new(250, 250), glyph);
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, modifiers, kind))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_ctrl_r_held_clears_once_with_release_events() {
    let mut s = Session::new(true);
    s.paint_centre();

    s.send(key(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyEventKind::Press));
    let mut clears = 0;
    for _ in 0..30 {
        s.send(key(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyEventKind::Repeat));
        if s.frame().cleared {
            clears += 1;
        }
    }
    assert_eq!(clears, 1);
    assert!(s.editor.canvas().is_blank());

    s.send(key(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyEventKind::Release));
    assert!(!s.frame().cleared);

    s.send(key(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyEventKind::Press));
    assert!(s.frame().cleared);
}

#[test]
fn test_retapping_r_with_ctrl_held_does_not_clear_again() {
    let mut s = Session::new(true);
    let ctrl = KeyCode::Modifier(ModifierKeyCode::LeftControl);
    let r = KeyCode::Char('r');

    s.send(key(ctrl, KeyModifiers::CONTROL, KeyEventKind::Press));
    s.send(key(r, KeyModifiers::CONTROL, KeyEventKind::Press));
    s.paint_centre();
    assert!(s.frame().cleared);

    s.send(key(r, KeyModifiers::CONTROL, KeyEventKind::Release));
    s.paint_centre();
    assert!(!s.frame().cleared);

    s.send(key(r, KeyModifiers::CONTROL, KeyEventKind::Press));
    s.paint_centre();
    assert!(!s.frame().cleared);
    assert!(!s.editor.canvas().is_blank());

    // Both keys up, then the combination again.
    s.send(key(r, KeyModifiers::CONTROL, KeyEventKind::Release));
    s.send(key(ctrl, KeyModifiers::NONE, KeyEventKind::Release));
    assert!(!s.frame().cleared);

    s.send(key(ctrl, KeyModifiers::CONTROL, KeyEventKind::Press));
    s.send(key(r, KeyModifiers::CONTROL, KeyEventKind::Press));
    assert!(s.frame().cleared);
    assert!(s.editor.canvas().is_blank());
}

#[test]
fn test_releasing_ctrl_first_keeps_latch_until_r_is_up() {
    let mut s = Session::new(true);
    let ctrl = KeyCode::Modifier(ModifierKeyCode::RightControl);
    let r = KeyCode::Char('r');

    s.send(key(ctrl, KeyModifiers::CONTROL, KeyEventKind::Press));
    s.send(key(r, KeyModifiers::CONTROL, KeyEventKind::Press));
    assert!(s.frame().cleared);

    s.send(key(ctrl, KeyModifiers::NONE, KeyEventKind::Release));
    assert!(!s.frame().cleared);

    // Ctrl comes back while r never went up: still the same hold.
    s.send(key(ctrl, KeyModifiers::CONTROL, KeyEventKind::Press));
    s.paint_centre();
    assert!(!s.frame().cleared);
}

#[test]
fn test_ctrl_r_held_clears_once_on_legacy_terminal() {
    let mut s = Session::new(false);
    s.paint_centre();

    let mut clears = 0;
    for _ in 0..30 {
        s.send(key(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyEventKind::Press));
        if s.frame().cleared {
            clears += 1;
        }
    }
    assert_eq!(clears, 1);

    // No presses for longer than the release timeout: the combination is released.
    s.now += Duration::from_secs(1);
    assert!(!s.frame().cleared);

    s.send(key(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyEventKind::Press));
    assert!(s.frame().cleared);
}

#[test]
fn test_plain_r_selects_glyph_without_clearing() {
    let mut s = Session::new(true);
    s.paint_centre();

    s.send(key(KeyCode::Char('r'), KeyModifiers::NONE, KeyEventKind::Press));
    let outcome = s.frame();
    assert!(!outcome.cleared);
    assert!(!s.editor.canvas().is_blank());
    assert_eq!(s.editor.brush().glyph().as_char(), 'r');
}

#[test]
fn test_ctrl_s_saves_once_per_press() {
    let mut s = Session::new(true);
    s.paint_centre();

    s.send(key(KeyCode::Char('s'), KeyModifiers::CONTROL, KeyEventKind::Press));
    for _ in 0..10 {
        s.frame();
    }
    assert_eq!(s.saves, 1);

    s.send(key(KeyCode::Char('s'), KeyModifiers::CONTROL, KeyEventKind::Release));
    s.frame();
    s.send(key(KeyCode::Char('s'), KeyModifiers::CONTROL, KeyEventKind::Press));
    s.frame();
    assert_eq!(s.saves, 2);
}

#[test]
fn test_escape_quits_on_release() {
    let mut s = Session::new(true);
    s.send(key(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Press));
    assert!(!s.frame().quit);
    s.send(key(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Release));
    assert!(s.frame().quit);
}

#[test]
fn test_tab_toggles_grid() {
    let mut s = Session::new(false);
    assert!(s.editor.show_grid());
    s.send(key(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Press));
    s.frame();
    assert!(!s.editor.show_grid());
    s.send(key(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Press));
    s.frame();
    assert!(s.editor.show_grid());
}

#[test]
fn test_left_click_at_centre_paints_brush_glyph() {
    let mut s = Session::new(true);
    let brush = s.editor.brush().glyph();

    // Terminal cell (40, 12) is centred on pixel (324, 200): camera cell (250, 250).
    s.send(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
    let outcome = s.frame();
    assert_eq!(outcome.pointer, PointerAction::Paint);
    assert_eq!(s.editor.canvas().get(GridPos::new(250, 250)), Some(Some(brush)));

    s.send(mouse(MouseEventKind::Up(MouseButton::Left), 40, 12));
    s.send(mouse(MouseEventKind::Down(MouseButton::Right), 40, 12));
    assert_eq!(s.frame().pointer, PointerAction::Erase);
    assert!(s.editor.canvas().is_blank());
}

#[test]
fn test_scroll_notch_zooms_by_one() {
    let mut s = Session::new(true);
    let zoom = s.editor.camera().zoom();
    s.send(mouse(MouseEventKind::ScrollUp, 10, 10));
    s.frame();
    assert_eq!(s.editor.camera().zoom(), zoom + 1.0);
    assert_eq!(s.editor.glyph_px(), s.editor.camera().glyph_px());
}

#[test]
fn test_space_and_left_drag_pans_without_painting() {
    let mut s = Session::new(true);
    s.send(mouse(MouseEventKind::Moved, 40, 12));
    s.frame();
    let start = s.editor.camera().position();

    s.send(key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Press));
    s.send(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12));
    assert_eq!(s.frame().pointer, PointerAction::Drag);
    s.send(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 12));
    assert_eq!(s.frame().pointer, PointerAction::Drag);

    // Moving the pointer 80 px left drags the camera 8 world units right.
    assert_eq!(s.editor.camera().position().x, start.x + 8.0);
    assert_eq!(s.editor.camera().position().y, start.y);
    assert!(s.editor.canvas().is_blank());
}
