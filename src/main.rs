//! Terminal ASCII art painter (default binary).
//!
//! One thread runs the whole program: each frame polls terminal events,
//! updates the editor and renders, in that order. Saving happens inline on the
//! frame the save combination fires.
//!
//! Controls: left drag paints, right drag erases, middle drag (or Space + left)
//! pans, the wheel zooms, printable keys pick the brush, Up/Down cycle it, Tab
//! toggles grid lines, Ctrl+R clears, Ctrl+S saves, Esc or Ctrl+C quits.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, Event};

use ascii_art::core::{Editor, EditorConfig, FrameOutcome};
use ascii_art::export::{save_canvas, ExportError, SaveOutcome};
use ascii_art::input::InputState;
use ascii_art::term::{CanvasView, FrameBuffer, FrameClock, TerminalRenderer, Viewport};
use ascii_art::types::{PixelScale, MAX_FPS, SAVE_DIR, WINDOW_CAPTION};

const LOG_FILE: &str = "ascii-art.log";
const NOTICE_DURATION: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        tracing::error!(error = %err, "terminal setup failed");
        return Err(err.context("failed to set up the terminal"));
    }

    let mut notices = Notices::default();
    let result = run(&mut term, &mut notices);

    // Always try to restore terminal state.
    let _ = term.exit();
    for line in &notices.history {
        println!("{line}");
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting on error");
    }
    result
}

fn run(term: &mut TerminalRenderer, notices: &mut Notices) -> Result<()> {
    let scale = PixelScale::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    let config = EditorConfig::default();
    let mut editor = Editor::new(&config, scale.resolution(w, h));
    let mut input = InputState::new(scale, term.reports_key_release());
    let view = CanvasView::new(scale);
    let mut fb = FrameBuffer::new(w, h);
    let mut clock = FrameClock::new(MAX_FPS);
    let save_dir = PathBuf::from(SAVE_DIR);

    tracing::info!(
        cols = w,
        rows = h,
        canvas_width = config.canvas_width,
        canvas_height = config.canvas_height,
        key_release = term.reports_key_release(),
        "editor started"
    );

    loop {
        let dt = clock.tick();
        let now = Instant::now();
        term.set_title(&notices.title(clock.fps(), now))?;

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(cols, rows) = ev {
                viewport = Viewport::new(cols, rows);
                editor.resize(scale.resolution(cols, rows));
                term.invalidate();
                tracing::debug!(cols, rows, "terminal resized");
            }
            input.handle_event(&ev, now);
        }

        let mut saved = None;
        let outcome = editor.update(&input.frame(dt, now), |canvas| {
            saved = Some(save_canvas(canvas, &save_dir, &Local::now()));
        });
        input.end_frame(now);

        if outcome.quit {
            tracing::info!("quit requested");
            return Ok(());
        }
        for message in frame_notices(&outcome, saved) {
            notices.push(message, now);
        }

        view.render_into(&editor, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

/// Messages for one frame, in the order the editor applied them: clear
/// before save.
fn frame_notices(
    outcome: &FrameOutcome,
    saved: Option<Result<SaveOutcome, ExportError>>,
) -> Vec<String> {
    let mut messages = Vec::new();
    if outcome.cleared {
        messages.push("Cleared the canvas!".to_string());
    }
    match saved {
        Some(Ok(SaveOutcome::Saved(path))) => {
            messages.push(format!("Saved! as {}", path.display()));
        }
        Some(Ok(SaveOutcome::NothingToSave)) => {
            messages.push("Nothing to save :(".to_string());
        }
        Some(Err(err)) => {
            tracing::warn!(error = %err, "save failed");
            messages.push(format!("Save failed: {err}"));
        }
        None => {}
    }
    messages
}

/// User-facing messages: shown in the title for a few seconds and echoed to
/// stdout once the terminal is restored.
#[derive(Debug, Default)]
struct Notices {
    history: Vec<String>,
    current: Option<(String, Instant)>,
}

impl Notices {
    fn push(&mut self, message: String, now: Instant) {
        tracing::info!(%message, "notice");
        self.history.push(message.clone());
        self.current = Some((message, now));
    }

    fn title(&self, fps: f64, now: Instant) -> String {
        let base = format!("{WINDOW_CAPTION} | FPS {}", fps as u32);
        match &self.current {
            Some((message, at)) if now.saturating_duration_since(*at) < NOTICE_DURATION => {
                format!("{base} | {message}")
            }
            _ => base,
        }
    }
}

/// Log to a file in the temp directory; stdout belongs to the terminal UI.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = match File::create(&path).with_context(|| format!("open {}", path.display())) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("logging disabled: {err:#}");
            return;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .try_init();
}
