//! Export module - writes the painted region of a canvas to a text file
//!
//! The file is named after the local time the save was triggered
//! (`YYYY-MM-DD_HH-MM-SS.txt`) and holds one line per row of the canvas
//! bounding box. No header, no metadata.
//!
//! Saving is a single blocking write on the caller's thread. A missing or
//! read-only save directory is reported as [`ExportError`]; the caller decides
//! how to surface it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use ascii_art_core::Canvas;

pub use ascii_art_core as core;

/// Timestamp format used for file names. Second precision, no path separators.
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a save attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    NothingToSave,
}

/// File name for a save triggered at `when`.
pub fn file_name<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}.txt", when.format(FILE_STAMP_FORMAT))
}

/// Write the painted region of `canvas` into `dir`.
///
/// A blank canvas writes nothing and returns [`SaveOutcome::NothingToSave`].
pub fn save_canvas<Tz: TimeZone>(
    canvas: &Canvas,
    dir: &Path,
    when: &DateTime<Tz>,
) -> Result<SaveOutcome, ExportError>
where
    Tz::Offset: std::fmt::Display,
{
    let Some(text) = canvas.export_text() else {
        tracing::info!("nothing to save");
        return Ok(SaveOutcome::NothingToSave);
    };

    let path = dir.join(file_name(when));
    fs::write(&path, text.as_bytes()).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = text.len(), "saved canvas");
    Ok(SaveOutcome::Saved(path))
}
