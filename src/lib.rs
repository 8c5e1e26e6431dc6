//! ASCII art painter (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks share a single import path.

pub use ascii_art_core as core;
pub use ascii_art_export as export;
pub use ascii_art_input as input;
pub use ascii_art_term as term;
pub use ascii_art_types as types;
