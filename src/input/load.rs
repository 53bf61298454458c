use std::path::Path;

use tracing::debug;

use crate::core::{PuzzleError, Result};

/// Reads a whole puzzle input. Any I/O failure is fatal for the run.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| PuzzleError::Io { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded input");
    Ok(text)
}
