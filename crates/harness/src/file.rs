//! Whole-file input for harnesses driven by a file path.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Reads the whole file at `path` into a buffer of exactly its size.
///
/// The file is opened before anything is allocated, so an unreadable path
/// fails without touching the heap for the input.
///
/// # Example
///
/// ```
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("input.json");
/// std::fs::write(&path, b"[1]").unwrap();
/// assert_eq!(harness::load_input(&path).unwrap(), b"[1]");
/// ```
pub fn load_input(path: &Path) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let size = file
        .seek(SeekFrom::End(0))
        .with_context(|| format!("failed to size {}", path.display()))?;
    file.rewind()
        .with_context(|| format!("failed to rewind {}", path.display()))?;

    let size = usize::try_from(size).context("input does not fit in memory")?;
    let mut buf = Vec::with_capacity(size);
    file.read_to_end(&mut buf)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), size, read = buf.len(), "input loaded");
    Ok(buf)
}
