//! Shared stdin/file reading for the CLI subcommands.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Reads each `files` entry into memory, or a single `<stdin>` buffer if
/// `files` is empty.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<(String, Vec<u8>)>> {
    if files.is_empty() {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading stdin")?;
        return Ok(vec![("<stdin>".to_string(), buf)]);
    }

    files
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Ok((path.display().to_string(), bytes))
        })
        .collect()
}
