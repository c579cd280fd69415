//! Loading IR payloads from files and streams.
//!
//! These helpers add I/O and context on top of [`wire::decode_with`], which
//! stays pure.

use crate::project::Project;
use crate::wire::{self, DecoderConfig};
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load a [`Project`] from the IR file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the payload fails to
/// decode; the error names the path.
pub fn from_path(path: impl AsRef<Path>, config: &DecoderConfig) -> Result<Project> {
    let path_ref = path.as_ref();
    let data = fs::read(path_ref).with_context(|| format!("failed to read {}", path_ref.display()))?;
    debug!(path = %path_ref.display(), bytes = data.len(), "read IR payload");
    wire::decode_with(&data, config)
        .with_context(|| format!("failed to decode {}", path_ref.display()))
}

/// Load a [`Project`] from any reader, such as standard input.
///
/// # Errors
///
/// Returns an error if reading fails or the payload fails to decode.
pub fn from_reader(mut reader: impl Read, config: &DecoderConfig) -> Result<Project> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .context("failed to read IR payload")?;
    debug!(bytes = data.len(), "read IR payload from stream");
    wire::decode_with(&data, config).context("failed to decode IR payload")
}
