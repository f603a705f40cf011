// File-level helpers for delta creation/application.
//
// Provides `create_file()` and `apply_file()` convenience functions. The
// format is not streamable (the size record leads and the checksum record
// trails), so inputs are read fully into memory.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::error::DeltaError;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `create_file()`.
#[derive(Debug, Clone)]
pub struct CreateStats {
    /// Source file size in bytes.
    pub source_size: u64,
    /// Target file size in bytes.
    pub target_size: u64,
    /// Delta output size in bytes.
    pub delta_size: u64,
}

/// Statistics returned by `apply_file()`.
#[derive(Debug, Clone)]
pub struct ApplyStats {
    /// Source file size in bytes.
    pub source_size: u64,
    /// Delta file size in bytes.
    pub delta_size: u64,
    /// Reconstructed output size in bytes.
    pub output_size: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file-level operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// I/O error (file open, read, write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Delta parse/apply error.
    #[error("delta error: {0}")]
    Delta(#[from] DeltaError),
}

// ---------------------------------------------------------------------------
// create_file
// ---------------------------------------------------------------------------

/// Create a delta between `source_path` and `target_path`, writing it to
/// `delta_path`.
pub fn create_file(
    source_path: &Path,
    target_path: &Path,
    delta_path: &Path,
) -> Result<CreateStats, IoError> {
    let source = fs::read(source_path)?;
    let target = fs::read(target_path)?;
    let delta = crate::create(&source, &target);
    fs::write(delta_path, &delta)?;
    Ok(CreateStats {
        source_size: source.len() as u64,
        target_size: target.len() as u64,
        delta_size: delta.len() as u64,
    })
}

// ---------------------------------------------------------------------------
// apply_file
// ---------------------------------------------------------------------------

/// Apply the delta at `delta_path` to `source_path`, writing the
/// reconstructed target to `output_path`.
pub fn apply_file(
    source_path: &Path,
    delta_path: &Path,
    output_path: &Path,
    verify_checksum: bool,
) -> Result<ApplyStats, IoError> {
    let source = fs::read(source_path)?;
    let delta = fs::read(delta_path)?;
    let output = crate::apply(&source, &delta, verify_checksum)?;
    fs::write(output_path, &output)?;
    Ok(ApplyStats {
        source_size: source.len() as u64,
        delta_size: delta.len() as u64,
        output_size: output.len() as u64,
    })
}

// ---------------------------------------------------------------------------
// output_size_file
// ---------------------------------------------------------------------------

/// Predicted output length of the delta at `delta_path`.
///
/// Only the leading size record is parsed; the file is still read whole
/// since the record has no fixed length.
pub fn output_size_file(delta_path: &Path) -> Result<u64, IoError> {
    let delta = fs::read(delta_path)?;
    Ok(crate::output_size(&delta)? as u64)
}
