//! Whole-file reads and in-place overwrites.
//!
//! Each call opens, uses and drops one handle. Overwrites truncate the target
//! and write directly into it: there is no temporary file and no backup, so a
//! failure mid-write leaves a partially written target.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{PathContext, RepairResult};
use crate::text::{decode_lenient, decode_strict, DecodedText};

fn read_bytes(path: &Path) -> RepairResult<Vec<u8>> {
    let mut file = File::open(path).at_path(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content).at_path(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}

/// Read a file, dropping undecodable bytes.
pub fn read_lenient(path: &Path) -> RepairResult<DecodedText> {
    let decoded = decode_lenient(&read_bytes(path)?);
    if !decoded.is_lossless() {
        warn!(
            path = %path.display(),
            dropped = decoded.dropped_bytes,
            "dropped undecodable bytes"
        );
    }
    Ok(decoded)
}

/// Read a file that must be valid UTF-8.
pub fn read_strict(path: &Path) -> RepairResult<String> {
    decode_strict(read_bytes(path)?, path)
}

/// Replace the content of `path` with `parts`, written in order.
///
/// Returns the number of bytes written.
pub fn overwrite(path: &Path, parts: &[&str]) -> RepairResult<usize> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .at_path(path)?;

    let mut written = 0;
    for part in parts {
        file.write_all(part.as_bytes()).at_path(path)?;
        written += part.len();
    }
    file.flush().at_path(path)?;

    debug!(path = %path.display(), bytes = written, "overwrote file");
    Ok(written)
}
