use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{RangeConfig, DEFAULT_RANGE_END, DEFAULT_RANGE_START};
use crate::error::{RepairError, RepairResult};
use crate::storage;
use crate::text::split_lines;

/// Zero-based line range, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> RepairResult<Self> {
        if start > end {
            return Err(RepairError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Bounds limited to `total` lines, the way a slice of a shorter list behaves.
    pub fn clamp(&self, total: usize) -> (usize, usize) {
        (self.start.min(total), self.end.min(total))
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_RANGE_START,
            end: DEFAULT_RANGE_END,
        }
    }
}

impl TryFrom<RangeConfig> for LineRange {
    type Error = RepairError;

    fn try_from(config: RangeConfig) -> RepairResult<Self> {
        Self::new(config.start, config.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveReport {
    pub target: PathBuf,
    pub range: LineRange,
    pub original_lines: usize,
    pub new_lines: usize,
    pub removed_lines: usize,
    pub dropped_bytes: usize,
    pub bytes_written: usize,
}

/// Lines before `range` followed by lines after it. The excised lines are not inspected.
pub fn excise<'a>(lines: &[&'a str], range: LineRange) -> Vec<&'a str> {
    let (start, end) = range.clamp(lines.len());
    lines[..start].iter().chain(&lines[end..]).copied().collect()
}

/// Remove `range` from `target` in place.
///
/// Offsets are absolute, so running this twice removes two different blocks.
pub fn remove_line_range(target: &Path, range: LineRange) -> RepairResult<RemoveReport> {
    let decoded = storage::read_lenient(target)?;
    let lines = split_lines(&decoded.text);
    let original_lines = lines.len();

    if range.end() > original_lines {
        warn!(
            path = %target.display(),
            lines = original_lines,
            start = range.start(),
            end = range.end(),
            "range extends past end of file"
        );
    }

    let kept = excise(&lines, range);
    let bytes_written = storage::overwrite(target, &kept)?;

    let report = RemoveReport {
        target: target.to_path_buf(),
        range,
        original_lines,
        new_lines: kept.len(),
        removed_lines: original_lines - kept.len(),
        dropped_bytes: decoded.dropped_bytes,
        bytes_written,
    };

    info!(
        path = %target.display(),
        original = report.original_lines,
        new = report.new_lines,
        "removed line range"
    );
    Ok(report)
}
