use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use super::markers::{MarkerHit, MarkerSet};
use crate::error::RepairResult;
use crate::storage;
use crate::text::{byte_offset_of_line, split_lines, DecodedText};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TruncateOutcome {
    /// `line` is one-based
    MarkerFound { line: usize, marker: String },
    MarkerNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncateReport {
    pub target: PathBuf,
    pub outcome: TruncateOutcome,
    pub total_lines: usize,
    pub retained_lines: usize,
    pub discarded_lines: usize,
    pub dropped_bytes: usize,
    pub bytes_written: usize,
}

/// A scanned target and the point at which it will be cut.
///
/// Scanning and writing are separate steps so a caller can report where
/// corruption begins before the replacement is read.
#[derive(Debug, Clone)]
pub struct TruncatePlan {
    target: PathBuf,
    decoded: DecodedText,
    total_lines: usize,
    hit: Option<MarkerHit>,
    cut_offset: usize,
}

impl TruncatePlan {
    pub fn scan(target: &Path, markers: &MarkerSet) -> RepairResult<Self> {
        let decoded = storage::read_lenient(target)?;
        Ok(Self::from_decoded(target, decoded, markers))
    }

    pub fn from_decoded(target: &Path, decoded: DecodedText, markers: &MarkerSet) -> Self {
        let (total_lines, hit, cut_offset) = {
            let lines = split_lines(&decoded.text);
            let hit = markers.first_hit(&lines);
            let cut_offset = match &hit {
                Some(hit) => byte_offset_of_line(&lines, hit.index),
                None => decoded.text.len(),
            };
            (lines.len(), hit, cut_offset)
        };

        match &hit {
            Some(hit) => info!(
                path = %target.display(),
                line = hit.line_number(),
                marker = %hit.marker,
                "found corruption marker"
            ),
            None => info!(path = %target.display(), lines = total_lines, "no corruption marker"),
        }

        Self {
            target: target.to_path_buf(),
            decoded,
            total_lines,
            hit,
            cut_offset,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn outcome(&self) -> TruncateOutcome {
        match &self.hit {
            Some(hit) => TruncateOutcome::MarkerFound {
                line: hit.line_number(),
                marker: hit.marker.clone(),
            },
            None => TruncateOutcome::MarkerNotFound,
        }
    }

    /// Every line before the cut, byte for byte.
    pub fn retained(&self) -> &str {
        &self.decoded.text[..self.cut_offset]
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn retained_lines(&self) -> usize {
        self.hit.as_ref().map_or(self.total_lines, |hit| hit.index)
    }

    pub fn discarded_lines(&self) -> usize {
        self.total_lines - self.retained_lines()
    }

    pub fn dropped_bytes(&self) -> usize {
        self.decoded.dropped_bytes
    }

    /// The new target content: retained prefix, separator, replacement.
    pub fn render(&self, separator: &str, replacement: &str) -> String {
        [self.retained(), separator, replacement].concat()
    }

    /// Read `replacement` and overwrite the target with the rendered content.
    ///
    /// The replacement is read in full before the target is opened, so a
    /// missing or undecodable replacement leaves the target untouched.
    pub fn apply(&self, replacement: &Path, separator: &str) -> RepairResult<TruncateReport> {
        let block = storage::read_strict(replacement)?;
        let content = self.render(separator, &block);
        let bytes_written = storage::overwrite(&self.target, &[content.as_str()])?;

        info!(
            path = %self.target.display(),
            retained = self.retained_lines(),
            discarded = self.discarded_lines(),
            bytes = bytes_written,
            "wrote truncated target"
        );

        Ok(TruncateReport {
            target: self.target.clone(),
            outcome: self.outcome(),
            total_lines: self.total_lines,
            retained_lines: self.retained_lines(),
            discarded_lines: self.discarded_lines(),
            dropped_bytes: self.dropped_bytes(),
            bytes_written,
        })
    }
}

/// Cut `target` at the first marker line and append `replacement` after `separator`.
pub fn truncate_at_marker(
    target: &Path,
    replacement: &Path,
    markers: &MarkerSet,
    separator: &str,
) -> RepairResult<TruncateReport> {
    TruncatePlan::scan(target, markers)?.apply(replacement, separator)
}
