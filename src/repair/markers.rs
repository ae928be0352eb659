use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::DEFAULT_MARKERS;
use crate::error::{RepairError, RepairResult};

static DEFAULT_MARKER_SET: Lazy<MarkerSet> = Lazy::new(|| {
    MarkerSet::new(DEFAULT_MARKERS).expect("Failed to compile default corruption markers")
});

/// Literal substrings whose presence in a line marks the start of corruption.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    patterns: Vec<String>,
    automaton: AhoCorasick,
}

/// First line found to contain a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerHit {
    /// Zero-based line index
    pub index: usize,
    pub marker: String,
}

impl MarkerHit {
    /// One-based line number, as shown to users
    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

impl MarkerSet {
    pub fn new<I, S>(markers: I) -> RepairResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = markers
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect();

        if patterns.is_empty() {
            return Err(RepairError::Config(
                "at least one corruption marker is required".to_string(),
            ));
        }
        if patterns.iter().any(|p| p.is_empty()) {
            return Err(RepairError::EmptyMarker);
        }

        let automaton = AhoCorasick::new(&patterns)
            .map_err(|e| RepairError::Config(format!("failed to compile markers: {}", e)))?;

        Ok(Self {
            patterns,
            automaton,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The marker contained in `line`, if any.
    pub fn find_in_line(&self, line: &str) -> Option<&str> {
        self.automaton
            .find(line)
            .map(|m| self.patterns[m.pattern().as_usize()].as_str())
    }

    /// Scan `lines` in order and stop at the first one holding a marker.
    pub fn first_hit(&self, lines: &[&str]) -> Option<MarkerHit> {
        lines.iter().enumerate().find_map(|(index, line)| {
            self.find_in_line(line).map(|marker| MarkerHit {
                index,
                marker: marker.to_string(),
            })
        })
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        DEFAULT_MARKER_SET.clone()
    }
}
