use std::fs;
use std::path::Path;
use tracing::debug;

use super::ConfigData;
use crate::error::{PathContext, RepairError, RepairResult};

impl ConfigData {
    /// Load a TOML config file. Absent sections and keys keep their defaults.
    pub fn load(path: &Path) -> RepairResult<Self> {
        let content = fs::read_to_string(path).at_path(path)?;
        let data: ConfigData = toml::from_str(&content)
            .map_err(|e| RepairError::Config(format!("{}: {}", path.display(), e)))?;

        data.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(data)
    }

    /// Load `path` when given, otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> RepairResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> RepairResult<()> {
        if self.truncate.markers.is_empty() {
            return Err(RepairError::Config(
                "truncate.markers must list at least one marker".to_string(),
            ));
        }
        if self.truncate.markers.iter().any(|m| m.is_empty()) {
            return Err(RepairError::EmptyMarker);
        }

        let range = self.remove_range;
        if range.start > range.end {
            return Err(RepairError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }

        Ok(())
    }

    /// Replace the marker list when `markers` is non-empty.
    pub fn with_markers(mut self, markers: Vec<String>) -> Self {
        if !markers.is_empty() {
            self.truncate.markers = markers;
        }
        self
    }

    pub fn with_range(mut self, start: Option<usize>, end: Option<usize>) -> Self {
        if let Some(start) = start {
            self.remove_range.start = start;
        }
        if let Some(end) = end {
            self.remove_range.end = end;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MARKERS, DEFAULT_RANGE_END, DEFAULT_RANGE_START};
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let data = ConfigData::load_or_default(None).unwrap();
        assert_eq!(data.truncate.markers, DEFAULT_MARKERS);
        assert_eq!(data.truncate.separator, "\n");
        assert_eq!(data.remove_range.start, DEFAULT_RANGE_START);
        assert_eq!(data.remove_range.end, DEFAULT_RANGE_END);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cssmend.toml");
        fs::write(&path, "[remove_range]\nstart = 10\nend = 12\n").unwrap();

        let data = ConfigData::load(&path).unwrap();
        assert_eq!(data.remove_range.start, 10);
        assert_eq!(data.remove_range.end, 12);
        assert_eq!(data.truncate.markers, DEFAULT_MARKERS);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cssmend.toml");
        fs::write(&path, "[remove_range]\nstart = 12\nend = 10\n").unwrap();

        let err = ConfigData::load(&path).unwrap_err();
        assert!(matches!(err, RepairError::InvalidRange { start: 12, end: 10 }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cssmend.toml");
        fs::write(&path, "[truncate]\nmarker = \"x\"\n").unwrap();

        let err = ConfigData::load(&path).unwrap_err();
        assert!(matches!(err, RepairError::Config(_)));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let data = ConfigData::default().with_markers(vec![String::new()]);
        assert!(matches!(data.validate(), Err(RepairError::EmptyMarker)));
    }

    #[test]
    fn test_overrides() {
        let data = ConfigData::default()
            .with_markers(Vec::new())
            .with_range(Some(3), None);
        assert_eq!(data.truncate.markers, DEFAULT_MARKERS);
        assert_eq!(data.remove_range.start, 3);
        assert_eq!(data.remove_range.end, DEFAULT_RANGE_END);

        let data = data.with_markers(vec!["@@".to_string()]);
        assert_eq!(data.truncate.markers, vec!["@@"]);
    }
}
