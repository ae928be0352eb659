use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for repair operations
#[derive(Error, Debug)]
pub enum RepairError {
    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 (invalid byte at offset {valid_up_to})", .path.display())]
    Decode { path: PathBuf, valid_up_to: usize },

    #[error("Invalid line range: {start}-{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corruption marker must not be empty")]
    EmptyMarker,
}

impl RepairError {
    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type alias for repair operations
pub type RepairResult<T> = Result<T, RepairError>;

/// Attach the offending path to an I/O failure
pub trait PathContext<T> {
    fn at_path(self, path: &Path) -> RepairResult<T>;
}

impl<T> PathContext<T> for Result<T, io::Error> {
    fn at_path(self, path: &Path) -> RepairResult<T> {
        self.map_err(|source| RepairError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        let error = result.at_path(Path::new("css/site.css")).unwrap_err();
        assert!(error.to_string().contains("css/site.css"));
        assert!(error.is_not_found());

        let source = error.source().expect("io error should carry a source");
        assert!(source.to_string().contains("file not found"));
    }

    #[test]
    fn test_range_display() {
        let error = RepairError::InvalidRange { start: 20, end: 10 };
        assert_eq!(error.to_string(), "Invalid line range: 20-10");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_decode_display() {
        let error = RepairError::Decode {
            path: PathBuf::from("buttons.css"),
            valid_up_to: 7,
        };
        let display = error.to_string();
        assert!(display.contains("buttons.css"));
        assert!(display.contains("offset 7"));
    }
}
