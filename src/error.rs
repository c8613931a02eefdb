use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for the CompSrt application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors, tagged with the path being touched
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// Layout file could not be parsed
    #[error("Layout parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait to attach a path to `io::Result`
pub trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::io(path, source))
    }
}

/// Result type alias for CompSrt operations
pub type Result<T> = std::result::Result<T, Error>;
