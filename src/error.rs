use std::path::PathBuf;

use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{0}")]
    Usage(String),

    #[error("no files with a capture timestamp found in `{}`", directory.display())]
    EmptyCatalog { directory: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("platform error: {0}")]
    Platform(String),
}

impl TimelineError {
    /// Errors that end the run before any window exists and still exit with status 0.
    #[must_use]
    pub fn is_clean_exit(&self) -> bool {
        !matches!(self, Self::Platform(_))
    }
}
