use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::{TimelineEntry, Timestamp};
use crate::error::{TimelineError, TimelineResult};

/// Why a single file could not be placed on the timeline.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed metadata header: {0}")]
    MalformedHeader(String),

    #[error("no capture timestamp in metadata")]
    MissingTimestamp,

    #[error("invalid capture timestamp `{0}`")]
    InvalidTimestamp(String),
}

/// Capability that yields the capture timestamp of one file.
pub trait TimestampSource {
    fn extract_timestamp(&self, path: &Path) -> Result<Timestamp, SourceError>;
}

impl<F> TimestampSource for F
where
    F: Fn(&Path) -> Result<Timestamp, SourceError>,
{
    fn extract_timestamp(&self, path: &Path) -> Result<Timestamp, SourceError> {
        self(path)
    }
}

/// A file excluded from the catalog together with the reason.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SourceError,
}

/// Result of one directory scan: the catalog plus every per-file diagnostic.
#[derive(Debug)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedFile>,
}

/// Timestamped entries of one run, ascending by timestamp.
///
/// Equal timestamps keep discovery order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<TimelineEntry>,
}

impl Catalog {
    /// Orders pre-collected entries; the sort is stable.
    #[must_use]
    pub fn from_entries(mut entries: Vec<TimelineEntry>) -> Self {
        entries.sort_by_key(|entry| entry.timestamp);
        Self { entries }
    }

    /// Scans the regular files of `directory` and orders the ones with a timestamp.
    ///
    /// Files are visited in file-name order so that discovery order, and with
    /// it the order of equal timestamps, is deterministic. Per-file failures,
    /// including listing and stat errors, land in `skipped` and never abort
    /// the scan; only a directory that cannot be opened does.
    pub fn build(
        directory: &Path,
        source: &impl TimestampSource,
    ) -> TimelineResult<CatalogBuild> {
        let listing = fs::read_dir(directory).map_err(|source| TimelineError::Io {
            context: format!("failed to read directory `{}`", directory.display()),
            source,
        })?;

        let mut paths = Vec::new();
        let mut skipped = Vec::new();
        for dir_entry in listing {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(err) => {
                    skipped.push(SkippedFile {
                        path: directory.to_path_buf(),
                        reason: SourceError::Io(err),
                    });
                    continue;
                }
            };
            let path = dir_entry.path();
            // Follows symlinks so a link to a regular file counts as one.
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => paths.push(path),
                Ok(_) => trace!(path = %path.display(), "skip non-regular directory entry"),
                Err(err) => skipped.push(SkippedFile {
                    path,
                    reason: SourceError::Io(err),
                }),
            }
        }
        paths.sort_by(|left, right| left.file_name().cmp(&right.file_name()));

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match source.extract_timestamp(&path) {
                Ok(timestamp) => {
                    let name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    entries.push(TimelineEntry::new(name, timestamp));
                }
                Err(reason) => skipped.push(SkippedFile { path, reason }),
            }
        }

        debug!(
            directory = %directory.display(),
            accepted = entries.len(),
            skipped = skipped.len(),
            "catalog scan finished"
        );

        Ok(CatalogBuild {
            catalog: Self::from_entries(entries),
            skipped,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&TimelineEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TimelineEntry> {
        self.entries.last()
    }
}
