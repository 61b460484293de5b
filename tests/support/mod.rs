#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use photo_timeline::core::{SourceError, Timestamp};

static NEXT_DIR_ID: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let id = NEXT_DIR_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "photo-timeline-{label}-{}-{id}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::create_dir_all(&path).expect("create scratch subdir");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Test source: the file body is the timestamp in decimal seconds.
pub fn text_timestamp_source(path: &Path) -> Result<Timestamp, SourceError> {
    let body = fs::read_to_string(path)?;
    let body = body.trim();
    if body.is_empty() {
        return Err(SourceError::MissingTimestamp);
    }
    body.parse()
        .map_err(|_| SourceError::InvalidTimestamp(body.to_owned()))
}
