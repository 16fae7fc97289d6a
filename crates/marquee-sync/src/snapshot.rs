use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::source::ExportSource;

pub const PREVIOUS_FILE: &str = "old.csv";
pub const CURRENT_FILE: &str = "new.csv";

/// The two generations of the form export kept on local disk.
///
/// "current" is overwritten on every fetch. "previous" only moves forward
/// through [`SnapshotStore::commit`], after a run has published and pruned,
/// so a failed run is retried against the same baseline.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    previous: PathBuf,
    current: PathBuf,
}

impl SnapshotStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            previous: dir.join(PREVIOUS_FILE),
            current: dir.join(CURRENT_FILE),
        }
    }

    pub fn previous_path(&self) -> &Path {
        &self.previous
    }

    pub fn write_current(&self, body: &[u8]) -> Result<(), SyncError> {
        write_atomic(&self.current, body)?;
        tracing::debug!(path = %self.current.display(), bytes = body.len(), "current snapshot written");
        Ok(())
    }

    pub fn read_current(&self) -> Result<Vec<u8>, SyncError> {
        std::fs::read(&self.current).map_err(|e| SyncError::snapshot(&self.current, e))
    }

    /// The current snapshot decoded as UTF-8.
    pub fn current_text(&self) -> Result<String, SyncError> {
        Ok(String::from_utf8(self.read_current()?)?)
    }

    /// The previous snapshot, or empty content if none was ever committed.
    pub fn read_previous(&self) -> Result<Vec<u8>, SyncError> {
        match std::fs::read(&self.previous) {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.previous.display(), "no previous snapshot, using empty baseline");
                Ok(Vec::new())
            }
            Err(e) => Err(SyncError::snapshot(&self.previous, e)),
        }
    }

    /// Byte-for-byte comparison of the two generations.
    pub fn has_new_data(&self) -> Result<bool, SyncError> {
        Ok(self.read_previous()? != self.read_current()?)
    }

    /// Make the current snapshot the baseline for the next run.
    pub fn commit(&self) -> Result<(), SyncError> {
        let body = self.read_current()?;
        write_atomic(&self.previous, &body)?;
        tracing::debug!(path = %self.previous.display(), "snapshot committed");
        Ok(())
    }
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, body: &[u8]) -> Result<(), SyncError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SyncError::snapshot(parent, e))?;
    }
    let tmp_path = path.with_extension("csv.tmp");
    std::fs::write(&tmp_path, body).map_err(|e| SyncError::snapshot(&tmp_path, e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| SyncError::snapshot(path, e))?;
    Ok(())
}

/// Fetch the export, store it as the current snapshot, and report whether
/// it differs from the previous one.
///
/// The body must be UTF-8; anything else fails the run before it is stored.
pub async fn fetch_and_check(
    source: &dyn ExportSource,
    store: &SnapshotStore,
) -> Result<bool, SyncError> {
    tracing::info!(source = %source.describe(), "fetching form data");
    let body = source.fetch().await?;
    let body = String::from_utf8(body)?;
    store.write_current(body.as_bytes())?;

    let changed = store.has_new_data()?;
    if changed {
        tracing::info!("new form submissions found");
    } else {
        tracing::info!("no new form submissions");
    }
    Ok(changed)
}
