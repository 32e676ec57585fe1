use std::error::Error;
use std::path::PathBuf;

use crate::core::data::snapshot::EscapeSnapshot;

/// Persists escape snapshots. Every call must produce a new artifact.
pub trait SnapshotExporter {
    fn export(&mut self, snapshot: &EscapeSnapshot) -> Result<PathBuf, Box<dyn Error>>;
}
