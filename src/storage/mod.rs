pub mod snapshot_name;

pub use snapshot_name::{SnapshotNamer, snapshot_file_name};
