//! Ports the explorer controller drives: where frames go and where
//! snapshots are written.

pub mod frame_sink;
pub mod snapshot_exporter;

pub use frame_sink::FrameSink;
pub use snapshot_exporter::SnapshotExporter;
