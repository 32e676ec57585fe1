//! Per-frame application loop for interactive exploration.
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`ExplorerCommand`]s gathered by an input adapter since the
//!   previous frame
//! - **Output**: a [`FrameSink`] receiving one [`RenderEvent`] per frame and a
//!   [`SnapshotExporter`] for escape-data exports
//! - **Core**: the [`FractalEngine`](crate::core::engine::FractalEngine) does
//!   the actual computation

pub mod commands;
mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use commands::ExplorerCommand;
pub use controller::{ExplorerController, FrameOutcome};
pub use events::{RenderError, RenderEvent};
pub use ports::{FrameSink, SnapshotExporter};
