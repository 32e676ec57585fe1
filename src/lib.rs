mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use crate::controllers::cli::CliController;
pub use crate::controllers::explorer::{
    ExplorerCommand, ExplorerController, FrameOutcome, FrameSink, RenderError, RenderEvent,
    SnapshotExporter,
};
pub use crate::core::actions::iterate::{
    BackendKind, RayonBackend, SerialBackend, StepBackend, probe_backend,
};
pub use crate::core::colour_mapping::{ColourMode, colour_map_factory};
pub use crate::core::config::ExplorerConfig;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_buffer::EscapeBuffer;
pub use crate::core::data::render_buffer::RenderBuffer;
pub use crate::core::data::snapshot::EscapeSnapshot;
pub use crate::core::data::viewport::{Epoch, ViewportError, ViewportState};
pub use crate::core::engine::FractalEngine;
pub use crate::core::fractals::FractalKind;
pub use crate::core::navigation::{NavigationCommand, PanGesture, SeedAxis, Sign, ZoomDirection};
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
pub use crate::presenters::file::{ExportError, PngSnapshotExporter, PpmFilePresenter};
