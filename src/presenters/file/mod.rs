pub mod png_snapshot;
pub mod ppm;

pub use png_snapshot::{ExportError, PngSnapshotExporter};
pub use ppm::PpmFilePresenter;
