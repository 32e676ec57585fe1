use std::error::Error;

use escape_explorer::{
    BackendKind, CliController, ExplorerConfig, FractalEngine, FractalKind, PngSnapshotExporter,
    PpmFilePresenter, RayonBackend, SerialBackend, StepBackend, probe_backend,
};
use log::info;

const FRAMES: u32 = 10;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ExplorerConfig::default();

    match probe_backend() {
        BackendKind::Rayon => render_all(RayonBackend, &config),
        BackendKind::Serial => render_all(SerialBackend, &config),
    }
}

/// Renders the home view of every fractal kind as an RGB PPM plus an
/// escape-intensity PNG.
fn render_all<B: StepBackend + Copy>(
    backend: B,
    config: &ExplorerConfig,
) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&config.snapshot_dir)?;
    let mut exporter = PngSnapshotExporter::new(config.snapshot_dir.clone());

    for &kind in FractalKind::ALL {
        let viewport = config.initial_viewport(kind, backend.kind())?;
        let engine = FractalEngine::new(
            backend,
            viewport,
            config.batch_steps,
            config.escape_threshold,
        );
        let mut controller = CliController::new(PpmFilePresenter::new(), engine);

        controller.generate(FRAMES)?;

        let ppm_path = config.snapshot_dir.join(format!("{}.ppm", kind.slug()));
        controller.write(&ppm_path)?;
        info!("wrote {}", ppm_path.display());

        let png_path = exporter.write(&controller.engine().snapshot())?;
        info!("wrote {}", png_path.display());
    }

    Ok(())
}
