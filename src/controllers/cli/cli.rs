use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::iterate::StepBackend;
use crate::core::data::render_buffer::RenderBuffer;
use crate::core::engine::FractalEngine;

/// Renders a fixed number of frames without a window.
pub struct CliController<P: FilePresenterPort, B: StepBackend> {
    presenter: P,
    engine: FractalEngine<B>,
    buffer: Option<RenderBuffer>,
}

impl<P: FilePresenterPort, B: StepBackend> CliController<P, B> {
    pub fn new(presenter: P, engine: FractalEngine<B>) -> Self {
        Self {
            presenter,
            engine,
            buffer: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &FractalEngine<B> {
        &self.engine
    }

    pub fn generate(&mut self, frames: u32) -> Result<(), Box<dyn std::error::Error>> {
        info!("rendering {}", self.engine.describe());
        info!(
            "resolution {}x{}, {} frame(s) on {} backend",
            self.engine.viewport().resolution(),
            self.engine.viewport().resolution(),
            frames,
            self.engine.backend().kind()
        );

        let start = Instant::now();
        for _ in 0..frames {
            self.engine.run_batch();
        }
        let duration = start.elapsed();

        info!(
            "{} steps in {:?}, {} samples escaped",
            self.engine.steps_run(),
            duration,
            self.engine.escape_buffer().escaped_count()
        );

        self.buffer = Some(self.engine.render()?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
