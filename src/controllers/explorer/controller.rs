use std::time::Instant;

use log::{error, info};

use crate::controllers::explorer::commands::ExplorerCommand;
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::events::{RenderError, RenderEvent};
use crate::controllers::explorer::ports::{FrameSink, SnapshotExporter};
use crate::core::actions::iterate::StepBackend;
use crate::core::engine::FractalEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct ExplorerController<B, S, E>
where
    B: StepBackend,
    S: FrameSink,
    E: SnapshotExporter,
{
    engine: FractalEngine<B>,
    sink: S,
    exporter: E,
    status: Option<String>,
}

impl<B, S, E> ExplorerController<B, S, E>
where
    B: StepBackend,
    S: FrameSink,
    E: SnapshotExporter,
{
    pub fn new(engine: FractalEngine<B>, sink: S, exporter: E) -> Self {
        Self {
            engine,
            sink,
            exporter,
            status: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &FractalEngine<B> {
        &self.engine
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Outcome of the most recent export.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies this frame's commands, advances one batch and hands the
    /// render to the sink.
    ///
    /// Nothing in here fails the loop: render and export errors become a
    /// [`RenderEvent::Error`] or a status line respectively.
    pub fn run_frame<I>(&mut self, commands: I) -> FrameOutcome
    where
        I: IntoIterator<Item = ExplorerCommand>,
    {
        for command in commands {
            match command {
                ExplorerCommand::Navigate(navigation) => {
                    self.engine.navigate(navigation);
                }
                ExplorerCommand::Export => self.export(),
                ExplorerCommand::Quit => return FrameOutcome::Quit,
            }
        }

        let start = Instant::now();
        self.engine.run_batch();
        let result = self.engine.render();
        let render_duration = start.elapsed();
        let epoch = self.engine.viewport().epoch();

        let event = match result {
            Ok(render_buffer) => RenderEvent::Frame(FrameData {
                epoch,
                steps_run: self.engine.steps_run(),
                render_buffer,
                render_duration,
                description: self.engine.describe(),
                status: self.status.clone(),
            }),
            Err(err) => {
                error!("render failed at epoch {}: {}", epoch, err);
                RenderEvent::Error(RenderError {
                    epoch,
                    message: err.to_string(),
                })
            }
        };

        self.sink.submit(event);

        FrameOutcome::Continue
    }

    fn export(&mut self) {
        let snapshot = self.engine.snapshot();

        let status = match self.exporter.export(&snapshot) {
            Ok(path) => {
                info!("saved snapshot to {}", path.display());
                format!("Saved {}", path.display())
            }
            Err(err) => {
                error!("snapshot export failed: {}", err);
                format!("Export failed: {}", err)
            }
        };

        self.status = Some(status);
    }
}
