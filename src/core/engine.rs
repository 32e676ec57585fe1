//! The explorer engine: one value owning the viewport, the sample grid and
//! the iteration state.
//!
//! Navigation mutates the live viewport only. The next [`FractalEngine::prepare`]
//! notices the epoch change and rebuilds the grid and iteration state from
//! scratch, so escape data from an old epoch can never mix with a new one.

use log::debug;

use crate::core::actions::generate_grid::generate_grid;
use crate::core::actions::generate_pixel_buffer::{GeneratePixelBufferError, generate_pixel_buffer};
use crate::core::actions::iterate::{IterationState, StepBackend};
use crate::core::colour_mapping::colour_map_factory;
use crate::core::data::escape_buffer::EscapeBuffer;
use crate::core::data::render_buffer::RenderBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::snapshot::EscapeSnapshot;
use crate::core::data::viewport::{Epoch, ViewportState};
use crate::core::fractals::FractalKind;
use crate::core::navigation::NavigationCommand;

pub struct FractalEngine<B: StepBackend> {
    backend: B,
    viewport: ViewportState,
    computed_view: ViewportState,
    grid: SampleGrid,
    state: IterationState,
    batch_steps: u32,
    threshold: f64,
}

impl<B: StepBackend> FractalEngine<B> {
    #[must_use]
    pub fn new(backend: B, viewport: ViewportState, batch_steps: u32, threshold: f64) -> Self {
        let grid = generate_grid(&viewport);
        let state = IterationState::new(&grid, viewport.fractal_kind(), viewport.seed());

        debug!(
            "engine started on {} backend at resolution {}",
            backend.kind(),
            viewport.resolution()
        );

        Self {
            backend,
            computed_view: viewport.clone(),
            viewport,
            grid,
            state,
            batch_steps,
            threshold,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The live viewport, including changes not yet computed.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn navigate(&mut self, command: NavigationCommand) -> Epoch {
        self.viewport.apply(command)
    }

    /// Rebuilds the grid and resets iteration if the viewport moved on.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn prepare(&mut self) -> bool {
        if self.viewport.epoch() == self.state.epoch() {
            return false;
        }

        self.grid = generate_grid(&self.viewport);
        self.state
            .reset(&self.grid, self.viewport.fractal_kind(), self.viewport.seed());
        self.computed_view = self.viewport.clone();

        debug!(
            "rebuilt epoch {}: {}",
            self.viewport.epoch(),
            self.viewport.describe(0)
        );

        true
    }

    /// Runs one frame's worth of steps.
    pub fn run_batch(&mut self) {
        self.run_steps(self.batch_steps);
    }

    pub fn run_steps(&mut self, steps: u32) {
        self.prepare();

        self.state.run_steps(
            &self.backend,
            &self.grid,
            steps,
            self.computed_view.escape_depth_max(),
            self.threshold,
        );
    }

    #[must_use]
    pub fn escape_buffer(&self) -> &EscapeBuffer {
        self.state.escape()
    }

    #[must_use]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    #[must_use]
    pub fn steps_run(&self) -> u64 {
        self.state.steps_run()
    }

    #[must_use]
    pub fn step_counter(&self) -> i64 {
        self.state.step_counter()
    }

    /// Colour-maps whatever the escape buffer holds right now.
    ///
    /// Uses the live colour mode, which never invalidates the epoch.
    pub fn render(&self) -> Result<RenderBuffer, GeneratePixelBufferError> {
        let escape = self.state.escape();

        if escape.is_degenerate() {
            return Ok(RenderBuffer::new(escape.resolution()));
        }

        let colour_map = colour_map_factory(self.viewport.colour_mode());

        generate_pixel_buffer(escape.intensities(), &*colour_map, escape.resolution())
    }

    #[must_use]
    pub fn snapshot(&self) -> EscapeSnapshot {
        let view = &self.computed_view;
        let seed = match view.fractal_kind() {
            FractalKind::Julia => Some(view.seed()),
            FractalKind::Mandelbrot => None,
        };

        EscapeSnapshot {
            fractal_kind: view.fractal_kind(),
            center: view.center(),
            radius: view.radius(),
            escape_depth_max: view.escape_depth_max(),
            seed,
            steps_run: self.state.steps_run(),
            resolution: self.state.escape().resolution(),
            intensities: self.state.escape().intensity_bytes(),
        }
    }

    /// Status line for the view currently on screen.
    #[must_use]
    pub fn describe(&self) -> String {
        self.computed_view.describe(self.state.steps_run())
    }
}
