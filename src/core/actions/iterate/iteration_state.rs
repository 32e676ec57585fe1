use crate::core::actions::iterate::ports::step_backend::{MapConstant, StepBackend};
use crate::core::data::complex::Complex;
use crate::core::data::escape_buffer::EscapeBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport::Epoch;
use crate::core::fractals::FractalKind;

/// Everything the iterator carries between frames within one epoch.
///
/// Owned buffers are reused across epochs: [`IterationState::reset`] rewrites
/// them in full, so nothing from a previous epoch survives.
#[derive(Debug, Clone)]
pub struct IterationState {
    epoch: Epoch,
    kind: FractalKind,
    seed: Complex,
    z: Vec<Complex>,
    escape: EscapeBuffer,
    step_counter: i64,
    steps_run: u64,
}

impl IterationState {
    #[must_use]
    pub fn new(grid: &SampleGrid, kind: FractalKind, seed: Complex) -> Self {
        let mut state = Self {
            epoch: grid.epoch(),
            kind,
            seed,
            z: Vec::with_capacity(grid.len()),
            escape: EscapeBuffer::new(grid.resolution()),
            step_counter: 0,
            steps_run: 0,
        };

        state.reset(grid, kind, seed);
        state
    }

    pub fn reset(&mut self, grid: &SampleGrid, kind: FractalKind, seed: Complex) {
        self.epoch = grid.epoch();
        self.kind = kind;
        self.seed = seed;
        self.step_counter = 0;
        self.steps_run = 0;

        self.z.clear();
        match kind {
            FractalKind::Mandelbrot => self.z.resize(grid.len(), Complex::ZERO),
            FractalKind::Julia => self.z.extend_from_slice(grid.samples()),
        }

        if self.escape.resolution() == grid.resolution() {
            self.escape.values_mut().fill(0.0);
        } else {
            self.escape = EscapeBuffer::new(grid.resolution());
        }
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn escape(&self) -> &EscapeBuffer {
        &self.escape
    }

    #[must_use]
    pub fn step_counter(&self) -> i64 {
        self.step_counter
    }

    /// Total steps executed since the last reset.
    #[must_use]
    pub fn steps_run(&self) -> u64 {
        self.steps_run
    }

    /// Runs `steps` lock-step iterations over every sample of `grid`.
    ///
    /// Before each step the shared counter advances by one unless it has
    /// reached `depth_max`, so samples escaping at the same step share the
    /// same counter value and a non-positive ceiling pins it at zero.
    pub fn run_steps<B: StepBackend + ?Sized>(
        &mut self,
        backend: &B,
        grid: &SampleGrid,
        steps: u32,
        depth_max: i64,
        threshold: f64,
    ) {
        debug_assert_eq!(grid.epoch(), self.epoch, "grid and state epochs diverged");

        for _ in 0..steps {
            if self.step_counter < depth_max {
                self.step_counter += 1;
            }

            let constant = match self.kind {
                FractalKind::Mandelbrot => MapConstant::PerSample(grid.samples()),
                FractalKind::Julia => MapConstant::Scalar(self.seed),
            };

            backend.step(
                &mut self.z,
                self.escape.values_mut(),
                constant,
                self.step_counter as f64,
                threshold,
            );

            self.steps_run += 1;
        }
    }
}
