//! Navigation and display parameters of the explorer.
//!
//! Every mutation that changes what the engine has to compute bumps the
//! [`Epoch`]. The engine compares epochs to decide when the sample grid and
//! iteration state must be rebuilt; colour-mode changes only remap the
//! existing escape data and leave the epoch alone.

use std::error::Error;
use std::fmt;

use log::warn;

use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::complex::Complex;
use crate::core::fractals::FractalKind;
use crate::core::navigation::commands::{NavigationCommand, SeedAxis, Sign, ZoomDirection};

pub const MIN_RADIUS: f64 = 5e-17;
pub const MAX_RADIUS: f64 = 1e300;
pub const MIN_RESOLUTION: u32 = 100;
pub const SEED_NUDGE: f64 = 0.02;

/// Logical version of the viewport. Strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    RadiusOutOfRange { radius: f64 },
    ResolutionBelowFloor { resolution: u32 },
    InvalidPanScale { pan_scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusOutOfRange { radius } => write!(
                f,
                "radius {} is outside [{}, {}]",
                radius, MIN_RADIUS, MAX_RADIUS
            ),
            Self::ResolutionBelowFloor { resolution } => write!(
                f,
                "resolution {} is below the floor of {}",
                resolution, MIN_RESOLUTION
            ),
            Self::InvalidPanScale { pan_scale } => {
                write!(f, "pan scale must be positive and finite: {}", pan_scale)
            }
        }
    }
}

impl Error for ViewportError {}

/// The view restored by [`ViewportState::reset_view`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HomeView {
    pub center: Complex,
    pub radius: f64,
    pub escape_depth_max: i64,
    pub seed: Complex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    center: Complex,
    radius: f64,
    resolution: u32,
    escape_depth_max: i64,
    colour_mode: ColourMode,
    fractal_kind: FractalKind,
    seed: Complex,
    pan_scale: f64,
    home: HomeView,
    epoch: Epoch,
}

impl ViewportState {
    pub fn new(
        fractal_kind: FractalKind,
        home: HomeView,
        resolution: u32,
        pan_scale: f64,
    ) -> Result<Self, ViewportError> {
        if !(MIN_RADIUS..=MAX_RADIUS).contains(&home.radius) {
            return Err(ViewportError::RadiusOutOfRange {
                radius: home.radius,
            });
        }

        if resolution < MIN_RESOLUTION {
            return Err(ViewportError::ResolutionBelowFloor { resolution });
        }

        if !(pan_scale.is_finite() && pan_scale > 0.0) {
            return Err(ViewportError::InvalidPanScale { pan_scale });
        }

        Ok(Self {
            center: home.center,
            radius: home.radius,
            resolution,
            escape_depth_max: home.escape_depth_max,
            colour_mode: ColourMode::default(),
            fractal_kind,
            seed: home.seed,
            pan_scale,
            home,
            epoch: Epoch::default(),
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn escape_depth_max(&self) -> i64 {
        self.escape_depth_max
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKind {
        self.fractal_kind
    }

    /// The Julia seed. Kept for Mandelbrot views too so switching back to
    /// Julia resumes where the user left it.
    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn apply(&mut self, command: NavigationCommand) -> Epoch {
        match command {
            NavigationCommand::Pan { dx, dy } => self.pan(dx, dy),
            NavigationCommand::Zoom(direction) => self.zoom(direction),
            NavigationCommand::Resize(delta) => self.resize(delta),
            NavigationCommand::AdjustDepth(delta) => self.adjust_depth(delta),
            NavigationCommand::ToggleColourMode => self.toggle_colour_mode(),
            NavigationCommand::NudgeSeed { axis, sign } => self.nudge_seed(axis, sign),
            NavigationCommand::SetFractalKind(kind) => self.set_fractal_kind(kind),
            NavigationCommand::ResetView => self.reset_view(),
        }
    }

    /// Moves the center opposite to the drag so the plane follows the cursor.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Epoch {
        self.center = Complex {
            real: self.center.real - self.radius * dx / self.pan_scale,
            imag: self.center.imag - self.radius * dy / self.pan_scale,
        };

        self.invalidate()
    }

    pub fn zoom(&mut self, direction: ZoomDirection) -> Epoch {
        let radius = match direction {
            ZoomDirection::In => self.radius / 2.0,
            ZoomDirection::Out => self.radius * 2.0,
        };

        let accepted = match direction {
            ZoomDirection::In => radius > MIN_RADIUS,
            ZoomDirection::Out => radius < MAX_RADIUS,
        };

        if !accepted {
            warn!("zoom {:?} ignored at radius {}", direction, self.radius);
            return self.epoch;
        }

        self.radius = radius;
        self.invalidate()
    }

    pub fn resize(&mut self, delta: i32) -> Epoch {
        let resolution = (i64::from(self.resolution) + i64::from(delta))
            .clamp(i64::from(MIN_RESOLUTION), i64::from(u32::MAX));
        self.resolution = resolution as u32;

        self.invalidate()
    }

    /// No floor or ceiling: a zero or negative depth simply stops the step
    /// counter from advancing.
    pub fn adjust_depth(&mut self, delta: i64) -> Epoch {
        self.escape_depth_max = self.escape_depth_max.saturating_add(delta);

        self.invalidate()
    }

    pub fn toggle_colour_mode(&mut self) -> Epoch {
        self.colour_mode = self.colour_mode.toggled();

        self.epoch
    }

    pub fn nudge_seed(&mut self, axis: SeedAxis, sign: Sign) -> Epoch {
        if self.fractal_kind != FractalKind::Julia {
            return self.epoch;
        }

        let step = sign.apply(SEED_NUDGE);
        match axis {
            SeedAxis::Real => self.seed.real += step,
            SeedAxis::Imaginary => self.seed.imag += step,
        }

        self.invalidate()
    }

    pub fn set_fractal_kind(&mut self, kind: FractalKind) -> Epoch {
        if kind == self.fractal_kind {
            return self.epoch;
        }

        self.fractal_kind = kind;
        self.invalidate()
    }

    pub fn reset_view(&mut self) -> Epoch {
        self.center = self.home.center;
        self.radius = self.home.radius;
        self.escape_depth_max = self.home.escape_depth_max;
        self.seed = self.home.seed;

        self.invalidate()
    }

    /// One-line summary used for the window title and snapshot names.
    #[must_use]
    pub fn describe(&self, steps: u64) -> String {
        let mut line = format!(
            "{} x={} y={}",
            self.fractal_kind, self.center.real, self.center.imag
        );

        if self.fractal_kind == FractalKind::Julia {
            line.push_str(&format!(
                " x0={:.2} y0={:.2}",
                self.seed.real, self.seed.imag
            ));
        }

        line.push_str(&format!(
            " radius={} res={} steps={} depth={}",
            self.radius, self.resolution, steps, self.escape_depth_max
        ));

        line
    }

    fn invalidate(&mut self) -> Epoch {
        self.epoch = self.epoch.next();
        self.epoch
    }
}
