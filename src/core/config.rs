use std::path::PathBuf;

use crate::core::actions::iterate::BackendKind;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{HomeView, ViewportError, ViewportState};
use crate::core::fractals::FractalKind;

const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
const DEFAULT_RADIUS: f64 = 2.0;
const DEFAULT_ESCAPE_DEPTH_MAX: i64 = 200;
const DEFAULT_JULIA_SEED: Complex = Complex::new(0.25, 0.0);
const DEFAULT_BATCH_STEPS: u32 = 20;
const DEFAULT_ESCAPE_THRESHOLD: f64 = 4.0;
const DEFAULT_ACCELERATED_RESOLUTION: u32 = 500;
const DEFAULT_WINDOW_SIZE: u32 = 1000;
const DEFAULT_SNAPSHOT_DIR: &str = "output";

/// Startup settings. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub center: Complex,
    pub radius: f64,
    pub escape_depth_max: i64,
    pub julia_seed: Complex,
    pub batch_steps: u32,
    pub escape_threshold: f64,
    pub accelerated_resolution: u32,
    pub window_size: u32,
    pub snapshot_dir: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
            escape_depth_max: DEFAULT_ESCAPE_DEPTH_MAX,
            julia_seed: DEFAULT_JULIA_SEED,
            batch_steps: DEFAULT_BATCH_STEPS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
            accelerated_resolution: DEFAULT_ACCELERATED_RESOLUTION,
            window_size: DEFAULT_WINDOW_SIZE,
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
        }
    }
}

impl ExplorerConfig {
    /// Window pixels per radius of pan.
    #[must_use]
    pub fn pan_scale(&self) -> f64 {
        f64::from(self.window_size) / 5.0
    }

    #[must_use]
    pub fn home_view(&self) -> HomeView {
        HomeView {
            center: self.center,
            radius: self.radius,
            escape_depth_max: self.escape_depth_max,
            seed: self.julia_seed,
        }
    }

    #[must_use]
    pub fn resolution_for(&self, kind: FractalKind, backend: BackendKind) -> u32 {
        if backend.is_accelerated() {
            self.accelerated_resolution
        } else {
            kind.fallback_resolution()
        }
    }

    pub fn initial_viewport(
        &self,
        kind: FractalKind,
        backend: BackendKind,
    ) -> Result<ViewportState, ViewportError> {
        ViewportState::new(
            kind,
            self.home_view(),
            self.resolution_for(kind, backend),
            self.pan_scale(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pan_scale_is_a_fifth_of_the_window() {
        assert_eq!(ExplorerConfig::default().pan_scale(), 200.0);
    }

    #[test]
    fn accelerated_backend_uses_full_resolution() {
        let config = ExplorerConfig::default();

        for &kind in FractalKind::ALL {
            assert_eq!(config.resolution_for(kind, BackendKind::Rayon), 500);
        }
    }

    #[test]
    fn serial_backend_falls_back_to_smaller_resolution() {
        let config = ExplorerConfig::default();

        assert_eq!(
            config.resolution_for(FractalKind::Mandelbrot, BackendKind::Serial),
            100
        );
        assert_eq!(
            config.resolution_for(FractalKind::Julia, BackendKind::Serial),
            300
        );
    }

    #[test]
    fn initial_viewport_uses_defaults() {
        let viewport = ExplorerConfig::default()
            .initial_viewport(FractalKind::Julia, BackendKind::Rayon)
            .unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
        assert_eq!(viewport.radius(), 2.0);
        assert_eq!(viewport.resolution(), 500);
        assert_eq!(viewport.escape_depth_max(), 200);
        assert_eq!(viewport.seed(), Complex::new(0.25, 0.0));
        assert_eq!(viewport.epoch().value(), 0);
    }

    #[test]
    fn initial_viewport_rejects_bad_radius() {
        let config = ExplorerConfig {
            radius: 0.0,
            ..ExplorerConfig::default()
        };

        assert!(matches!(
            config.initial_viewport(FractalKind::Mandelbrot, BackendKind::Serial),
            Err(ViewportError::RadiusOutOfRange { .. })
        ));
    }
}
