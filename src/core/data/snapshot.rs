use crate::core::data::complex::Complex;
use crate::core::fractals::FractalKind;

/// Read-only copy of the escape data handed to exporters.
///
/// The parameters describe the view the escape data was computed for, which
/// can lag the live viewport by one frame after a navigation command.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeSnapshot {
    pub fractal_kind: FractalKind,
    pub center: Complex,
    pub radius: f64,
    pub escape_depth_max: i64,
    /// Present for Julia views only.
    pub seed: Option<Complex>,
    pub steps_run: u64,
    pub resolution: usize,
    /// Normalised escape intensities, row-major, one byte per sample.
    pub intensities: Vec<u8>,
}

impl EscapeSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolution == 0 || self.intensities.is_empty()
    }
}
