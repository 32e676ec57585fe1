use crate::core::actions::iterate::probe::BackendKind;
use crate::core::data::complex::Complex;

/// The constant term `c` of `z <- z^2 + c`.
///
/// Mandelbrot varies `c` per sample and starts every `z` at zero; Julia uses
/// one seed for every sample and starts `z` at the sample coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapConstant<'a> {
    PerSample(&'a [Complex]),
    Scalar(Complex),
}

/// Executes one data-parallel step of the quadratic map over every sample.
///
/// Implementations must apply [`advance_sample`] to each sample exactly once
/// and must not depend on visiting order.
///
/// [`advance_sample`]: crate::core::actions::iterate::kernel::advance_sample
pub trait StepBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    fn step(
        &self,
        z: &mut [Complex],
        escape: &mut [f64],
        constant: MapConstant<'_>,
        step_counter: f64,
        threshold: f64,
    );
}
