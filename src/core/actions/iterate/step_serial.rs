use crate::core::actions::iterate::kernel::advance_sample;
use crate::core::actions::iterate::ports::step_backend::{MapConstant, StepBackend};
use crate::core::actions::iterate::probe::BackendKind;
use crate::core::data::complex::Complex;

/// Single-threaded backend used when no worker pool is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl StepBackend for SerialBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Serial
    }

    fn step(
        &self,
        z: &mut [Complex],
        escape: &mut [f64],
        constant: MapConstant<'_>,
        step_counter: f64,
        threshold: f64,
    ) {
        match constant {
            MapConstant::PerSample(c) => z
                .iter_mut()
                .zip(escape.iter_mut())
                .zip(c)
                .for_each(|((z, escape), &c)| {
                    advance_sample(z, escape, c, step_counter, threshold)
                }),
            MapConstant::Scalar(c) => z
                .iter_mut()
                .zip(escape.iter_mut())
                .for_each(|(z, escape)| advance_sample(z, escape, c, step_counter, threshold)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_sample_constant_uses_matching_index() {
        let c = [Complex::new(-1.0, 0.0), Complex::new(3.0, 3.0)];
        let mut z = [Complex::ZERO; 2];
        let mut escape = [0.0; 2];

        SerialBackend.step(&mut z, &mut escape, MapConstant::PerSample(&c), 1.0, 4.0);

        assert_eq!(z, c);
        assert_eq!(escape[0], 0.0);
        // |3 + 3i| > 4, |z1 - z0| = |3 + 3i|
        assert_eq!(escape[1], Complex::new(3.0, 3.0).norm() + 1.0);
    }

    #[test]
    fn test_scalar_constant_applies_to_every_sample() {
        let mut z = [Complex::ZERO, Complex::new(0.0, 1.0)];
        let mut escape = [0.0; 2];

        SerialBackend.step(
            &mut z,
            &mut escape,
            MapConstant::Scalar(Complex::new(0.5, 0.0)),
            1.0,
            4.0,
        );

        assert_eq!(z, [Complex::new(0.5, 0.0), Complex::new(-0.5, 0.0)]);
    }
}
