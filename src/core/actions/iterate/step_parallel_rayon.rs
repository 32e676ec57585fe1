use rayon::prelude::*;

use crate::core::actions::iterate::kernel::advance_sample;
use crate::core::actions::iterate::ports::step_backend::{MapConstant, StepBackend};
use crate::core::actions::iterate::probe::BackendKind;
use crate::core::data::complex::Complex;

/// Smallest number of samples handed to one rayon task.
pub const MIN_SAMPLES_PER_TASK: usize = 1024;

/// Steps every sample in parallel using rayon's work-stealing scheduler.
///
/// Samples are independent, so the split only affects scheduling, never the
/// result: output is identical to [`SerialBackend`].
///
/// [`SerialBackend`]: crate::core::actions::iterate::step_serial::SerialBackend
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonBackend;

impl StepBackend for RayonBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Rayon
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
                .par_iter_mut()
                .zip(escape.par_iter_mut())
                .zip(c.par_iter())
                .with_min_len(MIN_SAMPLES_PER_TASK)
                .for_each(|((z, escape), &c)| {
                    advance_sample(z, escape, c, step_counter, threshold)
                }),
            MapConstant::Scalar(c) => z
                .par_iter_mut()
                .zip(escape.par_iter_mut())
                .with_min_len(MIN_SAMPLES_PER_TASK)
                .for_each(|(z, escape)| advance_sample(z, escape, c, step_counter, threshold)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::iterate::step_serial::SerialBackend;

    fn coordinates(count: usize) -> Vec<Complex> {
        (0..count)
            .map(|i| Complex::new(-2.0 + 4.0 * i as f64 / count as f64, 0.37))
            .collect()
    }

    fn run<B: StepBackend>(backend: &B, constant: MapConstant<'_>, start: &[Complex]) -> Vec<f64> {
        let mut z = start.to_vec();
        let mut escape = vec![0.0; start.len()];

        for counter in 1..=40 {
            backend.step(&mut z, &mut escape, constant, counter as f64, 4.0);
        }

        escape
    }

    #[test]
    fn test_rayon_matches_serial_for_per_sample_constant() {
        let c = coordinates(5000);
        let start = vec![Complex::ZERO; c.len()];

        assert_eq!(
            run(&RayonBackend, MapConstant::PerSample(&c), &start),
            run(&SerialBackend, MapConstant::PerSample(&c), &start)
        );
    }

    #[test]
    fn test_rayon_matches_serial_for_scalar_constant() {
        let start = coordinates(5000);
        let seed = MapConstant::Scalar(Complex::new(-0.7, 0.27));

        assert_eq!(run(&RayonBackend, seed, &start), run(&SerialBackend, seed, &start));
    }

    #[test]
    fn test_rayon_handles_fewer_samples_than_task_size() {
        let c = coordinates(3);
        let start = vec![Complex::ZERO; 3];

        assert_eq!(
            run(&RayonBackend, MapConstant::PerSample(&c), &start),
            run(&SerialBackend, MapConstant::PerSample(&c), &start)
        );
    }
}
