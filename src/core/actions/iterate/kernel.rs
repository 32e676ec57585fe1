use crate::core::data::complex::Complex;
use crate::core::data::escape_buffer::NOT_ESCAPED;

/// Advances one sample by a single step and records its escape metric.
///
/// The metric is `|z - z_prev| + step_counter`, written only while the entry
/// still holds [`NOT_ESCAPED`]. Escaped samples keep iterating; only the
/// buffer write is gated.
#[inline]
pub fn advance_sample(
    z: &mut Complex,
    escape: &mut f64,
    c: Complex,
    step_counter: f64,
    threshold: f64,
) {
    let previous = *z;
    *z = previous * previous + c;

    if *escape == NOT_ESCAPED && z.norm() > threshold {
        *escape = (*z - previous).norm() + step_counter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_records_divergence_plus_counter() {
        // z0 = -2.5 - 2i, c = 0.25 -> z1 = 2.5 + 10i, |z1 - z0| = |5 + 12i| = 13
        let mut z = Complex::new(-2.5, -2.0);
        let mut escape = NOT_ESCAPED;

        advance_sample(&mut z, &mut escape, Complex::new(0.25, 0.0), 1.0, 4.0);

        assert_eq!(z, Complex::new(2.5, 10.0));
        assert!((escape - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_sample_is_not_recorded() {
        let mut z = Complex::ZERO;
        let mut escape = NOT_ESCAPED;

        advance_sample(&mut z, &mut escape, Complex::new(-1.0, 0.0), 1.0, 4.0);

        assert_eq!(z, Complex::new(-1.0, 0.0));
        assert_eq!(escape, NOT_ESCAPED);
    }

    #[test]
    fn test_recorded_entry_is_never_overwritten() {
        let mut z = Complex::new(10.0, 0.0);
        let mut escape = 7.5;

        for counter in 1..50 {
            advance_sample(&mut z, &mut escape, Complex::ZERO, counter as f64, 4.0);
        }

        assert_eq!(escape, 7.5);
    }

    #[test]
    fn test_threshold_is_strict() {
        // z1 = 4 exactly: not escaped
        let mut z = Complex::new(2.0, 0.0);
        let mut escape = NOT_ESCAPED;

        advance_sample(&mut z, &mut escape, Complex::ZERO, 1.0, 4.0);

        assert_eq!(escape, NOT_ESCAPED);
    }
}
