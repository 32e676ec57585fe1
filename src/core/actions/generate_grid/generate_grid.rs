use crate::core::data::complex::Complex;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport::ViewportState;

/// Maps a sample index on one axis to its coordinate.
///
/// The coordinate is derived by multiplication rather than by accumulating
/// the step, so every axis has exactly `resolution` samples starting at the
/// inclusive lower bound and stopping one step short of the upper bound.
#[inline]
fn axis_coordinate(lower: f64, step: f64, index: usize) -> f64 {
    lower + index as f64 * step
}

/// Builds the sample grid covering `[cx - r, cx + r) x [cy - r, cy + r)`.
#[must_use]
pub fn generate_grid(viewport: &ViewportState) -> SampleGrid {
    let resolution = viewport.resolution() as usize;
    let radius = viewport.radius();
    let center = viewport.center();
    let step = 2.0 * radius / resolution as f64;
    let real_lower = center.real - radius;
    let imag_lower = center.imag - radius;

    let real_axis: Vec<f64> = (0..resolution)
        .map(|i| axis_coordinate(real_lower, step, i))
        .collect();

    let samples = (0..resolution)
        .flat_map(|row| {
            let imag = axis_coordinate(imag_lower, step, row);
            real_axis.iter().map(move |&real| Complex { real, imag })
        })
        .collect();

    SampleGrid::from_samples(viewport.epoch(), resolution, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::HomeView;
    use crate::core::fractals::FractalKind;
    use crate::core::navigation::commands::ZoomDirection;

    fn viewport(center: Complex, resolution: u32) -> ViewportState {
        let home = HomeView {
            center,
            radius: 2.0,
            escape_depth_max: 200,
            seed: Complex::new(0.25, 0.0),
        };

        ViewportState::new(FractalKind::Mandelbrot, home, resolution, 200.0).unwrap()
    }

    #[test]
    fn test_grid_has_exactly_resolution_samples_per_axis() {
        for resolution in [100, 300, 500, 700] {
            let grid = generate_grid(&viewport(Complex::new(-0.5, 0.0), resolution));

            assert_eq!(grid.resolution(), resolution as usize);
            assert_eq!(grid.len(), (resolution * resolution) as usize);
        }
    }

    #[test]
    fn test_first_sample_is_lower_corner() {
        let grid = generate_grid(&viewport(Complex::new(-0.5, 0.0), 100));

        assert_eq!(grid.sample(0, 0), Some(Complex::new(-2.5, -2.0)));
    }

    #[test]
    fn test_last_sample_stops_one_step_short_of_upper_bound() {
        let grid = generate_grid(&viewport(Complex::new(0.0, 0.0), 100));
        let last = grid.sample(99, 99).unwrap();

        assert!((last.real - (2.0 - 0.04)).abs() < 1e-12);
        assert!((last.imag - (2.0 - 0.04)).abs() < 1e-12);
    }

    #[test]
    fn test_columns_follow_real_axis_and_rows_follow_imaginary_axis() {
        let grid = generate_grid(&viewport(Complex::new(0.0, 0.0), 100));
        let origin = grid.sample(0, 0).unwrap();
        let right = grid.sample(0, 1).unwrap();
        let below = grid.sample(1, 0).unwrap();

        assert!(right.real > origin.real);
        assert_eq!(right.imag, origin.imag);
        assert!(below.imag > origin.imag);
        assert_eq!(below.real, origin.real);
    }

    #[test]
    fn test_center_sample_hits_center_for_even_resolution() {
        let grid = generate_grid(&viewport(Complex::new(-1.0, 0.0), 100));
        let center = grid.sample(50, 50).unwrap();

        assert!((center.real + 1.0).abs() < 1e-12);
        assert!(center.imag.abs() < 1e-12);
    }

    #[test]
    fn test_grid_is_deterministic() {
        let viewport = viewport(Complex::new(0.3, -0.7), 300);

        assert_eq!(generate_grid(&viewport), generate_grid(&viewport));
    }

    #[test]
    fn test_grid_is_tagged_with_viewport_epoch() {
        let mut viewport = viewport(Complex::new(0.0, 0.0), 100);
        viewport.zoom(ZoomDirection::In);

        assert_eq!(generate_grid(&viewport).epoch(), viewport.epoch());
    }

    #[test]
    fn test_sample_outside_grid_is_none() {
        let grid = generate_grid(&viewport(Complex::new(0.0, 0.0), 100));

        assert_eq!(grid.sample(100, 0), None);
        assert_eq!(grid.sample(0, 100), None);
    }
}
