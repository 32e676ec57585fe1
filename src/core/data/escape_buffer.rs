/// Per-sample escape metrics for one epoch.
///
/// `0.0` means the sample has not escaped yet. A non-zero entry is written
/// once by the step kernel and never touched again until the buffer is
/// replaced on the next epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeBuffer {
    resolution: usize,
    values: Vec<f64>,
}

pub const NOT_ESCAPED: f64 = 0.0;
pub const MAX_INTENSITY: f64 = 255.0;

impl EscapeBuffer {
    #[must_use]
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            values: vec![NOT_ESCAPED; resolution * resolution],
        }
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[must_use]
    pub fn escaped_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != NOT_ESCAPED).count()
    }

    /// Largest recorded metric, ignoring NaN.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(NOT_ESCAPED, f64::max)
    }

    /// True when there is nothing to normalise against: nothing has escaped
    /// yet, or the maximum is not a positive finite number.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let max = self.max();

        !(max.is_finite() && max > 0.0)
    }

    /// Scales every entry to `[0, 255]` against the buffer maximum.
    ///
    /// A degenerate buffer yields all-zero intensities, which render as black.
    #[must_use]
    pub fn intensities(&self) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![0.0; self.values.len()];
        }

        let max = self.max();

        self.values
            .iter()
            .map(|&value| {
                let intensity = MAX_INTENSITY * value / max;
                if intensity.is_nan() {
                    0.0
                } else {
                    intensity.clamp(0.0, MAX_INTENSITY)
                }
            })
            .collect()
    }

    /// Intensities truncated to bytes, as written to snapshot images.
    #[must_use]
    pub fn intensity_bytes(&self) -> Vec<u8> {
        self.intensities().into_iter().map(|i| i as u8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(values: &[f64]) -> EscapeBuffer {
        let mut buffer = EscapeBuffer::new(2);
        buffer.values_mut().copy_from_slice(values);
        buffer
    }

    #[test]
    fn test_new_buffer_is_all_not_escaped() {
        let buffer = EscapeBuffer::new(100);

        assert_eq!(buffer.values().len(), 10_000);
        assert_eq!(buffer.escaped_count(), 0);
    }

    #[test]
    fn test_all_zero_buffer_normalises_to_black() {
        let intensities = EscapeBuffer::new(10).intensities();

        assert!(intensities.iter().all(|&i| i == 0.0));
    }

    #[test]
    fn test_intensities_scale_against_max() {
        let buffer = buffer_with(&[0.0, 5.0, 10.0, 2.5]);

        assert_eq!(buffer.intensities(), vec![0.0, 127.5, 255.0, 63.75]);
        assert_eq!(buffer.intensity_bytes(), vec![0, 127, 255, 63]);
    }

    #[test]
    fn test_infinite_max_is_treated_as_degenerate() {
        let buffer = buffer_with(&[f64::INFINITY, 1.0, 0.0, 0.0]);

        assert!(buffer.intensities().iter().all(|&i| i == 0.0));
    }

    #[test]
    fn test_nan_entries_never_leak_into_intensities() {
        let buffer = buffer_with(&[f64::NAN, 4.0, 0.0, 2.0]);
        let intensities = buffer.intensities();

        assert_eq!(buffer.max(), 4.0);
        assert_eq!(intensities, vec![0.0, 255.0, 0.0, 127.5]);
    }

    #[test]
    fn test_is_degenerate() {
        assert!(EscapeBuffer::new(2).is_degenerate());
        assert!(buffer_with(&[f64::INFINITY, 0.0, 0.0, 0.0]).is_degenerate());
        assert!(!buffer_with(&[0.0, 0.5, 0.0, 0.0]).is_degenerate());
    }

    #[test]
    fn test_escaped_count() {
        let buffer = buffer_with(&[0.0, 1.0, 0.0, 3.0]);

        assert_eq!(buffer.escaped_count(), 2);
    }
}
