use crate::core::data::complex::Complex;
use crate::core::data::viewport::Epoch;

/// Square, row-major array of sample coordinates for one viewport epoch.
///
/// Row `j`, column `i` lives at index `j * resolution + i`. Columns advance
/// along the real axis and rows along the imaginary axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    epoch: Epoch,
    resolution: usize,
    samples: Vec<Complex>,
}

impl SampleGrid {
    pub(crate) fn from_samples(epoch: Epoch, resolution: usize, samples: Vec<Complex>) -> Self {
        debug_assert_eq!(samples.len(), resolution * resolution);

        Self {
            epoch,
            resolution,
            samples,
        }
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    #[must_use]
    pub fn sample(&self, row: usize, column: usize) -> Option<Complex> {
        if row >= self.resolution || column >= self.resolution {
            return None;
        }

        self.samples.get(row * self.resolution + column).copied()
    }
}
