use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ColourMapError {
    IntensityOutOfRange { intensity: f64 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntensityOutOfRange { intensity } => {
                write!(f, "intensity {} is outside [0, 255]", intensity)
            }
        }
    }
}

impl Error for ColourMapError {}

/// Rejects anything that did not come out of escape-buffer normalisation.
pub(crate) fn check_intensity(intensity: f64) -> Result<f64, ColourMapError> {
    if (0.0..=255.0).contains(&intensity) {
        Ok(intensity)
    } else {
        Err(ColourMapError::IntensityOutOfRange { intensity })
    }
}
