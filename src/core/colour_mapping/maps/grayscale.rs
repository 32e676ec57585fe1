use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::check_intensity;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::colour_mapping::map::IntensityColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Replicates the intensity into all three channels.
#[derive(Debug, Default)]
pub struct Grayscale;

impl ColourMap<f64> for Grayscale {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let intensity = check_intensity(intensity)?;

        Ok(Colour::grey(intensity as u8))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IntensityColourMap for Grayscale {
    fn kind(&self) -> ColourMode {
        ColourMode::Grayscale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::errors::ColourMapError;

    #[test]
    fn test_map_replicates_intensity() {
        assert_eq!(Grayscale.map(0.0).unwrap(), Colour::BLACK);
        assert_eq!(Grayscale.map(255.0).unwrap(), Colour::grey(255));
    }

    #[test]
    fn test_map_truncates_fractional_intensity() {
        assert_eq!(Grayscale.map(127.9).unwrap(), Colour::grey(127));
    }

    #[test]
    fn test_map_rejects_out_of_range_intensity() {
        let err = Grayscale
            .map(256.0)
            .expect_err("expected error for intensity above 255");

        assert!(matches!(
            err.downcast_ref::<ColourMapError>(),
            Some(ColourMapError::IntensityOutOfRange { .. })
        ));
    }
}
