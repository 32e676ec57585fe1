use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMode;

/// Colour maps over normalised intensities in `[0, 255]`.
pub trait IntensityColourMap: ColourMap<f64> + Send + Sync {
    fn kind(&self) -> ColourMode;
}
