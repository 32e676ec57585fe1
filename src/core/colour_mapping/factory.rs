use crate::core::colour_mapping::{
    kinds::ColourMode,
    map::IntensityColourMap,
    maps::{grayscale::Grayscale, jet::Jet},
};

#[must_use]
pub fn colour_map_factory(mode: ColourMode) -> Box<dyn IntensityColourMap> {
    match mode {
        ColourMode::Grayscale => Box::new(Grayscale),
        ColourMode::FalseColour => Box::new(Jet::new()),
    }
}
