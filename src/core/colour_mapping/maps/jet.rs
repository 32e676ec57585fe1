use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::check_intensity;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::colour_mapping::map::IntensityColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;

const LUT_SIZE: usize = 256;

/// Piecewise-linear channel ramps as `(position, value)` anchors.
type Ramp = &'static [(f64, f64)];

const RED: Ramp = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const GREEN: Ramp = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const BLUE: Ramp = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

fn sample_ramp(ramp: Ramp, x: f64) -> f64 {
    ramp.windows(2)
        .find(|pair| x <= pair[1].0)
        .map(|pair| {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            y0 + (x - x0) / (x1 - x0) * (y1 - y0)
        })
        .unwrap_or_else(|| ramp[ramp.len() - 1].1)
}

fn channel_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// The classic blue-cyan-yellow-red "jet" ramp, sampled into a 256 entry
/// lookup table.
#[derive(Debug)]
pub struct Jet {
    lut: [Colour; LUT_SIZE],
}

impl Default for Jet {
    fn default() -> Self {
        Self::new()
    }
}

impl Jet {
    #[must_use]
    pub fn new() -> Self {
        let mut lut = [Colour::BLACK; LUT_SIZE];

        for (i, entry) in lut.iter_mut().enumerate() {
            let x = i as f64 / (LUT_SIZE - 1) as f64;
            *entry = Colour {
                r: channel_to_byte(sample_ramp(RED, x)),
                g: channel_to_byte(sample_ramp(GREEN, x)),
                b: channel_to_byte(sample_ramp(BLUE, x)),
            };
        }

        Self { lut }
    }

    fn lookup(&self, fraction: f64) -> Colour {
        let index = ((fraction * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1);
        self.lut[index]
    }
}

impl ColourMap<f64> for Jet {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let intensity = check_intensity(intensity)?;

        Ok(self.lookup(intensity / 255.0))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IntensityColourMap for Jet {
    fn kind(&self) -> ColourMode {
        ColourMode::FalseColour
    }
}
