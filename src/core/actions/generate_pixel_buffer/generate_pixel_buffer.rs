use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::render_buffer::{RenderBuffer, RenderBufferData, RenderBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    RenderBuffer(RenderBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::RenderBuffer(err) => write!(f, "render buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::RenderBuffer(err) => Some(err),
        }
    }
}

impl From<RenderBufferError> for GeneratePixelBufferError {
    fn from(err: RenderBufferError) -> Self {
        Self::RenderBuffer(err)
    }
}

/// Maps every input value through `mapper` into a square RGB buffer.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    resolution: usize,
) -> Result<RenderBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T> + ?Sized,
{
    let mut buffer: RenderBufferData = Vec::with_capacity(input.len() * 3);

    for value in input {
        let Colour { r, g, b } = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(RenderBuffer::from_data(resolution, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, Box<dyn Error>> {
            Ok(Colour::grey(value))
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, Box<dyn Error>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_render_buffer_in_sample_order() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, 2).unwrap();

        assert_eq!(results.buffer(), &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
        assert_eq!(results.resolution(), 2);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let results = generate_pixel_buffer(input, &StubColourMapFailure {}, 2);

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_input_resolution_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, 2);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::RenderBuffer(
                RenderBufferError::BoundsMismatch {
                    expected_size: 12,
                    buffer_size: 18
                }
            ))
        ));
    }

    #[test]
    fn test_error_displays_colour_map_error() {
        let err = GeneratePixelBufferError::ColourMap("StubColourMapError".into());

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
