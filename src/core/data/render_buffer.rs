use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

fn resolution_to_buffer_size(resolution: usize) -> usize {
    resolution * resolution * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    PixelOutsideBounds {
        row: usize,
        column: usize,
        resolution: usize,
    },
}

impl fmt::Display for RenderBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "render buffer needs {} bytes but was given {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                row,
                column,
                resolution,
            } => {
                write!(
                    f,
                    "pixel at row:{}, column:{} outside of {}x{} render buffer",
                    row, column, resolution, resolution
                )
            }
        }
    }
}

impl Error for RenderBufferError {}

pub type RenderBufferData = Vec<u8>;

/// Square RGB image derived from the escape buffer. Recomputed on every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    resolution: usize,
    buffer: RenderBufferData,
}

impl RenderBuffer {
    /// An all-black buffer.
    #[must_use]
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: usize,
        buffer: RenderBufferData,
    ) -> Result<Self, RenderBufferError> {
        let expected_size = resolution_to_buffer_size(resolution);

        if expected_size != buffer.len() {
            return Err(RenderBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &RenderBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, row: usize, column: usize) -> Result<Colour, RenderBufferError> {
        if row >= self.resolution || column >= self.resolution {
            return Err(RenderBufferError::PixelOutsideBounds {
                row,
                column,
                resolution: self.resolution,
            });
        }

        let index = (row * self.resolution + column) * 3;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_black_buffer() {
        let buffer = RenderBuffer::new(10);

        assert_eq!(buffer.resolution(), 10);
        assert_eq!(buffer.buffer_size(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0)
            0, 255, 0, // (0,1)
            0, 0, 255, // (1,0)
            9, 9, 9, // (1,1)
        ];

        let buffer = RenderBuffer::from_data(2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(0, 1), Ok(Colour { r: 0, g: 255, b: 0 }));
        assert_eq!(buffer.pixel(1, 0), Ok(Colour { r: 0, g: 0, b: 255 }));
        assert_eq!(buffer.pixel(1, 1), Ok(Colour::grey(9)));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = RenderBuffer::from_data(2, vec![0; 11]);

        assert_eq!(
            result,
            Err(RenderBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 11
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let buffer = RenderBuffer::new(3);

        assert_eq!(
            buffer.pixel(3, 0),
            Err(RenderBufferError::PixelOutsideBounds {
                row: 3,
                column: 0,
                resolution: 3
            })
        );
    }
}
