pub mod generate_pixel_buffer;
pub mod ports;

pub use generate_pixel_buffer::{GeneratePixelBufferError, generate_pixel_buffer};
