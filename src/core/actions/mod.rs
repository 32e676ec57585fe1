pub mod generate_grid;
pub mod generate_pixel_buffer;
pub mod iterate;
