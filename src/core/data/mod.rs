pub mod colour;
pub mod complex;
pub mod escape_buffer;
pub mod render_buffer;
pub mod sample_grid;
pub mod snapshot;
pub mod viewport;
