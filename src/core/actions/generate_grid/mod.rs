pub mod generate_grid;

pub use generate_grid::generate_grid;
