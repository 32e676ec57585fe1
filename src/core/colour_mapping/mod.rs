pub mod errors;
pub mod factory;
pub mod kinds;
pub mod map;
pub mod maps;

pub use factory::colour_map_factory;
pub use kinds::ColourMode;
