pub mod grayscale;
pub mod jet;
