pub mod commands;
pub mod drag;

pub use commands::{NavigationCommand, SeedAxis, Sign, ZoomDirection};
pub use drag::PanGesture;
