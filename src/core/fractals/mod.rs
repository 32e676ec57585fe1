pub mod fractal_kinds;

pub use fractal_kinds::FractalKind;
