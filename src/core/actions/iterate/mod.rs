pub mod iteration_state;
pub mod kernel;
pub mod ports;
pub mod probe;
pub mod step_parallel_rayon;
pub mod step_serial;

pub use iteration_state::IterationState;
pub use ports::step_backend::{MapConstant, StepBackend};
pub use probe::{BackendKind, probe_backend};
pub use step_parallel_rayon::RayonBackend;
pub use step_serial::SerialBackend;
