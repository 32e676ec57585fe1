pub mod step_backend;
