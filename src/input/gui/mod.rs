//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the control panel.

mod app;
pub mod explorer_input;
mod panel;

pub use app::run_gui;
