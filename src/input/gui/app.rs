//! Main GUI application loop.

use std::error::Error;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::controllers::explorer::{ExplorerController, FrameOutcome};
use crate::core::actions::iterate::{
    BackendKind, RayonBackend, SerialBackend, StepBackend, probe_backend,
};
use crate::core::config::ExplorerConfig;
use crate::core::engine::FractalEngine;
use crate::core::fractals::FractalKind;
use crate::input::gui::explorer_input::ExplorerInput;
use crate::input::gui::panel::{PanelView, draw_panel};
use crate::presenters::file::PngSnapshotExporter;
use crate::presenters::pixels::PixelsPresenter;

/// Runs the interactive explorer until the window is closed.
pub fn run_gui(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let backend = probe_backend();
    info!("using {} step backend", backend);

    match backend {
        BackendKind::Rayon => run_with(RayonBackend, config),
        BackendKind::Serial => run_with(SerialBackend, config),
    }
}

fn run_with<B: StepBackend>(backend: B, config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let backend_kind = backend.kind();
    let viewport = config.initial_viewport(FractalKind::default(), backend_kind)?;
    let engine = FractalEngine::new(
        backend,
        viewport,
        config.batch_steps,
        config.escape_threshold,
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Leak the window to get a 'static reference for pixels
    let window_size = f64::from(config.window_size);
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Escape Explorer")
            .with_inner_size(LogicalSize::new(window_size, window_size))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window)?;
    let exporter = PngSnapshotExporter::new(config.snapshot_dir.clone());
    let mut controller = ExplorerController::new(engine, presenter, exporter);
    let mut input = ExplorerInput::new();

    let egui_ctx = Context::default();
    let mut egui_state = EguiWinitState::new(
        egui_ctx.clone(),
        egui_ctx.viewport_id(),
        &event_loop,
        Some(window.scale_factor() as f32),
        None, // max_texture_side, use default
    );

    info!("explorer window open, snapshots go to {}", config.snapshot_dir.display());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => {
            let response = egui_state.on_window_event(window, &event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if controller.run_frame(input.take_commands()) == FrameOutcome::Quit {
                        elwt.exit();
                        return;
                    }

                    let engine = controller.engine();
                    let viewport = engine.viewport();
                    let presenter = controller.sink();
                    window.set_title(&engine.describe());

                    let view = PanelView {
                        backend: backend_kind,
                        fractal_kind: viewport.fractal_kind(),
                        colour_mode: viewport.colour_mode(),
                        description: presenter.last_description(),
                        status: presenter.last_status(),
                        error_message: presenter.last_error_message(),
                        render_duration: presenter.last_render_duration(),
                    };

                    let raw_input = egui_state.take_egui_input(window);
                    let mut panel_commands = Vec::new();
                    let mut egui_output =
                        egui_ctx.run(raw_input, |ctx| draw_panel(ctx, &view, &mut panel_commands));

                    egui_state.handle_platform_output(
                        window,
                        std::mem::take(&mut egui_output.platform_output),
                    );
                    panel_commands.into_iter().for_each(|command| input.push(command));

                    if let Err(err) = controller.sink_mut().render(egui_output, &egui_ctx) {
                        error!("render error: {}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = controller.sink_mut().resize(size.width, size.height) {
                        error!("resize error: {}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    egui_ctx.set_pixels_per_point(scale_factor as f32);
                }
                other => {
                    if !response.consumed {
                        input.handle_window_event(&other);
                    }
                }
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
