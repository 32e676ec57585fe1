use std::time::Duration;

use crate::controllers::explorer::ExplorerCommand;
use crate::core::actions::iterate::BackendKind;
use crate::core::colour_mapping::ColourMode;
use crate::core::fractals::FractalKind;
use crate::core::navigation::NavigationCommand;

/// What the side panel shows for one frame.
pub struct PanelView<'a> {
    pub backend: BackendKind,
    pub fractal_kind: FractalKind,
    pub colour_mode: ColourMode,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub error_message: Option<&'a str>,
    pub render_duration: Option<Duration>,
}

/// Draws the control panel and queues whatever the user clicked.
pub fn draw_panel(ctx: &egui::Context, view: &PanelView<'_>, commands: &mut Vec<ExplorerCommand>) {
    egui::Window::new("Explorer")
        .default_pos([10.0, 10.0])
        .default_size([280.0, 220.0])
        .show(ctx, |ui| {
            let mut kind = view.fractal_kind;
            ui.horizontal(|ui| {
                ui.label("Fractal:");
                egui::ComboBox::from_id_source("fractal_kind")
                    .selected_text(kind.display_name())
                    .show_ui(ui, |ui| {
                        for &option in FractalKind::ALL {
                            ui.selectable_value(&mut kind, option, option.display_name());
                        }
                    });
            });
            if kind != view.fractal_kind {
                commands.push(NavigationCommand::SetFractalKind(kind).into());
            }

            let mut colour_mode = view.colour_mode;
            ui.horizontal(|ui| {
                ui.label("Colour:");
                egui::ComboBox::from_id_source("colour_mode")
                    .selected_text(colour_mode.display_name())
                    .show_ui(ui, |ui| {
                        for &option in ColourMode::ALL {
                            ui.selectable_value(&mut colour_mode, option, option.display_name());
                        }
                    });
            });
            if colour_mode != view.colour_mode {
                commands.push(NavigationCommand::ToggleColourMode.into());
            }

            ui.horizontal(|ui| {
                if ui.button("Reset view").clicked() {
                    commands.push(NavigationCommand::ResetView.into());
                }
                if ui.button("Save snapshot").clicked() {
                    commands.push(ExplorerCommand::Export);
                }
            });

            ui.separator();
            if let Some(description) = view.description {
                ui.label(description);
            }
            ui.label(format!("Backend: {}", view.backend));
            if let Some(render_duration) = view.render_duration {
                ui.label(format!("Last frame: {} ms", render_duration.as_millis()));
            }
            if let Some(status) = view.status {
                ui.label(status);
            }
            if let Some(message) = view.error_message {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });
}
