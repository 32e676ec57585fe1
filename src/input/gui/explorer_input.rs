//! Translates winit events into explorer commands.

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::controllers::explorer::ExplorerCommand;
use crate::core::navigation::{NavigationCommand, PanGesture, SeedAxis, Sign, ZoomDirection};

const RESIZE_STEP: i32 = 100;
const DEPTH_STEP: i64 = 20;

/// Maps a pressed key to its command, if it has one.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<ExplorerCommand> {
    let navigation = match key {
        Key::Named(NamedKey::ArrowLeft) => NavigationCommand::Resize(-RESIZE_STEP),
        Key::Named(NamedKey::ArrowRight) => NavigationCommand::Resize(RESIZE_STEP),
        Key::Named(NamedKey::ArrowDown) => NavigationCommand::AdjustDepth(-DEPTH_STEP),
        Key::Named(NamedKey::ArrowUp) => NavigationCommand::AdjustDepth(DEPTH_STEP),
        Key::Named(NamedKey::Escape) => return Some(ExplorerCommand::Quit),
        Key::Character(text) => match text.to_lowercase().as_str() {
            "c" => NavigationCommand::ToggleColourMode,
            "r" => NavigationCommand::ResetView,
            "s" => return Some(ExplorerCommand::Export),
            "h" => seed_nudge(SeedAxis::Real, Sign::Negative),
            "l" => seed_nudge(SeedAxis::Real, Sign::Positive),
            "j" => seed_nudge(SeedAxis::Imaginary, Sign::Negative),
            "k" => seed_nudge(SeedAxis::Imaginary, Sign::Positive),
            _ => return None,
        },
        _ => return None,
    };

    Some(ExplorerCommand::Navigate(navigation))
}

fn seed_nudge(axis: SeedAxis, sign: Sign) -> NavigationCommand {
    NavigationCommand::NudgeSeed { axis, sign }
}

fn wheel_notches(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

/// Collects the commands for the next frame.
#[derive(Debug, Default)]
pub struct ExplorerInput {
    gesture: PanGesture,
    pending: Vec<ExplorerCommand>,
}

impl ExplorerInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: ExplorerCommand) {
        self.pending.push(command);
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if let Some(command) = command_for_key(&event.logical_key) {
                    self.push(command);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(direction) = ZoomDirection::from_wheel(wheel_notches(delta)) {
                    self.push(NavigationCommand::Zoom(direction).into());
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.gesture.press(),
                ElementState::Released => self.gesture.release(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.gesture.motion(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => self.gesture.release(),
            _ => {}
        }
    }

    /// Drains everything queued since the last frame, ending with this
    /// frame's pan while the button is held.
    pub fn take_commands(&mut self) -> Vec<ExplorerCommand> {
        let mut commands = std::mem::take(&mut self.pending);

        if let Some((dx, dy)) = self.gesture.take_frame_delta() {
            commands.push(NavigationCommand::Pan { dx, dy }.into());
        }

        commands
    }
}
