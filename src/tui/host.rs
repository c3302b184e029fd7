//! Terminal stand-in for the engine services a screen calls.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::screen::{CameraEffect, Host};

/// Display brightness after the most recent camera effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brightness {
    /// Nothing is shown.
    #[default]
    Hidden,
    /// The canvas is shown.
    Visible,
}

/// Whether a developer tool screen is open over the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolState {
    /// No tool open.
    #[default]
    Closed,
    /// A tool is open.
    Open,
    /// A tool is closing.
    Exiting,
}

/// Host services for the terminal.
///
/// Fades complete instantly: fading in shows the canvas, fading out or
/// hiding blanks it.
#[derive(Debug, Clone, Default, Getters)]
pub struct TerminalHost {
    stage: Option<String>,
    clocks_running: bool,
    keypad_enabled: bool,
    brightness: Brightness,
    tool_state: ToolState,
    effects: Vec<CameraEffect>,
    #[getter(skip)]
    changed: bool,
}

impl TerminalHost {
    /// Creates a host with the keypad disabled and the display hidden.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the developer tool state reported to screens.
    #[instrument(skip(self))]
    pub fn set_tool_state(&mut self, tool_state: ToolState) {
        self.tool_state = tool_state;
    }

    /// Returns whether brightness changed since the last call.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Host for TerminalHost {
    fn load_stage(&mut self, stage: &str) {
        info!(stage, "Loading stage");
        self.stage = Some(stage.to_string());
    }

    fn start_clocks(&mut self) {
        debug!("Starting clocks");
        self.clocks_running = true;
    }

    fn enable_keypad(&mut self) {
        debug!("Keypad enabled");
        self.keypad_enabled = true;
    }

    fn start_effect(&mut self, effect: CameraEffect) {
        debug!(effect = %effect, "Camera effect");
        let brightness = match effect {
            CameraEffect::FadeTo { .. } => Brightness::Visible,
            CameraEffect::Hide | CameraEffect::FadeOut { .. } => Brightness::Hidden,
        };
        self.changed |= brightness != self.brightness;
        self.brightness = brightness;
        self.effects.push(effect);
    }

    fn is_in_tool_state(&self) -> bool {
        self.tool_state == ToolState::Open
    }

    fn is_exiting_tool_state(&self) -> bool {
        self.tool_state == ToolState::Exiting
    }
}
