//! Screen lifecycle trait and the host collaborators screens call into.

use derive_more::Display;

use crate::input::UserInput;

/// Camera effect requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CameraEffect {
    /// Blank the display immediately.
    Hide,
    /// Fade up to full brightness.
    #[display("FadeTo({delay_ms}ms)")]
    FadeTo {
        /// Delay between fading steps.
        delay_ms: u32,
    },
    /// Fade down to black.
    #[display("FadeOut({delay_ms}ms)")]
    FadeOut {
        /// Delay between fading steps.
        delay_ms: u32,
    },
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::on_input`] to drive the host's
/// screen stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Pause the current screen and show the alignment check.
    PauseToAlignmentCheck,
    /// Leave a pause screen and resume the screen below it.
    ResumePrevious,
}

/// Engine services a screen invokes during its lifecycle.
pub trait Host {
    /// Loads the named stage.
    fn load_stage(&mut self, stage: &str);

    /// Starts the clocks that drive stage animations.
    fn start_clocks(&mut self);

    /// Enables keypad polling.
    fn enable_keypad(&mut self);

    /// Starts a camera effect.
    fn start_effect(&mut self, effect: CameraEffect);

    /// True while a developer tool screen is open.
    fn is_in_tool_state(&self) -> bool;

    /// True while a developer tool screen is closing.
    fn is_exiting_tool_state(&self) -> bool;
}

/// Fixed-grid text output.
pub trait Printer {
    /// Clears every printed character.
    fn clear(&mut self);

    /// Prints `text` with its first character at column `x`, row `y`.
    fn text(&mut self, text: &str, x: u16, y: u16, font: &str);
}

/// Trait implemented by each screen the host can show.
///
/// The host calls [`Screen::on_enter`] once when the screen becomes
/// active, [`Screen::on_suspend`]/[`Screen::on_resume`] around a pause,
/// and [`Screen::on_input`] once per tick while it is on top.
pub trait Screen {
    /// Called when the screen becomes active.
    fn on_enter(&mut self, host: &mut dyn Host, printer: &mut dyn Printer);

    /// Called before another screen is pushed on top.
    fn on_suspend(&mut self, host: &mut dyn Host);

    /// Called when the screen on top is popped.
    fn on_resume(&mut self, host: &mut dyn Host, printer: &mut dyn Printer);

    /// Handles one tick of input and returns the resulting transition.
    fn on_input(&mut self, input: UserInput, printer: &mut dyn Printer) -> ScreenTransition;
}
