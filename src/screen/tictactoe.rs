//! Tic-tac-toe game screen.
//!
//! Each input tick goes first to the [`SequenceMatcher`] and then to the
//! [`BoardEngine`]. The screen reprints itself only when the board or the
//! cursor changed during the tick.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use super::screen::{CameraEffect, Host, Printer, Screen, ScreenTransition};
use super::text::print_board;
use crate::config::{BoardLayout, ScreenConfig};
use crate::games::tictactoe::{BoardEngine, Direction};
use crate::input::{Buttons, SequenceMatcher, UserInput};

/// The tic-tac-toe screen.
#[derive(Debug, Clone, Getters)]
pub struct TicTacToeScreen {
    engine: BoardEngine,
    matcher: SequenceMatcher,
    layout: BoardLayout,
    stage: String,
    fade_delay_ms: u32,
}

impl TicTacToeScreen {
    /// Creates the screen from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &ScreenConfig) -> Self {
        Self {
            engine: BoardEngine::new(),
            matcher: SequenceMatcher::new(config.sequence()),
            layout: config.layout().clone(),
            stage: config.stage().clone(),
            fade_delay_ms: *config.fade_delay_ms(),
        }
    }

    #[instrument(skip_all)]
    fn print(&self, printer: &mut dyn Printer) {
        print_board(printer, &self.engine, &self.layout);
    }

    fn fade_in(&self, host: &mut dyn Host) {
        host.start_effect(CameraEffect::Hide);
        host.start_effect(CameraEffect::FadeTo {
            delay_ms: self.fade_delay_ms,
        });
    }

    /// Applies D-pad and action buttons to the board. Returns true if
    /// anything changed.
    fn apply_board_input(&mut self, pressed: Buttons) -> bool {
        let mut changed = false;

        if pressed.intersects(Buttons::LL) {
            self.engine.move_cursor(Direction::Left);
            changed = true;
        } else if pressed.intersects(Buttons::LR) {
            self.engine.move_cursor(Direction::Right);
            changed = true;
        }
        if pressed.intersects(Buttons::LU) {
            self.engine.move_cursor(Direction::Up);
            changed = true;
        } else if pressed.intersects(Buttons::LD) {
            self.engine.move_cursor(Direction::Down);
            changed = true;
        }

        if pressed.intersects(Buttons::A) {
            changed |= self.engine.place_at_cursor();
        }
        if pressed.intersects(Buttons::B) {
            changed |= self.engine.reset_request();
        }
        changed
    }
}

impl Default for TicTacToeScreen {
    fn default() -> Self {
        Self::new(&ScreenConfig::default())
    }
}

impl Screen for TicTacToeScreen {
    #[instrument(skip_all)]
    fn on_enter(&mut self, host: &mut dyn Host, printer: &mut dyn Printer) {
        info!(stage = %self.stage, "Entering tic-tac-toe screen");
        self.matcher.reset_history();
        host.load_stage(&self.stage);
        host.start_clocks();
        self.engine.reset();
        self.print(printer);
        host.enable_keypad();
        self.fade_in(host);
    }

    #[instrument(skip_all)]
    fn on_suspend(&mut self, host: &mut dyn Host) {
        debug!("Suspending tic-tac-toe screen");
        if !host.is_in_tool_state() {
            host.start_effect(CameraEffect::FadeOut {
                delay_ms: self.fade_delay_ms,
            });
        }
    }

    #[instrument(skip_all)]
    fn on_resume(&mut self, host: &mut dyn Host, printer: &mut dyn Printer) {
        debug!("Resuming tic-tac-toe screen");
        self.matcher.reset_history();
        self.print(printer);
        host.enable_keypad();
        if !host.is_exiting_tool_state() {
            self.fade_in(host);
        }
    }

    #[instrument(skip(self, printer), fields(pressed = %input.pressed))]
    fn on_input(&mut self, input: UserInput, printer: &mut dyn Printer) -> ScreenTransition {
        let mut transition = ScreenTransition::Stay;
        if input.has_button_press() {
            self.matcher.record(input.pressed);
            if self.matcher.matches() {
                info!("Alignment check sequence entered");
                transition = ScreenTransition::PauseToAlignmentCheck;
            }
        }

        if self.apply_board_input(input.pressed) {
            self.print(printer);
        }
        transition
    }
}
