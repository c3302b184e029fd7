//! Screen stack: the game screen with an optional pause screen on top.

use derive_getters::Getters;
use tracing::{debug, instrument};

use super::alignment_check::AlignmentCheckScreen;
use crate::input::UserInput;
use crate::screen::{Host, Printer, Screen, ScreenTransition, TicTacToeScreen};

/// Routes lifecycle calls and input to whichever screen is on top.
#[derive(Debug, Clone, Getters)]
pub struct ScreenStack {
    game: TicTacToeScreen,
    paused: Option<AlignmentCheckScreen>,
}

impl ScreenStack {
    /// Creates a stack with `game` at the bottom.
    pub fn new(game: TicTacToeScreen) -> Self {
        Self { game, paused: None }
    }

    /// True while the pause screen is shown.
    pub fn is_paused(&self) -> bool {
        self.paused.is_some()
    }

    /// Enters the game screen.
    #[instrument(skip_all)]
    pub fn enter(&mut self, host: &mut dyn Host, printer: &mut dyn Printer) {
        self.game.on_enter(host, printer);
    }

    /// Delivers one tick of input and applies the resulting transition.
    #[instrument(skip(self, host, printer))]
    pub fn dispatch(
        &mut self,
        input: UserInput,
        host: &mut dyn Host,
        printer: &mut dyn Printer,
    ) -> ScreenTransition {
        let transition = match self.paused.as_mut() {
            Some(check) => check.on_input(input, printer),
            None => self.game.on_input(input, printer),
        };

        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::PauseToAlignmentCheck => {
                if self.paused.is_none() {
                    debug!("Pausing game for alignment check");
                    self.game.on_suspend(host);
                    let mut check = AlignmentCheckScreen::new();
                    check.on_enter(host, printer);
                    self.paused = Some(check);
                }
            }
            ScreenTransition::ResumePrevious => {
                if self.paused.take().is_some() {
                    debug!("Resuming game");
                    self.game.on_resume(host, printer);
                }
            }
        }
        transition
    }
}
