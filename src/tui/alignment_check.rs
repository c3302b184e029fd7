//! Placeholder alignment-check screen shown when the hidden sequence is
//! entered.

use tracing::{info, instrument};

use crate::config::{PRINTING_COLUMNS, PRINTING_ROWS};
use crate::input::{Buttons, UserInput};
use crate::screen::{CameraEffect, Host, Printer, Screen, ScreenTransition};

const FONT: &str = "Default";

/// Alignment-check screen: a full-grid frame with centre marks.
///
/// Pressing A, B or START returns to the screen underneath.
#[derive(Debug, Clone, Default)]
pub struct AlignmentCheckScreen;

impl AlignmentCheckScreen {
    /// Creates the screen.
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all)]
    fn print(&self, printer: &mut dyn Printer) {
        let width = PRINTING_COLUMNS as usize;
        let edge = format!("+{}+", "-".repeat(width - 2));
        let side = format!("|{}|", " ".repeat(width - 2));

        printer.clear();
        printer.text(&edge, 0, 0, FONT);
        for y in 1..PRINTING_ROWS - 1 {
            printer.text(&side, 0, y, FONT);
        }
        printer.text(&edge, 0, PRINTING_ROWS - 1, FONT);

        let mid_x = PRINTING_COLUMNS / 2;
        let mid_y = PRINTING_ROWS / 2;
        printer.text("+", mid_x, mid_y, FONT);
        printer.text("ALIGNMENT CHECK", mid_x - 7, 2, FONT);
        printer.text("A/B/START: back", mid_x - 7, PRINTING_ROWS - 3, FONT);
    }
}

impl Screen for AlignmentCheckScreen {
    #[instrument(skip_all)]
    fn on_enter(&mut self, host: &mut dyn Host, printer: &mut dyn Printer) {
        info!("Entering alignment check");
        self.print(printer);
        host.enable_keypad();
        host.start_effect(CameraEffect::FadeTo { delay_ms: 0 });
    }

    #[instrument(skip_all)]
    fn on_suspend(&mut self, _host: &mut dyn Host) {}

    #[instrument(skip_all)]
    fn on_resume(&mut self, _host: &mut dyn Host, printer: &mut dyn Printer) {
        self.print(printer);
    }

    #[instrument(skip(self, _printer))]
    fn on_input(&mut self, input: UserInput, _printer: &mut dyn Printer) -> ScreenTransition {
        if input.pressed.intersects(Buttons::A | Buttons::B | Buttons::STA) {
            info!("Leaving alignment check");
            ScreenTransition::ResumePrevious
        } else {
            ScreenTransition::Stay
        }
    }
}
