//! Keypad input: button masks, terminal key mapping, sequence detection.

mod buttons;
mod keymap;
mod sequence;

pub use buttons::{Button, Buttons, UserInput};
pub use keymap::{buttons_for_key, should_quit};
pub use sequence::{ALIGNMENT_CHECK_SEQUENCE, SequenceMatcher};
