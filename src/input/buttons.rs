//! Keypad button masks.

use std::ops::{BitAnd, BitOr, Not};

use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single keypad button.
///
/// Names follow the console's key labels: `L*`/`R*` are the left and right
/// D-pads, `LT`/`RT` the shoulder triggers, `STA`/`SEL` start and select.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Button {
    /// Low-power indicator bit.
    Pwr,
    /// Signature bit.
    Sgn,
    /// Primary action.
    A,
    /// Secondary action.
    B,
    /// Right trigger.
    Rt,
    /// Left trigger.
    Lt,
    /// Right pad up.
    Ru,
    /// Right pad right.
    Rr,
    /// Left pad right.
    Lr,
    /// Left pad left.
    Ll,
    /// Left pad down.
    Ld,
    /// Left pad up.
    Lu,
    /// Start.
    Sta,
    /// Select.
    Sel,
    /// Right pad left.
    Rl,
    /// Right pad down.
    Rd,
}

impl Button {
    /// The bit this button occupies in a [`Buttons`] mask.
    pub fn mask(self) -> Buttons {
        Buttons(1 << self as u16)
    }
}

impl TryFrom<String> for Button {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        button.mask()
    }
}

/// Bitmask of keypad buttons, as delivered by the input source each tick.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, From, Serialize, Deserialize,
)]
#[display("{:#06x}", _0)]
pub struct Buttons(u16);

impl Buttons {
    /// No buttons.
    pub const NONE: Buttons = Buttons(0x0000);
    /// Power bit; never counts as a button press for sequence detection.
    pub const PWR: Buttons = Buttons(0x0001);
    /// Primary action button.
    pub const A: Buttons = Buttons(0x0004);
    /// Secondary action button.
    pub const B: Buttons = Buttons(0x0008);
    /// Left pad right.
    pub const LR: Buttons = Buttons(0x0100);
    /// Left pad left.
    pub const LL: Buttons = Buttons(0x0200);
    /// Left pad down.
    pub const LD: Buttons = Buttons(0x0400);
    /// Left pad up.
    pub const LU: Buttons = Buttons(0x0800);
    /// Start.
    pub const STA: Buttons = Buttons(0x1000);

    /// Raw bit pattern.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// True if any bit of `other` is set in `self`.
    pub fn intersects(self, other: Buttons) -> bool {
        self.0 & other.0 != 0
    }

    /// True if no bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitAnd for Buttons {
    type Output = Buttons;

    fn bitand(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 & rhs.0)
    }
}

impl Not for Buttons {
    type Output = Buttons;

    fn not(self) -> Buttons {
        Buttons(!self.0)
    }
}

/// Input delivered to a screen for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct UserInput {
    /// Buttons that went down this tick.
    pub pressed: Buttons,
}

impl UserInput {
    /// True when something other than the power bit was pressed.
    #[instrument]
    pub fn has_button_press(self) -> bool {
        !(self.pressed & !Buttons::PWR).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_button_bits_match_named_masks() {
        assert_eq!(Button::Pwr.mask(), Buttons::PWR);
        assert_eq!(Button::A.mask(), Buttons::A);
        assert_eq!(Button::B.mask(), Buttons::B);
        assert_eq!(Button::Lr.mask(), Buttons::LR);
        assert_eq!(Button::Ll.mask(), Buttons::LL);
        assert_eq!(Button::Ld.mask(), Buttons::LD);
        assert_eq!(Button::Lu.mask(), Buttons::LU);
        assert_eq!(Button::Sta.mask(), Buttons::STA);
        assert_eq!(Button::Rd.mask().bits(), 0x8000);
    }

    #[test]
    fn test_every_button_has_its_own_bit() {
        let all = Button::iter().fold(Buttons::NONE, |acc, b| acc | b.mask());
        assert_eq!(all.bits(), 0xffff);
    }

    #[test]
    fn test_parse_button_names() {
        assert_eq!(Button::from_str("LU").ok(), Some(Button::Lu));
        assert_eq!(Button::from_str("a").ok(), Some(Button::A));
        assert!(Button::from_str("K_LU").is_err());
        assert_eq!(Button::Sta.to_string(), "STA");
    }

    #[test]
    fn test_power_only_is_not_a_press() {
        assert!(!UserInput::new(Buttons::PWR).has_button_press());
        assert!(!UserInput::new(Buttons::NONE).has_button_press());
        assert!(UserInput::new(Buttons::PWR | Buttons::A).has_button_press());
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!((Buttons::LU | Buttons::A).to_string(), "0x0804");
    }
}
