//! Screen configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::input::{ALIGNMENT_CHECK_SEQUENCE, Button, Buttons};

/// Width of the text grid in characters.
pub const PRINTING_COLUMNS: u16 = 48;
/// Height of the text grid in characters.
pub const PRINTING_ROWS: u16 = 28;

/// Width of a printed board row.
const ROW_WIDTH: u16 = 7;

/// Where the board and status line are printed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Left column of every printed line.
    x: u16,
    /// Row of the status line.
    status_y: u16,
    /// Row of the first board row.
    first_row_y: u16,
    /// Rows between consecutive board rows.
    row_spacing: u16,
    /// Rows between a board row and the separator below it.
    separator_offset: u16,
    /// Font passed to the printer.
    font: String,
}

impl BoardLayout {
    /// Printed row of board row `row`.
    pub fn row_y(&self, row: usize) -> u16 {
        self.first_row_y
            .saturating_add(self.row_spacing.saturating_mul(row as u16))
    }

    /// Printed row of the separator below board row `row`.
    pub fn separator_y(&self, row: usize) -> u16 {
        self.row_y(row).saturating_add(self.separator_offset)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            x: 12,
            status_y: 6,
            first_row_y: 10,
            row_spacing: 6,
            separator_offset: 3,
            font: "VirtualBoyExt".to_string(),
        }
    }
}

/// Configuration for the tic-tac-toe screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Text placement.
    #[serde(default)]
    layout: BoardLayout,

    /// Stage loaded on entry.
    #[serde(default = "default_stage")]
    stage: String,

    /// Delay between fade steps, in milliseconds.
    #[serde(default = "default_fade_delay_ms")]
    fade_delay_ms: u32,

    /// Buttons that open the alignment check, by name (e.g. `"LU"`).
    #[serde(default = "default_alignment_check_sequence")]
    alignment_check_sequence: Vec<Button>,
}

#[instrument]
fn default_stage() -> String {
    "MyGameStage".to_string()
}

#[instrument]
fn default_fade_delay_ms() -> u32 {
    16
}

#[instrument]
fn default_alignment_check_sequence() -> Vec<Button> {
    vec![
        Button::Lu,
        Button::Lu,
        Button::Ld,
        Button::Ld,
        Button::Ll,
        Button::Lr,
        Button::Ll,
        Button::Lr,
        Button::B,
        Button::A,
    ]
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            layout: BoardLayout::default(),
            stage: default_stage(),
            fade_delay_ms: default_fade_delay_ms(),
            alignment_check_sequence: default_alignment_check_sequence(),
        }
    }
}

impl ScreenConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(stage = %config.stage, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the sequence can be entered and the board fits the grid.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alignment_check_sequence.is_empty() {
            return Err(ConfigError::new(
                "alignment_check_sequence must not be empty".to_string(),
            ));
        }
        if self.alignment_check_sequence.contains(&Button::Pwr) {
            return Err(ConfigError::new(
                "alignment_check_sequence cannot contain PWR".to_string(),
            ));
        }

        let layout = &self.layout;
        if layout.x.saturating_add(ROW_WIDTH) > PRINTING_COLUMNS {
            return Err(ConfigError::new(format!(
                "Board at x={} does not fit {} columns",
                layout.x, PRINTING_COLUMNS
            )));
        }
        let bottom = layout.row_y(2).max(layout.status_y);
        if bottom >= PRINTING_ROWS {
            return Err(ConfigError::new(format!(
                "Board reaches row {} of {}",
                bottom, PRINTING_ROWS
            )));
        }
        Ok(())
    }

    /// The alignment-check sequence as button masks.
    pub fn sequence(&self) -> Vec<Buttons> {
        self.alignment_check_sequence
            .iter()
            .map(|&button| button.mask())
            .collect()
    }

    /// True when the configured sequence is the built-in one.
    pub fn uses_default_sequence(&self) -> bool {
        self.sequence() == ALIGNMENT_CHECK_SEQUENCE
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_positions() {
        let layout = BoardLayout::default();
        assert_eq!(layout.row_y(0), 10);
        assert_eq!(layout.row_y(2), 22);
        assert_eq!(layout.separator_y(0), 13);
        assert_eq!(layout.separator_y(1), 19);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ScreenConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.uses_default_sequence());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ScreenConfig::from_toml("").unwrap();
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_custom_sequence() {
        let config = ScreenConfig::from_toml(r#"alignment_check_sequence = ["A", "B", "STA"]"#)
            .unwrap();
        assert_eq!(config.sequence(), vec![Buttons::A, Buttons::B, Buttons::STA]);
        assert!(!config.uses_default_sequence());
    }

    #[test]
    fn test_partial_layout_override() {
        let config = ScreenConfig::from_toml("[layout]\nx = 20\n").unwrap();
        assert_eq!(*config.layout().x(), 20);
        assert_eq!(*config.layout().status_y(), 6);
        assert_eq!(config.layout().font(), "VirtualBoyExt");
    }

    #[test]
    fn test_rejects_empty_sequence() {
        let err = ScreenConfig::from_toml("alignment_check_sequence = []").unwrap_err();
        assert!(err.message.contains("must not be empty"));
    }

    #[test]
    fn test_rejects_power_in_sequence() {
        assert!(ScreenConfig::from_toml(r#"alignment_check_sequence = ["PWR"]"#).is_err());
    }

    #[test]
    fn test_rejects_board_off_grid() {
        assert!(ScreenConfig::from_toml("[layout]\nx = 45\n").is_err());
        assert!(ScreenConfig::from_toml("[layout]\nfirst_row_y = 20\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_button() {
        let err = ScreenConfig::from_toml(r#"alignment_check_sequence = ["K_A"]"#).unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }
}
