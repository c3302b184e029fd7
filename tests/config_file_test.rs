//! Tests for loading screen configuration from disk.

use std::io::Write;

use tictactoe_screen::{Buttons, ScreenConfig, TicTacToeScreen};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
stage = "PracticeStage"
fade_delay_ms = 40
alignment_check_sequence = ["STA", "SEL", "a"]

[layout]
x = 2
status_y = 1
font = "Default"
"#
    )
    .unwrap();

    let config = ScreenConfig::from_file(file.path()).unwrap();
    assert_eq!(config.stage(), "PracticeStage");
    assert_eq!(*config.fade_delay_ms(), 40);
    assert_eq!(config.sequence()[0], Buttons::STA);
    assert_eq!(config.sequence()[2], Buttons::A);
    assert_eq!(*config.layout().x(), 2);
    assert_eq!(config.layout().row_y(1), 16);

    let screen = TicTacToeScreen::new(&config);
    assert_eq!(screen.matcher().target().len(), 3);
    assert_eq!(screen.stage(), "PracticeStage");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScreenConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fade_delay_ms = \"slow\"").unwrap();
    let err = ScreenConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
