//! Command-line interface for tictactoe_screen.

use clap::Parser;

/// Tic-tac-toe screen - play the mini-game in a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_screen")]
#[command(about = "Tic-tac-toe game screen with a hidden alignment check", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML screen configuration (defaults are used if omitted)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// File that receives log output (the terminal is in use by the game)
    #[arg(long, default_value = "tictactoe_screen.log")]
    pub log_file: std::path::PathBuf,

    /// Validate the configuration and exit without starting the game
    #[arg(long)]
    pub check_config: bool,
}
