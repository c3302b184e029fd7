//! Terminal host: runs the tic-tac-toe screen with crossterm and ratatui.

mod alignment_check;
mod canvas;
mod host;
mod stack;
mod ui;

pub use alignment_check::AlignmentCheckScreen;
pub use canvas::TextCanvas;
pub use host::{Brightness, TerminalHost, ToolState};
pub use stack::ScreenStack;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::config::{PRINTING_COLUMNS, PRINTING_ROWS, ScreenConfig};
use crate::input::{UserInput, buttons_for_key, should_quit};
use crate::screen::TicTacToeScreen;

/// Input poll interval; one tick of the screen.
const TICK: Duration = Duration::from_millis(16);

/// Runs the screen in the terminal until the user quits.
#[instrument(skip(config))]
pub fn run(config: &ScreenConfig) -> Result<()> {
    info!("Starting terminal host");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Host loop error");
    }
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &ScreenConfig) -> Result<()> {
    let mut host = TerminalHost::new();
    let mut canvas = TextCanvas::new(PRINTING_COLUMNS, PRINTING_ROWS);
    let mut stack = ScreenStack::new(TicTacToeScreen::new(config));
    stack.enter(&mut host, &mut canvas);
    let mut resized = false;

    loop {
        // Redraw only after something was printed or a fade ran.
        let brightness_changed = host.take_changed();
        if canvas.take_dirty() || brightness_changed || std::mem::take(&mut resized) {
            terminal.draw(|f| ui::draw(f, &canvas, *host.brightness(), stack.is_paused()))?;
        }

        if !event::poll(TICK)? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                resized = true;
                continue;
            }
            _ => continue,
        };
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if should_quit(key) {
            info!("Quit requested");
            return Ok(());
        }

        let pressed = buttons_for_key(key);
        if pressed.is_empty() || !*host.keypad_enabled() {
            continue;
        }
        let transition = stack.dispatch(UserInput::new(pressed), &mut host, &mut canvas);
        debug!(?transition, "Input handled");
    }
}
