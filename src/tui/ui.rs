//! Stateless terminal rendering of the text canvas.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::canvas::TextCanvas;
use super::host::Brightness;

/// Draws the canvas framed and centred, with a help line underneath.
pub fn draw(frame: &mut Frame, canvas: &TextCanvas, brightness: Brightness, paused: bool) {
    let area = frame.area();
    let outer = center_rect(area, canvas.width() + 2, canvas.height() + 3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(canvas.height() + 2), Constraint::Length(1)])
        .split(outer);

    let title = if paused { "Alignment Check" } else { "Tic-Tac-Toe" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));

    let lines: Vec<Line> = match brightness {
        Brightness::Visible => canvas.lines().into_iter().map(Line::from).collect(),
        Brightness::Hidden => Vec::new(),
    };
    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(block);
    frame.render_widget(body, chunks[0]);

    let help = Paragraph::new("←→↑↓/WASD: move | Z/Enter: place | X: new game | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
