use crate::game::{GameEngine, GameStatus, PlayerColor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::board_widget::{render_board, token_color};

/// Status text and the colour it is shown in.
///
/// The turn does not pass on a winning move, so after a win the current turn
/// is the winner. A draw has no colour.
pub fn status_line(engine: &GameEngine) -> (String, PlayerColor) {
    let turn = engine.current_turn();
    match engine.status() {
        GameStatus::Win => (format!("{} wins!", turn.name()), turn),
        GameStatus::Draw => ("Draw!".to_string(), PlayerColor::None),
        GameStatus::Start | GameStatus::InProgress => (format!("{}'s turn", turn.name()), turn),
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Status
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_status(frame, app.engine(), chunks[0]);
    render_board(
        frame,
        app.engine().current_board(),
        app.selected_column(),
        app.win_line(),
        chunks[1],
    );
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_status(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (text, color) = status_line(engine);
    let fg = match color {
        PlayerColor::None => Color::White,
        other => token_color(other.to_token()),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(fg).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Four In A Row"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  R: Play again  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
