use crate::game::{GameEngine, MoveStatus, Position, COLUMNS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::UiConfig;

pub struct App {
    engine: GameEngine,
    config: UiConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    win_line: Vec<Position>,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            engine: GameEngine::new(),
            selected_column: config.initial_column.min(COLUMNS - 1),
            config,
            should_quit: false,
            message: None,
            win_line: Vec::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Winning positions to highlight, empty while the game is undecided
    pub fn win_line(&self) -> &[Position] {
        if self.config.highlight_win_line {
            &self.win_line
        } else {
            &[]
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLUMNS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.selected_column as isize);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Keys are 1-based, columns 0-based
                let column = c.to_digit(10).map_or(0, |digit| digit as usize - 1);
                if column < COLUMNS {
                    self.selected_column = column;
                }
                self.play(column as isize);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Play a column and keep the outcome for rendering
    fn play(&mut self, column: isize) {
        let was_over = self.engine.status().is_over();
        let result = self.engine.play_move(column);
        debug!("column {} -> {:?}", column, result.status);

        if was_over {
            self.message = Some("Game over! Press 'r' to play again.".to_string());
            return;
        }

        match result.status {
            MoveStatus::Invalid => {
                self.message = Some(format!("Column {} is not playable!", column + 1));
            }
            MoveStatus::Win => {
                self.win_line = result.win_line;
                self.message = Some("Press 'r' to play again.".to_string());
            }
            MoveStatus::Draw => {
                self.message = Some("Press 'r' to play again.".to_string());
            }
            MoveStatus::Success => {}
        }
    }

    /// Start a new game
    fn restart(&mut self) {
        self.engine.reset();
        self.win_line.clear();
        self.selected_column = self.config.initial_column.min(COLUMNS - 1);
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, PlayerColor, Token};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn drop_in(app: &mut App, column: usize) {
        let digit = char::from_digit(column as u32 + 1, 10).unwrap();
        press(app, KeyCode::Char(digit));
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::default();
        assert_eq!(app.selected_column(), 3);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);

        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine().current_board().get(5, 2), Token::Yellow);
        assert_eq!(app.engine().current_turn(), PlayerColor::Red);
    }

    #[test]
    fn test_digit_key_drops_directly() {
        let mut app = App::default();
        drop_in(&mut app, 6);

        assert_eq!(app.selected_column(), 6);
        assert_eq!(app.engine().current_board().get(5, 6), Token::Yellow);
    }

    #[test]
    fn test_digit_off_board_is_reported() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('9'));

        assert_eq!(app.message(), Some("Column 9 is not playable!"));
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.engine().current_turn(), PlayerColor::Yellow);
    }

    #[test]
    fn test_win_line_is_kept_until_restart() {
        let mut app = App::default();
        for column in [0, 6, 1, 6, 2, 6, 3] {
            drop_in(&mut app, column);
        }

        assert_eq!(app.engine().status(), GameStatus::Win);
        assert_eq!(app.win_line().len(), 4);

        drop_in(&mut app, 4);
        assert_eq!(app.message(), Some("Game over! Press 'r' to play again."));
        assert_eq!(app.win_line().len(), 4);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.win_line().is_empty());
        assert_eq!(app.engine().status(), GameStatus::Start);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_highlight_can_be_disabled() {
        let mut app = App::new(UiConfig {
            highlight_win_line: false,
            ..UiConfig::default()
        });
        for column in [0, 6, 1, 6, 2, 6, 3] {
            drop_in(&mut app, column);
        }

        assert_eq!(app.engine().status(), GameStatus::Win);
        assert!(app.win_line().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
