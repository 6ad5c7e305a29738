use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::warn;

use crate::config::AppConfig;
use crate::game::{Engine, MoveError, MoveStatus};

use super::game_view;

pub struct App {
    engine: Engine,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let engine = Engine::new();
        let selected_column = config
            .ui
            .start_column
            .min(engine.inspect().board().width() - 1);
        App {
            engine,
            config,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let poll_interval = Duration::from_millis(self.config.ui.poll_interval_ms);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events(poll_interval)?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, poll_interval: Duration) -> io::Result<()> {
        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let width = self.engine.inspect().board().width();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.config.ui.start_column.min(width - 1);
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c @ 'a'..='z') => {
                let col = (c as u8 - b'a') as usize;
                if col < width {
                    self.selected_column = col;
                    self.drop_piece(col);
                }
            }
            _ => {}
        }
    }

    /// Drop piece in `column`
    fn drop_piece(&mut self, column: usize) {
        match self.engine.submit_move(column as isize) {
            Ok(result) => {
                self.message = match result.status {
                    MoveStatus::Won(_) => Some(format!(
                        "{} wins!",
                        game_view::player_label(result.player, &self.config.players)
                    )),
                    MoveStatus::Draw => Some("It's a draw!".to_string()),
                    MoveStatus::Continue { .. } => None,
                };
            }
            Err(err) => {
                warn!(error = %err, column, "move rejected");
                self.message = Some(match err {
                    MoveError::GameLocked => "Game over! Press 'r' to restart.".to_string(),
                    MoveError::ColumnFull { column } => {
                        format!("Column {} is full!", game_view::column_label(column))
                    }
                    MoveError::InvalidColumn { .. } => "Invalid column!".to_string(),
                });
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            self.engine.inspect(),
            &self.config.players,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player, COLS, ROWS};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_selector_starts_from_config_and_stays_on_board() {
        let mut app = App::default();
        assert_eq!(app.selected_column, COLS / 2);

        for _ in 0..COLS {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);

        for _ in 0..COLS + 2 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        let board = app.engine.inspect().board();
        assert_eq!(board.get(0, COLS / 2), Cell::PlayerOne);
    }

    #[test]
    fn test_letter_keys_drop_directly() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('g'));
        let board = app.engine.inspect().board();
        assert_eq!(board.get(0, 0), Cell::PlayerOne);
        assert_eq!(board.get(0, 6), Cell::PlayerTwo);
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_letters_past_the_board_are_ignored() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.engine.move_count(), 0);
    }

    #[test]
    fn test_win_message_and_lock() {
        let mut app = App::default();
        for c in ['a', 'g', 'b', 'g', 'c', 'g', 'd'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.message.as_deref(), Some("Player One (X) wins!"));
        assert_eq!(app.engine.inspect().winner(), Some(Player::One));

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..ROWS {
            press(&mut app, KeyCode::Char('a'));
        }
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.message.as_deref(), Some("Column A is full!"));
        assert_eq!(app.engine.move_count(), ROWS);
    }

    #[test]
    fn test_reset_reenables_input() {
        let mut app = App::default();
        for c in ['a', 'g', 'b', 'g', 'c', 'g', 'd'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('r'));

        assert!(!app.engine.inspect().is_locked());
        assert_eq!(app.engine.move_count(), 0);
        assert_eq!(app.selected_column, COLS / 2);
        assert_eq!(app.message.as_deref(), Some("New game started!"));

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.engine.inspect().board().get(0, 1), Cell::PlayerOne);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_draw_message_and_lock() {
        let mut app = App::default();
        // Columns a, b, e, f read X O X O X O from the bottom; c, d, g read O X O X O X.
        let mut keys = Vec::new();
        for (x_first, o_first) in [('a', 'c'), ('b', 'd'), ('e', 'g')] {
            for _ in 0..3 {
                keys.extend([x_first, o_first, o_first, x_first]);
            }
        }
        keys.extend(['f'; ROWS]);

        for c in keys {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.message.as_deref(), Some("It's a draw!"));
        assert!(app.engine.inspect().is_draw());
        assert_eq!(app.engine.move_count(), ROWS * COLS);

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );
    }
}
