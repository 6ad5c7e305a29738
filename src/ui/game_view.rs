use crate::config::PlayersConfig;
use crate::game::{Board, Coord, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Letter shown above a column: `A` for column 0.
pub(super) fn column_label(col: usize) -> char {
    char::from(b'A' + (col % 26) as u8)
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(game_state.board().height() as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, chunks[0]);
    render_board(frame, game_state, players, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_state.board().width(), chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, players: &PlayersConfig, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Won { player, .. }) => (
            format!("{} wins!", player_label(player, players)),
            players.color(player),
        ),
        Some(GameOutcome::Draw) => ("Draw!".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", player_label(player, players)),
                players.color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

pub(super) fn player_label(player: Player, players: &PlayersConfig) -> String {
    format!("{} ({})", player.name(), players.symbol(player))
}

fn cell_span(board: &Board, coord: Coord, winning: bool, players: &PlayersConfig) -> Span<'static> {
    match board.get(coord.row, coord.col).player() {
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Some(player) => {
            let mut style = Style::default().fg(players.color(player));
            if winning {
                style = style
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(format!(" {} ", players.symbol(player)), style)
        }
    }
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    selected_column: usize,
    area: Rect,
) {
    let board = game_state.board();
    let winning_run = game_state.winning_run();
    let mut lines = Vec::new();

    // Column labels with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let label = format!(" {} ", column_label(col));
        if col == selected_column && !game_state.is_locked() {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    // Row 0 is the bottom, so draw from the top row down
    for row in (0..board.height()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.width() {
            let coord = Coord::new(row, col);
            let winning = winning_run.is_some_and(|run| run.contains(coord));
            row_spans.push(cell_span(board, coord, winning, players));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column && !game_state.is_locked() {
            let color = players.color(game_state.current_player());
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(color)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, width: usize, area: Rect) {
    let last = column_label(width.saturating_sub(1)).to_ascii_lowercase();
    let controls = Paragraph::new(Line::from(format!(
        "←/→: Move  |  Enter: Drop  |  a-{last}: Drop in column  |  R: Restart  |  Q: Quit"
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Engine;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_to_buffer(state: &GameState, selected: usize, message: &Option<String>) -> Buffer {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let players = PlayersConfig::default();
        terminal
            .draw(|f| render(f, state, &players, selected, message))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn render_to_text(state: &GameState, selected: usize, message: &Option<String>) -> String {
        let buffer = render_to_buffer(state, selected, message);
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Fills the board with no four-in-a-row anywhere.
    fn drawing_moves() -> Vec<isize> {
        let mut moves = Vec::new();
        for (x_first, o_first) in [(0, 2), (1, 3), (4, 6)] {
            for _ in 0..3 {
                moves.extend([x_first, o_first, o_first, x_first]);
            }
        }
        moves.extend([5; 6]);
        moves
    }

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label(0), 'A');
        assert_eq!(column_label(6), 'G');
    }

    #[test]
    fn test_render_marks_locked_board_without_selector() {
        let mut engine = Engine::new();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.submit_move(col).unwrap();
        }
        let text = render_to_text(engine.inspect(), 3, &None);
        assert!(text.contains("Player One (X) wins!"));
        assert!(!text.contains('▲'));
    }

    #[test]
    fn test_render_shows_current_player_and_labels() {
        let engine = Engine::new();
        let text = render_to_text(engine.inspect(), 3, &None);
        assert!(text.contains("Current Player: Player One (X)"));
        assert!(text.contains(" A  B  C  D  E  F  G "));
    }

    #[test]
    fn test_render_shows_winner_and_message() {
        let mut engine = Engine::new();
        for col in [0, 6, 1, 6, 2, 6, 3] {
            engine.submit_move(col).unwrap();
        }
        let message = Some("Player One (X) wins!".to_string());
        let text = render_to_text(engine.inspect(), 3, &message);
        assert!(text.contains("Player One (X) wins!"));
        assert!(text.contains(" X  X  X  X "));
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let mut engine = Engine::new();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.submit_move(col).unwrap();
        }
        let buffer = render_to_buffer(engine.inspect(), 3, &None);

        // Skip the header, which also spells out the winner's symbol.
        let mut winning = 0;
        let mut losing = 0;
        for y in 3..buffer.area.height {
            for x in 0..buffer.area.width {
                let cell = &buffer[(x, y)];
                match cell.symbol() {
                    "X" => {
                        winning += 1;
                        assert_eq!(cell.fg, Color::Green);
                        assert_eq!(cell.bg, Color::White);
                        assert!(cell.modifier.contains(Modifier::REVERSED));
                    }
                    "O" => {
                        losing += 1;
                        assert_eq!(cell.fg, Color::Blue);
                        assert_ne!(cell.bg, Color::White);
                        assert!(!cell.modifier.contains(Modifier::REVERSED));
                    }
                    _ => {}
                }
            }
        }
        assert_eq!(winning, 4);
        assert_eq!(losing, 3);
    }

    #[test]
    fn test_render_shows_draw() {
        let mut engine = Engine::new();
        for col in drawing_moves() {
            engine.submit_move(col).unwrap();
        }
        assert!(engine.inspect().is_draw());

        let text = render_to_text(engine.inspect(), 3, &None);
        assert!(text.contains("Draw!"));
        assert!(!text.contains("Current Player"));
        assert!(!text.contains('▲'));
    }
}
