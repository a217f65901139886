use crate::game::{Board, Position, Token, COLUMNS, ROWS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Display colour of a token
pub fn token_color(token: Token) -> Color {
    match token {
        Token::Empty => Color::DarkGray,
        Token::Yellow => Color::Yellow,
        Token::Red => Color::Red,
    }
}

/// Build the board lines: column numbers, framed grid and selection marker.
/// Cells on the win line are drawn bold and reversed.
pub fn board_lines(board: &Board, selected_column: usize, win_line: &[Position]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut column_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for column in 0..COLUMNS {
        if column == selected_column {
            column_line.push(Span::styled(
                format!(" {} ", column + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            column_line.push(Span::raw(format!(" {} ", column + 1)));
        }
    }
    column_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(column_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for column in 0..COLUMNS {
            let token = board.get(row, column);
            let symbol = if token.is_empty() { " . " } else { " ● " };
            let mut style = Style::default().fg(token_color(token));
            if win_line.contains(&Position::new(row, column)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for column in 0..COLUMNS {
        if column == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

/// Render the board centred in the given area.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    win_line: &[Position],
    area: Rect,
) {
    let widget = Paragraph::new(board_lines(board, selected_column, win_line))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_board_has_frame_and_markers() {
        let lines = board_lines(&Board::new(), 0, &[]);
        // numbers, top border, 6 rows, bottom border, indicator
        assert_eq!(lines.len(), ROWS + 4);
        assert!(line_text(&lines[0]).contains(" 1 "));
        assert!(line_text(&lines[ROWS + 3]).starts_with("    ▲ "));
    }

    #[test]
    fn test_tokens_are_drawn() {
        let mut board = Board::new();
        board.drop_token(0, Token::Yellow).unwrap();
        let lines = board_lines(&board, 3, &[]);

        let bottom_row = &lines[ROWS + 1];
        assert_eq!(bottom_row.spans[1].content, " ● ");
        assert_eq!(bottom_row.spans[1].style.fg, Some(Color::Yellow));
        assert_eq!(bottom_row.spans[2].content, " . ");
    }

    #[test]
    fn test_win_line_is_highlighted() {
        let mut board = Board::new();
        board.drop_token(0, Token::Red).unwrap();
        let lines = board_lines(&board, 3, &[Position::new(5, 0)]);

        let style = lines[ROWS + 1].spans[1].style;
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert!(!lines[ROWS + 1].spans[2]
            .style
            .add_modifier
            .contains(Modifier::REVERSED));
    }
}
