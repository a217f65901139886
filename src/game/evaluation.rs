//! Pure win/draw evaluation over a board snapshot.
//!
//! The board is scanned column by column from the left, each column from the
//! bottom row up. Every cell is the start of four line searches, tried in the
//! order of [`Direction::ALL`]. The first complete line found is reported, so
//! when several lines exist at once the scan order decides which one wins.

use super::board::{Board, Position, Token, COLUMNS, ROWS, WIN_LINE_LENGTH};
use super::player::PlayerColor;

/// Step taken at each point of a line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Upward from the start cell
    Vertical,
    /// Leftward from the start cell
    Horizontal,
    /// Up and to the left
    DiagonalLeft,
    /// Up and to the right
    DiagonalRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalLeft,
        Direction::DiagonalRight,
    ];

    /// `(row, column)` increment applied per step
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (-1, 0),
            Direction::Horizontal => (0, -1),
            Direction::DiagonalLeft => (-1, -1),
            Direction::DiagonalRight => (-1, 1),
        }
    }
}

/// Four aligned positions of the same colour.
pub type WinLine = [Position; WIN_LINE_LENGTH];

/// Outcome of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Win { winner: PlayerColor, line: WinLine },
    Draw,
    Ongoing,
}

/// Walk `WIN_LINE_LENGTH` steps from `start` in `direction`.
///
/// Returns the winning colour and the visited positions when every step lands
/// on the same non-empty token. Stepping off the board or onto an empty cell
/// ends the search without a win.
pub fn find_win_line(
    board: &Board,
    start: Position,
    direction: Direction,
) -> Option<(PlayerColor, WinLine)> {
    let (row_step, column_step) = direction.step();
    let mut line = [start; WIN_LINE_LENGTH];
    let mut first = None;

    for (i, slot) in line.iter_mut().enumerate() {
        let row = start.row as isize + row_step * i as isize;
        let column = start.column as isize + column_step * i as isize;

        let token = board.token_at(row, column)?;
        if token.is_empty() || token != *first.get_or_insert(token) {
            return None;
        }

        *slot = Position::new(row as usize, column as usize);
    }

    first.map(|token: Token| (token.to_player_color(), line))
}

/// Scan the whole board for a winning line, returning the first one found
pub fn check_for_win(board: &Board) -> Option<(PlayerColor, WinLine)> {
    for column in 0..COLUMNS {
        for row in (0..ROWS).rev() {
            let start = Position::new(row, column);
            for direction in Direction::ALL {
                if let Some(win) = find_win_line(board, start, direction) {
                    return Some(win);
                }
            }
        }
    }
    None
}

/// Check if no empty cell remains
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

/// Classify a board. Draw detection only runs once no win has been found.
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((winner, line)) = check_for_win(board) {
        return Evaluation::Win { winner, line };
    }

    if is_board_full(board) {
        return Evaluation::Draw;
    }

    Evaluation::Ongoing
}
