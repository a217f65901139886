//! Core Connect Four rules: board representation, player colours, the game
//! engine state machine and pure win/draw evaluation.

mod board;
mod engine;
pub mod evaluation;
mod player;

pub use board::{is_out_of_bounds, Board, Position, Token, COLUMNS, ROWS, WIN_LINE_LENGTH};
pub use engine::{GameEngine, GameStatus, MoveResult, MoveStatus};
pub use evaluation::{
    check_for_win, evaluate, find_win_line, is_board_full, Direction, Evaluation, WinLine,
};
pub use player::PlayerColor;
