use log::{debug, info};

use super::board::{Board, Position};
use super::evaluation::{evaluate, Evaluation};
use super::player::PlayerColor;

/// Lifecycle of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Start,
    InProgress,
    Win,
    Draw,
}

impl GameStatus {
    /// Check if the session has finished
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Draw)
    }
}

/// Outcome of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Invalid,
    Success,
    Win,
    Draw,
}

/// Everything a caller needs to render the state after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub winner: PlayerColor,
    pub status: MoveStatus,
    /// Winning positions, empty unless `status` is `Win`
    pub win_line: Vec<Position>,
}

impl MoveResult {
    fn invalid(board: Board) -> Self {
        MoveResult {
            board,
            winner: PlayerColor::None,
            status: MoveStatus::Invalid,
            win_line: Vec::new(),
        }
    }
}

/// One game session: board, turn and status.
///
/// Only [`GameEngine::play_move`] and [`GameEngine::reset`] change the session.
/// Every move works on a copy of the board that is committed once the drop
/// succeeds, and a finished game stays frozen until the next reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    starting_color: PlayerColor,
    current_turn: PlayerColor,
    status: GameStatus,
    current_board: Board,
}

impl GameEngine {
    /// Create an engine in the `Start` state
    pub fn new() -> Self {
        let mut engine = GameEngine {
            starting_color: PlayerColor::Yellow,
            current_turn: PlayerColor::Yellow,
            status: GameStatus::Start,
            current_board: Board::new(),
        };
        engine.reset();
        engine
    }

    /// Discard the current session and start over with Yellow to move
    pub fn reset(&mut self) {
        self.starting_color = PlayerColor::Yellow;
        self.current_turn = self.starting_color;
        self.status = GameStatus::Start;
        self.current_board = Board::new();
        info!("game reset, {} starts", self.starting_color.name());
    }

    pub fn starting_color(&self) -> PlayerColor {
        self.starting_color
    }

    pub fn current_turn(&self) -> PlayerColor {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_board(&self) -> &Board {
        &self.current_board
    }

    /// Drop the current player's token into `column`.
    ///
    /// Columns off the board and full columns yield `MoveStatus::Invalid` with
    /// the untouched board. Once the game is over the move is ignored and the
    /// final result is reported again. The turn only passes to the other
    /// player after a `Success`.
    pub fn play_move(&mut self, column: isize) -> MoveResult {
        match self.status {
            GameStatus::Start => self.status = GameStatus::InProgress,
            GameStatus::Win | GameStatus::Draw => {
                debug!("move in column {} ignored, game is over", column);
                return self.evaluate_game(self.current_board);
            }
            GameStatus::InProgress => {}
        }

        let result = self.perform_move(column);

        if result.status == MoveStatus::Success {
            self.current_turn = self.current_turn.other();
        }

        result
    }

    fn perform_move(&mut self, column: isize) -> MoveResult {
        let mut next_board = self.current_board;

        let Some(row) = next_board.drop_token(column, self.current_turn.to_token()) else {
            debug!(
                "{} cannot play column {}: full or off the board",
                self.current_turn.name(),
                column
            );
            return MoveResult::invalid(next_board);
        };

        debug!(
            "{} dropped into column {} at row {}",
            self.current_turn.name(),
            column,
            row
        );

        self.current_board = next_board;
        self.evaluate_game(next_board)
    }

    fn evaluate_game(&mut self, board: Board) -> MoveResult {
        match evaluate(&board) {
            Evaluation::Win { winner, line } => {
                if self.status != GameStatus::Win {
                    info!("{} wins", winner.name());
                }
                self.status = GameStatus::Win;
                MoveResult {
                    board,
                    winner,
                    status: MoveStatus::Win,
                    win_line: line.to_vec(),
                }
            }
            Evaluation::Draw => {
                if self.status != GameStatus::Draw {
                    info!("game drawn");
                }
                self.status = GameStatus::Draw;
                MoveResult {
                    board,
                    winner: PlayerColor::None,
                    status: MoveStatus::Draw,
                    win_line: Vec::new(),
                }
            }
            Evaluation::Ongoing => MoveResult {
                board,
                winner: PlayerColor::None,
                status: MoveStatus::Success,
                win_line: Vec::new(),
            },
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
