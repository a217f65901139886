use super::player::PlayerColor;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
pub const WIN_LINE_LENGTH: usize = 4;

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    #[default]
    Empty,
    Yellow,
    Red,
}

impl Token {
    /// Colour of the player owning this token, `PlayerColor::None` for empty cells
    pub fn to_player_color(self) -> PlayerColor {
        match self {
            Token::Empty => PlayerColor::None,
            Token::Yellow => PlayerColor::Yellow,
            Token::Red => PlayerColor::Red,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }
}

/// A `(row, column)` coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Check whether a signed coordinate falls outside the grid
pub fn is_out_of_bounds(row: isize, column: isize) -> bool {
    row < 0 || row >= ROWS as isize || column < 0 || column >= COLUMNS as isize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Token; COLUMNS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Token::Empty; COLUMNS]; ROWS],
        }
    }

    /// Get the token at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, column: usize) -> Token {
        self.cells[row][column]
    }

    /// Get the token at a signed coordinate, `None` when it is off the board
    pub fn token_at(&self, row: isize, column: isize) -> Option<Token> {
        if is_out_of_bounds(row, column) {
            return None;
        }
        Some(self.cells[row as usize][column as usize])
    }

    /// Check if a column has no room left. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLUMNS {
            return true;
        }
        !self.cells[0][column].is_empty()
    }

    /// Drop a token into a column, returning the row where it landed.
    ///
    /// Scans from the bottom row upward to the first empty cell. Returns `None`
    /// when the column is off the board or already full; the board is left
    /// untouched in that case.
    pub fn drop_token(&mut self, column: isize, token: Token) -> Option<usize> {
        if column < 0 || column >= COLUMNS as isize {
            return None;
        }
        let column = column as usize;

        let row = (0..ROWS).rev().find(|&row| self.cells[row][column].is_empty())?;
        self.cells[row][column] = token;
        Some(row)
    }

    /// Number of occupied cells in a column
    pub fn column_height(&self, column: usize) -> usize {
        (0..ROWS)
            .filter(|&row| !self.cells[row][column].is_empty())
            .count()
    }

    /// Check if every cell on the board is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|token| !token.is_empty()))
    }

    /// Total number of occupied cells
    pub fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|token| !token.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                assert_eq!(board.get(row, column), Token::Empty);
            }
        }
        assert_eq!(board.token_count(), 0);
    }

    #[test]
    fn test_drop_token() {
        let mut board = Board::new();

        let row = board.drop_token(3, Token::Yellow).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Token::Yellow);

        let row = board.drop_token(3, Token::Red).unwrap();
        assert_eq!(row, 4); // Stacks on the first token
        assert_eq!(board.get(4, 3), Token::Red);
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_token(0, Token::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.drop_token(0, Token::Yellow), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_outside_board() {
        let mut board = Board::new();
        assert_eq!(board.drop_token(7, Token::Red), None);
        assert_eq!(board.drop_token(-1, Token::Red), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 0..COLUMNS as isize {
            for _ in 0..ROWS {
                board.drop_token(column, Token::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.token_count(), ROWS * COLUMNS);
    }

    #[test]
    fn test_bounds_check_rejects_dimension_values() {
        assert!(!is_out_of_bounds(0, 0));
        assert!(!is_out_of_bounds(5, 6));
        assert!(is_out_of_bounds(6, 0));
        assert!(is_out_of_bounds(0, 7));
        assert!(is_out_of_bounds(-1, 3));
        assert!(is_out_of_bounds(2, -1));
    }

    #[test]
    fn test_token_at_off_board() {
        let board = Board::new();
        assert_eq!(board.token_at(6, 0), None);
        assert_eq!(board.token_at(0, 7), None);
        assert_eq!(board.token_at(5, 6), Some(Token::Empty));
    }

    #[test]
    fn test_token_to_player_color() {
        assert_eq!(Token::Empty.to_player_color(), PlayerColor::None);
        assert_eq!(Token::Yellow.to_player_color(), PlayerColor::Yellow);
        assert_eq!(Token::Red.to_player_color(), PlayerColor::Red);
    }
}
