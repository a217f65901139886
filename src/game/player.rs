use super::board::Token;

/// Colour of a player's tokens. `None` stands for "no player".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerColor {
    #[default]
    None,
    Yellow,
    Red,
}

impl PlayerColor {
    /// Get the other player. `None` has no opponent and maps to itself.
    pub fn other(self) -> PlayerColor {
        match self {
            PlayerColor::Yellow => PlayerColor::Red,
            PlayerColor::Red => PlayerColor::Yellow,
            PlayerColor::None => PlayerColor::None,
        }
    }

    /// Convert player to token type
    pub fn to_token(self) -> Token {
        match self {
            PlayerColor::Yellow => Token::Yellow,
            PlayerColor::Red => Token::Red,
            PlayerColor::None => Token::Empty,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Red => "Red",
            PlayerColor::None => "None",
        }
    }
}
