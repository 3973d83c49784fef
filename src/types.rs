use std::str::FromStr;

use serde::Serialize;

use crate::error::MoveError;

/// Piece color. Black starts on rows 5-7 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Row delta a man of this color advances in.
    /// White men move toward row 7, Black men toward row 0.
    pub fn forward(self) -> i32 {
        match self {
            Self::Black => -1,
            Self::White => 1,
        }
    }
}

impl FromStr for Color {
    type Err = MoveError;

    /// Accepts exactly `"Black"` or `"White"`; anything else is an
    /// invalid color at the registration boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Black" => Ok(Self::Black),
            "White" => Ok(Self::White),
            _ => Err(MoveError::InvalidPlayer),
        }
    }
}

/// Promotion rank of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    Man,
    King,
    TripleKing,
}

/// A checker on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }
}

/// One square of the 8x8 grid. Light squares (even `row + col`) are
/// permanently `Unplayable`; dark squares are `Empty` or `Occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Square {
    Unplayable,
    Empty,
    Occupied(Piece),
}

impl Square {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Self::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    /// Cell code used by the flat board projection:
    /// 0=empty, 1=black man, 2=white man, 3=black king, 4=white king,
    /// 5=black triple king, 6=white triple king, 7=unplayable.
    pub fn cell_code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Occupied(piece) => match (piece.color, piece.rank) {
                (Color::Black, Rank::Man) => 1,
                (Color::White, Rank::Man) => 2,
                (Color::Black, Rank::King) => 3,
                (Color::White, Rank::King) => 4,
                (Color::Black, Rank::TripleKing) => 5,
                (Color::White, Rank::TripleKing) => 6,
            },
            Self::Unplayable => 7,
        }
    }
}

/// A board coordinate. Zero-indexed, row 0 is White's home side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Whether the match is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Active,
    Over,
}

/// Public match snapshot returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cell codes, row-major (see [`Square::cell_code`]).
    pub board: Vec<u8>,
    pub current_turn: Color,
    pub is_game_over: bool,
    pub winner: Option<String>,
    pub last_destination: Option<Position>,
    /// Contract:
    /// - `true` when the previous move completed a turn.
    /// - `false` when the mover still owes a forced continuation jump
    ///   from `last_destination`.
    pub turn_finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_exact_names_only() {
        assert_eq!("Black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("White".parse::<Color>(), Ok(Color::White));
        assert_eq!("black".parse::<Color>(), Err(MoveError::InvalidPlayer));
        assert_eq!("Green".parse::<Color>(), Err(MoveError::InvalidPlayer));
        assert_eq!("".parse::<Color>(), Err(MoveError::InvalidPlayer));
    }

    #[test]
    fn cell_codes_cover_every_square_kind() {
        assert_eq!(Square::Empty.cell_code(), 0);
        assert_eq!(Square::Unplayable.cell_code(), 7);

        let codes: Vec<u8> = [
            (Color::Black, Rank::Man),
            (Color::White, Rank::Man),
            (Color::Black, Rank::King),
            (Color::White, Rank::King),
            (Color::Black, Rank::TripleKing),
            (Color::White, Rank::TripleKing),
        ]
        .into_iter()
        .map(|(color, rank)| Square::Occupied(Piece::new(color, rank)).cell_code())
        .collect();

        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn forward_direction_points_at_opponent_home_row() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }
}
