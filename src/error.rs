use thiserror::Error;

/// Why a registration, move, or square query was rejected.
/// Every rejection is final for the attempted call; the caller must
/// retry with corrected input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("it is not this player's turn")]
    OutOfTurn,

    #[error("unknown player name, duplicate name, or invalid piece color")]
    InvalidPlayer,

    #[error("square is off-board, unplayable, empty, or not the player's own")]
    InvalidSquare,

    #[error("move violates the rules of checkers")]
    InvalidMove,

    #[error("game is already over")]
    GameOver,
}
