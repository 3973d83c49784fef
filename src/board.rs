use once_cell::sync::Lazy;

use crate::error::MoveError;
use crate::types::{Color, Piece, Position, Rank, Square};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

type Grid = [[Square; BOARD_SIZE]; BOARD_SIZE];

/// Starting layout: White men on the dark squares of rows 0-2, Black men
/// on the dark squares of rows 5-7, rows 3-4 dark-empty.
static INITIAL_GRID: Lazy<Grid> = Lazy::new(|| {
    let mut grid = [[Square::Unplayable; BOARD_SIZE]; BOARD_SIZE];
    for (row, squares) in grid.iter_mut().enumerate() {
        for (col, square) in squares.iter_mut().enumerate() {
            if (row + col) % 2 == 0 {
                continue;
            }
            *square = match row {
                0..=2 => Square::Occupied(Piece::new(Color::White, Rank::Man)),
                5..=7 => Square::Occupied(Piece::new(Color::Black, Rank::Man)),
                _ => Square::Empty,
            };
        }
    }
    grid
});

/// 8x8 checkers board. Light squares never hold a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates a board in the starting layout.
    pub fn new() -> Self {
        Self { grid: *INITIAL_GRID }
    }

    /// Creates a board whose dark squares are all empty.
    /// Useful for setting up custom positions.
    pub fn empty() -> Self {
        let mut grid = [[Square::Unplayable; BOARD_SIZE]; BOARD_SIZE];
        for (row, squares) in grid.iter_mut().enumerate() {
            for (col, square) in squares.iter_mut().enumerate() {
                if (row + col) % 2 == 1 {
                    *square = Square::Empty;
                }
            }
        }
        Self { grid }
    }

    /// Returns the square at `pos`, or `InvalidSquare` when either
    /// coordinate falls outside `0..=7`.
    pub fn square(&self, pos: Position) -> Result<Square, MoveError> {
        if !in_bounds(pos.row as i32, pos.col as i32) {
            return Err(MoveError::InvalidSquare);
        }
        Ok(self.grid[pos.row as usize][pos.col as usize])
    }

    /// Returns the piece at `pos`, or `None` for an empty or light
    /// square. Out-of-bounds coordinates fail with `InvalidSquare`.
    pub fn piece(&self, pos: Position) -> Result<Option<Piece>, MoveError> {
        Ok(self.square(pos)?.piece())
    }

    /// Bounds-tolerant lookup used when scanning jump directions.
    pub(crate) fn square_at(&self, row: i32, col: i32) -> Option<Square> {
        if !in_bounds(row, col) {
            return None;
        }
        Some(self.grid[row as usize][col as usize])
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.grid[pos.row as usize][pos.col as usize] = square;
    }

    /// Raw grid access for inspection and testing.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Counts the pieces of one color still on the board.
    pub fn count(&self, color: Color) -> u8 {
        self.grid
            .iter()
            .flatten()
            .filter(|square| square.piece().is_some_and(|piece| piece.color == color))
            .count() as u8
    }

    /// Flattens the board to `[u8; 64]` cell codes, row-major
    /// (see [`Square::cell_code`]).
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (pos, cell) in cells.iter_mut().enumerate() {
            *cell = self.grid[pos / BOARD_SIZE][pos % BOARD_SIZE].cell_code();
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Dark squares (odd `row + col`) are the playable half of the board.
pub(crate) fn is_playable(row: i32, col: i32) -> bool {
    in_bounds(row, col) && (row + col) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t01_initial_layout_has_twelve_men_per_side() {
        let board = Board::new();

        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.count(Color::White), 12);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = board.grid()[row][col];
                if (row + col) % 2 == 0 {
                    assert_eq!(square, Square::Unplayable);
                    continue;
                }
                let expected = match row {
                    0..=2 => Square::Occupied(Piece::new(Color::White, Rank::Man)),
                    5..=7 => Square::Occupied(Piece::new(Color::Black, Rank::Man)),
                    _ => Square::Empty,
                };
                assert_eq!(square, expected, "square ({row}, {col})");
            }
        }
    }

    #[test]
    fn square_lookup_rejects_out_of_bounds_coordinates() {
        let board = Board::new();

        assert_eq!(board.square(Position::new(8, 0)), Err(MoveError::InvalidSquare));
        assert_eq!(board.square(Position::new(0, 8)), Err(MoveError::InvalidSquare));
        assert_eq!(board.piece(Position::new(200, 3)), Err(MoveError::InvalidSquare));
    }

    #[test]
    fn piece_lookup_maps_light_and_empty_squares_to_none() {
        let board = Board::new();

        // (0,0) is light, (3,0) is dark-empty, (5,0) holds a black man.
        assert_eq!(board.piece(Position::new(0, 0)), Ok(None));
        assert_eq!(board.piece(Position::new(3, 0)), Ok(None));
        assert_eq!(
            board.piece(Position::new(5, 0)),
            Ok(Some(Piece::new(Color::Black, Rank::Man)))
        );
    }

    #[test]
    fn to_array_projects_initial_layout_codes() {
        let cells = Board::new().to_array();

        assert_eq!(cells.iter().filter(|&&c| c == 1).count(), 12); // black men
        assert_eq!(cells.iter().filter(|&&c| c == 2).count(), 12); // white men
        assert_eq!(cells.iter().filter(|&&c| c == 7).count(), 32); // light squares
        assert_eq!(cells.iter().filter(|&&c| c == 0).count(), 8); // dark empties

        assert_eq!(cells[0], 7); // (0,0) light
        assert_eq!(cells[1], 2); // (0,1) white man
        assert_eq!(cells[5 * BOARD_SIZE], 1); // (5,0) black man
    }

    #[test]
    fn empty_board_has_no_pieces_but_keeps_light_squares() {
        let board = Board::empty();

        assert_eq!(board.count(Color::Black), 0);
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(board.square(Position::new(0, 0)), Ok(Square::Unplayable));
        assert_eq!(board.square(Position::new(4, 3)), Ok(Square::Empty));
    }

    #[test]
    fn playability_follows_square_parity() {
        assert!(is_playable(5, 2));
        assert!(!is_playable(5, 3));
        assert!(!is_playable(8, 1));
        assert!(!is_playable(-1, 2));
    }
}
