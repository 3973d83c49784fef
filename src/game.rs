use crate::board::{self, Board};
use crate::error::MoveError;
use crate::player::Player;
use crate::types::{Color, GameState, GameStatus, Piece, Position, Rank, Square};

/// Men each side starts with; capturing them all ends the game.
pub const PIECES_PER_SIDE: u8 = 12;

/// The four diagonal directions, as (row, col) deltas.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A single checkers match: the board, the registered players, and the
/// turn/forced-jump bookkeeping the move engine maintains.
pub struct Checkers {
    board: Board,
    players: Vec<Player>,
    turn: Color,
    status: GameStatus,
    winner: Option<String>,
    last_destination: Option<Position>,
    last_turn_finished: bool,
}

impl Checkers {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: Vec::new(),
            turn: Color::Black,
            status: GameStatus::Active,
            winner: None,
            last_destination: None,
            last_turn_finished: true,
        }
    }

    /// Registers a player. Names must be unique within the match.
    pub fn create_player(&mut self, name: &str, color: Color) -> Result<&Player, MoveError> {
        if self.status == GameStatus::Over {
            return Err(MoveError::GameOver);
        }
        if self.players.iter().any(|player| player.name() == name) {
            return Err(MoveError::InvalidPlayer);
        }

        self.players.push(Player::new(name, color));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Validates and applies one move for `actor_name`, relocating the
    /// piece at `origin` to `destination`. A two-square diagonal jump
    /// over an opposing piece captures it; landing on a promotion row
    /// crowns the piece; a further jump from the landing square forces
    /// the same player to continue before the turn passes.
    ///
    /// Returns the mover's cumulative captured-piece count.
    pub fn submit_move(
        &mut self,
        actor_name: &str,
        origin: Position,
        destination: Position,
    ) -> Result<u8, MoveError> {
        if self.status == GameStatus::Over {
            return Err(MoveError::GameOver);
        }

        let mover = self.player_index(actor_name)?;
        let color = self.players[mover].color();

        // Origin must hold one of the actor's own pieces.
        let piece = self.board.piece(origin)?.ok_or(MoveError::InvalidSquare)?;
        if piece.color != color {
            return Err(MoveError::InvalidSquare);
        }

        // Moves are diagonal: one square, or two for a jump.
        let d_row = destination.row as i32 - origin.row as i32;
        let d_col = destination.col as i32 - origin.col as i32;
        if d_row.abs() != d_col.abs() || !(d_row.abs() == 1 || d_row.abs() == 2) {
            return Err(MoveError::InvalidMove);
        }

        // A pending multi-jump binds the next move to the landing square
        // of the previous jump. Continuing from there hands the turn back
        // to the mover; any other origin is out of turn until then.
        if !self.last_turn_finished {
            if self.last_destination != Some(origin) {
                return Err(MoveError::OutOfTurn);
            }
            self.change_turn();
            self.last_turn_finished = true;
        }

        if self.turn != color {
            return Err(MoveError::OutOfTurn);
        }

        let dest_square = self.board.square(destination)?;
        if !board::is_playable(destination.row as i32, destination.col as i32) {
            return Err(MoveError::InvalidSquare);
        }

        // Men may only advance; kings and triple kings move both ways.
        if piece.rank == Rank::Man && d_row.signum() != color.forward() {
            return Err(MoveError::InvalidMove);
        }

        if dest_square != Square::Empty {
            return Err(MoveError::InvalidMove);
        }

        // Resolve the jumped square before touching the board, so an
        // own-color jump rejects without any lasting mutation. A jump
        // over an empty midpoint is legal and captures nothing.
        let mut captured_at = None;
        if d_row.abs() == 2 {
            let midpoint = Position::new(
                (origin.row as i32 + d_row / 2) as u8,
                (origin.col as i32 + d_col / 2) as u8,
            );
            if let Some(jumped) = self.board.piece(midpoint)? {
                if jumped.color == color {
                    return Err(MoveError::InvalidMove);
                }
                captured_at = Some(midpoint);
            }
        }

        let mut piece = piece;
        self.board.set(destination, Square::Occupied(piece));
        self.board.set(origin, Square::Empty);

        if let Some(midpoint) = captured_at {
            self.board.set(midpoint, Square::Empty);
            self.players[mover].add_captured();
        }

        // Crowning: man to king on the far row, then king to triple king
        // on the opposite far row. The two rows differ, so a man never
        // skips straight to triple king in one move.
        if piece.rank == Rank::Man && destination.row as i32 == far_row(color) {
            piece.rank = Rank::King;
            self.board.set(destination, Square::Occupied(piece));
            self.players[mover].add_king();
        }
        if piece.rank == Rank::King && destination.row as i32 == far_row(color.opponent()) {
            piece.rank = Rank::TripleKing;
            self.board.set(destination, Square::Occupied(piece));
            self.players[mover].add_triple_king();
        }

        if self.players[mover].captured_count() >= PIECES_PER_SIDE {
            self.status = GameStatus::Over;
            self.winner = Some(actor_name.to_string());
        }

        if self.has_further_jump(destination, piece.color, piece.rank) {
            self.last_turn_finished = false;
        }

        self.last_destination = Some(destination);
        self.change_turn();

        Ok(self.players[mover].captured_count())
    }

    /// True when the piece that just landed on `from` can jump again:
    /// an opposing piece one diagonal step away with an empty playable
    /// landing square behind it. Men only look forward.
    fn has_further_jump(&self, from: Position, color: Color, rank: Rank) -> bool {
        for (d_row, d_col) in DIAGONALS {
            if rank == Rank::Man && d_row != color.forward() {
                continue;
            }

            let mid_row = from.row as i32 + d_row;
            let mid_col = from.col as i32 + d_col;
            let land_row = from.row as i32 + 2 * d_row;
            let land_col = from.col as i32 + 2 * d_col;

            if self.board.square_at(land_row, land_col) != Some(Square::Empty) {
                continue;
            }
            if let Some(Square::Occupied(mid)) = self.board.square_at(mid_row, mid_col)
                && mid.color != color
            {
                return true;
            }
        }

        false
    }

    /// Returns the piece at `pos`, or `None` for an empty or light
    /// square. Out-of-bounds coordinates fail with `InvalidSquare`.
    pub fn query_square(&self, pos: Position) -> Result<Option<Piece>, MoveError> {
        self.board.piece(pos)
    }

    /// The winning player's name, or `None` while the game is running.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn player(&self, name: &str) -> Result<&Player, MoveError> {
        Ok(&self.players[self.player_index(name)?])
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_destination(&self) -> Option<Position> {
        self.last_destination
    }

    pub fn last_turn_finished(&self) -> bool {
        self.last_turn_finished
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_turn: self.turn,
            is_game_over: self.status == GameStatus::Over,
            winner: self.winner.clone(),
            last_destination: self.last_destination,
            turn_finished: self.last_turn_finished,
        }
    }

    fn player_index(&self, name: &str) -> Result<usize, MoveError> {
        self.players
            .iter()
            .position(|player| player.name() == name)
            .ok_or(MoveError::InvalidPlayer)
    }

    fn change_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.status = GameStatus::Active;
        self.winner = None;
        self.last_destination = None;
        self.last_turn_finished = true;
    }
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

/// The promotion row a man of `color` is marching toward.
fn far_row(color: Color) -> i32 {
    match color {
        Color::Black => 0,
        Color::White => 7,
    }
}
