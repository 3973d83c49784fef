use wasm_bindgen::prelude::*;

use crate::game::Checkers;
use crate::types::{Color, Position};

/// JS-facing handle around a single match.
#[wasm_bindgen]
pub struct WasmCheckers {
    game: Checkers,
}

#[wasm_bindgen]
impl WasmCheckers {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            game: Checkers::new(),
        }
    }

    /// Registers a player. `color` must be exactly `"Black"` or `"White"`.
    pub fn create_player(&mut self, name: &str, color: &str) -> Result<(), JsError> {
        let color: Color = color.parse()?;
        self.game.create_player(name, color)?;
        Ok(())
    }

    /// Validates and applies one move, returning the mover's cumulative
    /// captured-piece count.
    pub fn submit_move(
        &mut self,
        name: &str,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<u8, JsError> {
        Ok(self.game.submit_move(
            name,
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        )?)
    }

    /// The full match snapshot as a plain JS object.
    pub fn game_state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    /// The winner's name, or `"Game has not ended"` while play continues.
    pub fn game_winner(&self) -> String {
        self.game
            .winner()
            .unwrap_or("Game has not ended")
            .to_string()
    }

    pub fn king_count(&self, name: &str) -> Result<u8, JsError> {
        Ok(self.game.player(name)?.king_count())
    }

    pub fn triple_king_count(&self, name: &str) -> Result<u8, JsError> {
        Ok(self.game.player(name)?.triple_king_count())
    }

    pub fn captured_count(&self, name: &str) -> Result<u8, JsError> {
        Ok(self.game.player(name)?.captured_count())
    }
}

impl Default for WasmCheckers {
    fn default() -> Self {
        Self::new()
    }
}
