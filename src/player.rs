use crate::types::Color;

/// Per-player record: identity plus the three counters the move engine
/// maintains. Counters only ever increase during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    kings: u8,
    triple_kings: u8,
    captured: u8,
}

impl Player {
    pub(crate) fn new(name: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            color,
            kings: 0,
            triple_kings: 0,
            captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn king_count(&self) -> u8 {
        self.kings
    }

    pub fn triple_king_count(&self) -> u8 {
        self.triple_kings
    }

    pub fn captured_count(&self) -> u8 {
        self.captured
    }

    pub(crate) fn add_king(&mut self) {
        self.kings += 1;
    }

    pub(crate) fn add_triple_king(&mut self) {
        self.triple_kings += 1;
    }

    pub(crate) fn add_captured(&mut self) {
        self.captured += 1;
    }
}
