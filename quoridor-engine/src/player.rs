use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

use crate::board::Direction;

/// One of the two seats at the board. Serialized as its number (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index, for per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opp(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The direction this player advances in. Player 1 starts on row 0 and
    /// heads down the board; Player 2 heads up.
    pub fn forward(self) -> Direction {
        match self {
            Player::One => Direction::Down,
            Player::Two => Direction::Up,
        }
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
