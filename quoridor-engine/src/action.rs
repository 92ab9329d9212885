use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Tile;
use crate::fence::{Alignment, FenceSegment};

/// One committed turn: a pawn move or a fence placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Move(Tile),
    Fence(FenceSegment),
}

impl Action {
    pub fn pawn(col: u8, row: u8) -> Self {
        Action::Move(Tile::new(col, row))
    }

    pub fn fence(alignment: Alignment, col: u8, row: u8) -> Self {
        Action::Fence(FenceSegment::new(alignment, Tile::new(col, row)))
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }

    pub fn is_fence(&self) -> bool {
        matches!(self, Action::Fence(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(tile) => write!(f, "move {tile}"),
            Action::Fence(fence) => write!(f, "fence {fence}"),
        }
    }
}
