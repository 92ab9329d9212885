use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Direction, Tile};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

impl Alignment {
    pub const ALL: [Alignment; 2] = [Alignment::Vertical, Alignment::Horizontal];

    pub fn letter(self) -> &'static str {
        match self {
            Alignment::Vertical => "v",
            Alignment::Horizontal => "h",
        }
    }
}

impl std::str::FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v" | "vertical" => Ok(Alignment::Vertical),
            "h" | "horizontal" => Ok(Alignment::Horizontal),
            _ => Err(format!("invalid alignment: {s}")),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// A fence on one tile edge. Vertical fences sit on the anchor's left edge,
/// horizontal fences on its top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FenceSegment {
    pub alignment: Alignment,
    pub anchor: Tile,
}

impl FenceSegment {
    pub fn new(alignment: Alignment, anchor: Tile) -> Self {
        FenceSegment { alignment, anchor }
    }

    pub fn vertical(anchor: Tile) -> Self {
        Self::new(Alignment::Vertical, anchor)
    }

    pub fn horizontal(anchor: Tile) -> Self {
        Self::new(Alignment::Horizontal, anchor)
    }

    /// The segment on the edge crossed when leaving `from` in `direction`.
    pub fn crossing(from: Tile, direction: Direction) -> Self {
        let Tile { col, row } = from;
        match direction {
            Direction::Up => Self::horizontal(from),
            Direction::Down => Self::horizontal(Tile::new(col, row.saturating_add(1))),
            Direction::Left => Self::vertical(from),
            Direction::Right => Self::vertical(Tile::new(col.saturating_add(1), row)),
        }
    }
}

impl fmt::Display for FenceSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.alignment, self.anchor)
    }
}

/// Fences left in each player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FenceBudget {
    pub player1: u8,
    pub player2: u8,
}

impl FenceBudget {
    pub fn new(count: u8) -> Self {
        FenceBudget {
            player1: count,
            player2: count,
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Take one fence from the player's hand. Returns false if none are left.
    pub(crate) fn spend(&mut self, player: Player) -> bool {
        let count = match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        };
        match count.checked_sub(1) {
            Some(left) => {
                *count = left;
                true
            }
            None => false,
        }
    }
}

/// Every fence on the board: the fixed border around the grid plus the
/// player-placed segments, in placement order.
#[derive(Debug, Clone, PartialEq)]
pub struct FenceLedger {
    size: u8,
    vertical: Vec<Tile>,
    horizontal: Vec<Tile>,
    placed: HashSet<FenceSegment>,
    border: Vec<FenceSegment>,
}

impl FenceLedger {
    pub fn new(size: u8) -> Self {
        let mut border = Vec::with_capacity(4 * (size as usize + 1));
        for i in 0..=size {
            border.push(FenceSegment::vertical(Tile::new(0, i)));
        }
        for i in 0..=size {
            border.push(FenceSegment::vertical(Tile::new(size, i)));
        }
        for i in 0..=size {
            border.push(FenceSegment::horizontal(Tile::new(i, 0)));
            border.push(FenceSegment::horizontal(Tile::new(i, size)));
        }

        FenceLedger {
            size,
            vertical: Vec::new(),
            horizontal: Vec::new(),
            placed: HashSet::new(),
            border,
        }
    }

    // -- Accessors --

    /// Anchors of player-placed vertical fences.
    pub fn vertical(&self) -> &[Tile] {
        &self.vertical
    }

    /// Anchors of player-placed horizontal fences.
    pub fn horizontal(&self) -> &[Tile] {
        &self.horizontal
    }

    pub fn border(&self) -> &[FenceSegment] {
        &self.border
    }

    pub fn placed(&self) -> impl Iterator<Item = FenceSegment> + '_ {
        let vertical = self.vertical.iter().map(|&t| FenceSegment::vertical(t));
        let horizontal = self.horizontal.iter().map(|&t| FenceSegment::horizontal(t));
        vertical.chain(horizontal)
    }

    /// Number of player-placed fences.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn is_border(&self, fence: FenceSegment) -> bool {
        let Tile { col, row } = fence.anchor;
        if col > self.size || row > self.size {
            return false;
        }
        match fence.alignment {
            Alignment::Vertical => col == 0 || col == self.size,
            Alignment::Horizontal => row == 0 || row == self.size,
        }
    }

    pub fn contains(&self, fence: FenceSegment) -> bool {
        self.is_border(fence) || self.placed.contains(&fence)
    }

    /// Whether a fence blocks leaving `from` in `direction`.
    pub fn blocks(&self, from: Tile, direction: Direction) -> bool {
        self.contains(FenceSegment::crossing(from, direction))
    }

    /// This ledger plus, optionally, one fence that has not been placed.
    pub fn with(&self, hypothetical: Option<FenceSegment>) -> FenceView<'_> {
        FenceView {
            ledger: self,
            hypothetical,
        }
    }

    /// Record a fence. Returns false, leaving the ledger untouched, if the
    /// edge is already fenced.
    pub(crate) fn insert(&mut self, fence: FenceSegment) -> bool {
        if self.contains(fence) {
            return false;
        }
        match fence.alignment {
            Alignment::Vertical => self.vertical.push(fence.anchor),
            Alignment::Horizontal => self.horizontal.push(fence.anchor),
        }
        self.placed.insert(fence);
        true
    }
}

/// A read-only fence set: the real ledger with at most one extra segment.
#[derive(Debug, Clone, Copy)]
pub struct FenceView<'a> {
    ledger: &'a FenceLedger,
    hypothetical: Option<FenceSegment>,
}

impl FenceView<'_> {
    pub fn contains(&self, fence: FenceSegment) -> bool {
        self.hypothetical == Some(fence) || self.ledger.contains(fence)
    }

    pub fn blocks(&self, from: Tile, direction: Direction) -> bool {
        self.contains(FenceSegment::crossing(from, direction))
    }
}
