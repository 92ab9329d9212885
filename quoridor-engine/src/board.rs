use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::player::Player;

/// A board coordinate, `(column, row)`. Row 0 is Player 1's starting edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub col: u8,
    pub row: u8,
}

impl Tile {
    pub const fn new(col: u8, row: u8) -> Self {
        Tile { col, row }
    }
}

impl From<(u8, u8)> for Tile {
    fn from((col, row): (u8, u8)) -> Self {
        Tile { col, row }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Scan order used everywhere moves are enumerated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The two directions perpendicular to this one, left-hand side first.
    pub fn lateral(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }
}

/// The square playing grid. Holds nothing but its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
}

impl Board {
    pub fn new(size: u8) -> Self {
        Board { size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn tile_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    pub fn in_bounds(&self, tile: Tile) -> bool {
        tile.col < self.size && tile.row < self.size
    }

    /// The neighbouring tile in `direction`, if it is on the board.
    pub fn step(&self, tile: Tile, direction: Direction) -> Option<Tile> {
        let (dc, dr) = direction.delta();
        let col = tile.col as i16 + dc;
        let row = tile.row as i16 + dr;
        let size = self.size as i16;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Tile::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// 4-connected neighbours in scan order, ignoring fences.
    pub fn neighbors(&self, tile: Tile) -> ArrayVec<(Direction, Tile), 4> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.step(tile, dir).map(|next| (dir, next)))
            .collect()
    }

    pub fn goal_row(&self, player: Player) -> u8 {
        match player {
            Player::One => self.size.saturating_sub(1),
            Player::Two => 0,
        }
    }

    pub fn is_goal_tile(&self, player: Player, tile: Tile) -> bool {
        self.in_bounds(tile) && tile.row == self.goal_row(player)
    }

    /// Midpoint of the player's home edge.
    pub fn start_tile(&self, player: Player) -> Tile {
        let col = self.size / 2;
        match player {
            Player::One => Tile::new(col, 0),
            Player::Two => Tile::new(col, self.size.saturating_sub(1)),
        }
    }

    /// Every tile, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        let size = self.size;
        (0..size).flat_map(move |col| (0..size).map(move |row| Tile::new(col, row)))
    }

    #[inline]
    pub(crate) fn idx(&self, tile: Tile) -> usize {
        tile.row as usize * self.size as usize + tile.col as usize
    }
}

/// Both pawn positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pawns {
    pub player1: Tile,
    pub player2: Tile,
}

impl Pawns {
    pub fn starting(board: &Board) -> Self {
        Pawns {
            player1: board.start_tile(Player::One),
            player2: board.start_tile(Player::Two),
        }
    }

    pub fn get(&self, player: Player) -> Tile {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub(crate) fn set(&mut self, player: Player, tile: Tile) {
        match player {
            Player::One => self.player1 = tile,
            Player::Two => self.player2 = tile,
        }
    }

    /// The player standing on `tile`, if any.
    pub fn occupant(&self, tile: Tile) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.get(p) == tile)
    }
}
