//! One-step pawn reachability.
//!
//! The engine and the bot both go through [`reachable_tiles`], so a search
//! can never consider a step that the engine would refuse.

use arrayvec::ArrayVec;

use crate::board::{Board, Pawns, Tile};
use crate::fence::FenceView;
use crate::player::Player;

/// At most three plain steps plus two diagonals around the opponent.
pub type Reachable = ArrayVec<Tile, 6>;

/// Everything needed to evaluate a step: the grid, a fence set (possibly
/// holding one hypothetical fence) and where both pawns stand.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub board: Board,
    pub fences: FenceView<'a>,
    pub pawns: Pawns,
}

impl MoveContext<'_> {
    pub fn reachable(&self, player: Player, from: Tile, consider_occupancy: bool) -> Reachable {
        reachable_tiles(self, player, from, consider_occupancy)
    }
}

/// Tiles `player` can reach from `from` in one action.
///
/// With `consider_occupancy` the opponent's pawn cannot be entered. Only a
/// pawn advancing toward the opponent (Player 1 moving down, Player 2 moving
/// up) may jump it: straight over when the edge behind is open, otherwise to
/// either side. Without it, the opponent's tile is an ordinary open tile,
/// which is what connectivity and distance searches want.
pub fn reachable_tiles(
    ctx: &MoveContext<'_>,
    player: Player,
    from: Tile,
    consider_occupancy: bool,
) -> Reachable {
    let opponent = ctx.pawns.get(player.opp());
    let mut result = Reachable::new();

    for (dir, next) in ctx.board.neighbors(from) {
        if ctx.fences.blocks(from, dir) {
            continue;
        }
        if !consider_occupancy || next != opponent {
            result.push(next);
            continue;
        }
        if dir != player.forward() {
            continue;
        }

        let straight = ctx
            .board
            .step(next, dir)
            .filter(|_| !ctx.fences.blocks(next, dir));
        match straight {
            Some(landing) => result.push(landing),
            None => {
                for side in dir.lateral() {
                    if ctx.fences.blocks(next, side) {
                        continue;
                    }
                    if let Some(diagonal) = ctx.board.step(next, side) {
                        result.push(diagonal);
                    }
                }
            }
        }
    }

    result
}
