use std::collections::VecDeque;

use crate::board::Tile;
use crate::legality::{MoveContext, reachable_tiles};
use crate::player::Player;

/// Fair-play check: can `player` still walk from their pawn to any tile of
/// their goal row? Pawns are ignored, so jumps never matter here.
pub fn has_path_to_goal(ctx: &MoveContext<'_>, player: Player) -> bool {
    reaches_goal_from(ctx, player, ctx.pawns.get(player))
}

/// Flood fill from `from` until a goal tile turns up or the region is
/// exhausted.
pub fn reaches_goal_from(ctx: &MoveContext<'_>, player: Player, from: Tile) -> bool {
    let board = ctx.board;
    if !board.in_bounds(from) {
        return false;
    }

    let mut visited = vec![false; board.tile_count()];
    let mut queue = VecDeque::from([from]);
    visited[board.idx(from)] = true;

    while let Some(tile) = queue.pop_front() {
        if board.is_goal_tile(player, tile) {
            return true;
        }
        for next in reachable_tiles(ctx, player, tile, false) {
            let i = board.idx(next);
            if !visited[i] {
                visited[i] = true;
                queue.push_back(next);
            }
        }
    }

    false
}
