//! Shortest paths and fence scoring for the bot.
//!
//! Everything here reads a [`MoveContext`] or a `&Game` and never mutates
//! anything, so it is safe to call once per candidate fence.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use rand::RngExt;
use tracing::trace;

use crate::board::Tile;
use crate::engine::Game;
use crate::fence::{Alignment, FenceSegment};
use crate::legality::{MoveContext, reachable_tiles};
use crate::player::Player;

/// Number of steps from `from` to the nearest goal tile, or `None` when no
/// goal tile can be reached.
pub fn distance(
    ctx: &MoveContext<'_>,
    player: Player,
    from: Tile,
    consider_occupancy: bool,
) -> Option<u32> {
    let board = ctx.board;
    if !board.in_bounds(from) {
        return None;
    }

    let mut visited = vec![false; board.tile_count()];
    visited[board.idx(from)] = true;
    let mut frontier = vec![from];
    let mut depth = 0;

    while !frontier.is_empty() {
        if frontier.iter().any(|&t| board.is_goal_tile(player, t)) {
            return Some(depth);
        }

        let mut next_layer = Vec::new();
        for &tile in &frontier {
            for next in reachable_tiles(ctx, player, tile, consider_occupancy) {
                let i = board.idx(next);
                if !visited[i] {
                    visited[i] = true;
                    next_layer.push(next);
                }
            }
        }

        frontier = next_layer;
        depth += 1;
    }

    None
}

/// Shortest route to the goal, always taking the first improving step in
/// scan order. Starts with `from`.
pub fn optimal_path(
    ctx: &MoveContext<'_>,
    player: Player,
    from: Tile,
    consider_occupancy: bool,
) -> Vec<Tile> {
    walk(ctx, player, from, consider_occupancy, |steps| steps.first().copied())
}

/// Shortest route to the goal, choosing uniformly among improving steps.
pub fn random_optimal_path<R: RngExt>(
    ctx: &MoveContext<'_>,
    player: Player,
    from: Tile,
    consider_occupancy: bool,
    rng: &mut R,
) -> Vec<Tile> {
    walk(ctx, player, from, consider_occupancy, |steps| {
        if steps.is_empty() {
            None
        } else {
            Some(steps[rng.random_range(0..steps.len())])
        }
    })
}

/// Greedy descent over `distance`. Stops on a goal tile, or early when no
/// step improves or some neighbour's distance is unknown.
fn walk(
    ctx: &MoveContext<'_>,
    player: Player,
    from: Tile,
    consider_occupancy: bool,
    mut pick: impl FnMut(&[Tile]) -> Option<Tile>,
) -> Vec<Tile> {
    let mut path = vec![from];
    let mut current = from;

    while !ctx.board.is_goal_tile(player, current) {
        let Some(here) = distance(ctx, player, current, consider_occupancy) else {
            break;
        };

        let mut improving = ArrayVec::<Tile, 6>::new();
        for next in reachable_tiles(ctx, player, current, consider_occupancy) {
            match distance(ctx, player, next, consider_occupancy) {
                Some(d) if d < here => improving.push(next),
                Some(_) => {}
                None => return path,
            }
        }

        let Some(next) = pick(&improving) else {
            break;
        };
        path.push(next);
        current = next;
    }

    path
}

/// Candidate fences grouped by score: how many steps a fence adds to the
/// opponent's shortest path minus how many it adds to our own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceScores {
    groups: BTreeMap<i32, Vec<FenceSegment>>,
}

impl FenceScores {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of scored candidates.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Highest score and the fences that reach it, in scan order.
    pub fn best(&self) -> Option<(i32, &[FenceSegment])> {
        self.groups
            .last_key_value()
            .map(|(&score, fences)| (score, fences.as_slice()))
    }

    /// Every candidate, highest score first.
    pub fn ranked(&self) -> impl Iterator<Item = FenceSegment> + '_ {
        self.groups.values().rev().flatten().copied()
    }

    fn push(&mut self, score: i32, fence: FenceSegment) {
        self.groups.entry(score).or_default().push(fence);
    }
}

/// Score every placeable, fair fence for `player`. Distances ignore pawns.
pub fn evaluate_fences(game: &Game, player: Player) -> FenceScores {
    let opponent = player.opp();
    let mut scores = FenceScores::default();

    let base = game.context(None);
    let (Some(their_before), Some(our_before)) = (
        distance(&base, opponent, game.pawn(opponent), false),
        distance(&base, player, game.pawn(player), false),
    ) else {
        return scores;
    };

    for anchor in game.board().tiles() {
        for alignment in Alignment::ALL {
            let fence = FenceSegment::new(alignment, anchor);
            if game.fences().contains(fence) || !game.is_fair(fence) {
                continue;
            }

            let ctx = game.context(Some(fence));
            let (Some(their_after), Some(our_after)) = (
                distance(&ctx, opponent, game.pawn(opponent), false),
                distance(&ctx, player, game.pawn(player), false),
            ) else {
                continue;
            };

            let gain = their_after as i32 - their_before as i32;
            let cost = our_after as i32 - our_before as i32;
            scores.push(gain - cost, fence);
        }
    }

    trace!(
        %player,
        candidates = scores.len(),
        best = ?scores.best().map(|(score, _)| score),
        "fences evaluated"
    );
    scores
}

#[cfg(test)]
impl FenceScores {
    fn score_of(&self, fence: FenceSegment) -> Option<i32> {
        self.groups
            .iter()
            .find(|(_, fences)| fences.contains(&fence))
            .map(|(&score, _)| score)
    }
}
