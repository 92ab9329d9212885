use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::debug;

use crate::action::Action;
use crate::board::Tile;
use crate::engine::Game;
use crate::error::BotError;
use crate::fence::FenceSegment;
use crate::player::Player;
use crate::search;

/// Net steps a fence must cost the opponent, beyond what it costs the bot,
/// before the bot will spend it.
pub const FENCE_GAIN_THRESHOLD: i32 = 1;

/// Which rule produced a plan, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The next step lands on the goal row.
    Win,
    /// The opponent was one step from winning.
    BlockWin,
    /// A fence scored above the threshold.
    BestFence,
    /// The next step would put the bot right in front of the opponent.
    BlockApproach,
    /// Plain step along the shortest path.
    Advance,
    /// The pawn cannot move, so a fence is the only option.
    Forced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub action: Action,
    /// Move to make instead if the engine refuses `action`.
    pub fallback: Option<Tile>,
    pub reason: Reason,
}

/// Automated opponent. Reads the game freely but only changes it through
/// the same commands a human uses.
#[derive(Debug)]
pub struct Bot {
    player: Player,
    rng: StdRng,
}

impl Bot {
    pub fn new(player: Player) -> Self {
        Self::seeded(player, rand::rng().random_range(0..=u64::MAX))
    }

    /// A bot whose choices are reproducible.
    pub fn seeded(player: Player, seed: u64) -> Self {
        Bot {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Choose an action without touching the game. `None` only when the bot
    /// can neither move nor place a fence.
    pub fn plan(&mut self, game: &Game) -> Option<Plan> {
        let me = self.player;
        let opponent = me.opp();
        let board = *game.board();
        let ctx = game.context(None);

        let own_path = search::random_optimal_path(&ctx, me, game.pawn(me), true, &mut self.rng);
        let their_path = search::optimal_path(&ctx, opponent, game.pawn(opponent), true);
        let next = match own_path.get(1) {
            Some(&tile) => Some(tile),
            None => self.random_move(game, me),
        };
        let their_next = match their_path.get(1) {
            Some(&tile) => Some(tile),
            None => self.random_move(game, opponent),
        };

        if let Some(tile) = next.filter(|&t| board.is_goal_tile(me, t)) {
            return Some(Plan {
                action: Action::Move(tile),
                fallback: None,
                reason: Reason::Win,
            });
        }

        if game.fences_remaining(me) > 0 {
            let block = FenceSegment::crossing(game.pawn(opponent), opponent.forward());

            if their_next.is_some_and(|t| board.is_goal_tile(opponent, t)) {
                return Some(Plan {
                    action: Action::Fence(block),
                    fallback: next,
                    reason: Reason::BlockWin,
                });
            }

            let scores = search::evaluate_fences(game, me);
            if let Some((score, fences)) = scores.best()
                && score > FENCE_GAIN_THRESHOLD
            {
                let fence = fences[self.rng.random_range(0..fences.len())];
                debug!(player = %me, score, choices = fences.len(), "fence above threshold");
                return Some(Plan {
                    action: Action::Fence(fence),
                    fallback: next,
                    reason: Reason::BestFence,
                });
            }

            let front = board.step(game.pawn(opponent), opponent.forward());
            if next.is_some() && next == front {
                return Some(Plan {
                    action: Action::Fence(block),
                    fallback: next,
                    reason: Reason::BlockApproach,
                });
            }

            if next.is_none()
                && let Some((_, fences)) = scores.best()
            {
                return Some(Plan {
                    action: Action::Fence(fences[0]),
                    fallback: None,
                    reason: Reason::Forced,
                });
            }
        }

        next.map(|tile| Plan {
            action: Action::Move(tile),
            fallback: None,
            reason: Reason::Advance,
        })
    }

    /// Plan and commit one action. A refused plan falls back to a plain move,
    /// or to the best fair fence when the pawn cannot move.
    pub fn play(&mut self, game: &mut Game) -> Result<Action, BotError> {
        let me = self.player;
        game.ensure_can_act(me)?;

        let plan = self.plan(game).ok_or(BotError::NoLegalMove)?;
        debug!(player = %me, action = %plan.action, reason = ?plan.reason, "bot decided");

        match game.apply(me, &plan.action) {
            Ok(_) => return Ok(plan.action),
            Err(e) => {
                debug!(player = %me, action = %plan.action, error = %e, "bot action refused, falling back");
            }
        }

        let candidates = plan.fallback.into_iter().chain(game.legal_moves(me));
        for tile in candidates {
            if game.try_move(me, tile).is_ok() {
                return Ok(Action::Move(tile));
            }
        }

        // Pawn is stuck; any fair fence still keeps the game going.
        if game.fences_remaining(me) > 0 {
            for fence in search::evaluate_fences(game, me).ranked() {
                if game.try_place_fence(me, fence.alignment, fence.anchor).is_ok() {
                    return Ok(Action::Fence(fence));
                }
            }
        }

        Err(BotError::NoLegalMove)
    }

    fn random_move(&mut self, game: &Game, player: Player) -> Option<Tile> {
        let moves = game.legal_moves(player);
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.random_range(0..moves.len())])
        }
    }
}
