use quoridor_engine::{Action, Bot, Game, GameState, Player};

use crate::common::{assert_fair, game};

const MAX_PLIES: usize = 500;

struct Outcome {
    actions: Vec<Action>,
    state: GameState,
}

/// Two seeded bots play each other, checking the rules after every ply.
fn bot_match(mut game: Game, seed: u64) -> Outcome {
    let mut bots = [Bot::seeded(Player::One, seed), Bot::seeded(Player::Two, seed + 1)];
    let mut actions = Vec::new();

    while game.state().is_ongoing() && actions.len() < MAX_PLIES {
        let player = game.turn();
        let fences_before = game.fences().len();

        let action = bots[player.index()]
            .play(&mut game)
            .unwrap_or_else(|e| panic!("seed {seed}, ply {}: {e}", actions.len()));

        assert_eq!(game.turn(), player.opp());
        match action {
            Action::Move(tile) => {
                assert_eq!(game.pawn(player), tile);
                assert_eq!(game.fences().len(), fences_before);
            }
            Action::Fence(fence) => {
                assert!(game.fences().contains(fence));
                assert_eq!(game.fences().len(), fences_before + 1);
            }
        }
        assert_fair(&game);
        actions.push(action);
    }

    Outcome {
        actions,
        state: game.state(),
    }
}

#[test]
fn standard_games_follow_the_rules() {
    let mut finished = 0;
    for seed in 0..6 {
        let outcome = bot_match(Game::standard(), seed * 17);
        let fences = outcome.actions.iter().filter(|a| a.is_fence()).count();
        assert!(fences <= 20);
        if !outcome.state.is_ongoing() {
            finished += 1;
        }
    }
    assert!(finished > 0);
}

#[test]
fn small_board_games_follow_the_rules() {
    for seed in 0..6 {
        bot_match(game(5, 3), seed);
    }
}

#[test]
fn same_seeds_replay_the_same_game() {
    let first = bot_match(Game::standard(), 42);
    let second = bot_match(Game::standard(), 42);
    assert_eq!(first.actions, second.actions);
    assert_eq!(first.state, second.state);
}

#[test]
fn bot_stops_once_the_game_is_over() {
    let outcome = bot_match(game(3, 0), 5);
    assert!(!outcome.state.is_ongoing());

    let mut game = game(3, 0);
    for action in &outcome.actions {
        game.apply(game.turn(), action).unwrap();
    }
    let mut bot = Bot::seeded(game.turn(), 1);
    assert!(bot.play(&mut game).is_err());
}
