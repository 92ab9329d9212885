#![allow(dead_code)]

use quoridor_engine::{Action, Alignment, Game, GameConfig, GameState, Player, Tile, reach};

pub fn t(col: u8, row: u8) -> Tile {
    Tile::new(col, row)
}

pub fn game(grid_size: u8, fence_count: u8) -> Game {
    Game::new(GameConfig::new(grid_size, fence_count).unwrap()).unwrap()
}

/// Play `actions` in order, each by whoever is to move. Panics on the first refusal.
pub fn play(game: &mut Game, actions: &[Action]) -> GameState {
    let mut state = game.state();
    for action in actions {
        let player = game.turn();
        state = game
            .apply(player, action)
            .unwrap_or_else(|e| panic!("{player} could not play {action}: {e}"));
    }
    state
}

pub fn m(col: u8, row: u8) -> Action {
    Action::pawn(col, row)
}

pub fn v(col: u8, row: u8) -> Action {
    Action::fence(Alignment::Vertical, col, row)
}

pub fn h(col: u8, row: u8) -> Action {
    Action::fence(Alignment::Horizontal, col, row)
}

/// Both players can still reach their goal row.
pub fn assert_fair(game: &Game) {
    let ctx = game.context(None);
    for player in Player::ALL {
        assert!(reach::has_path_to_goal(&ctx, player), "{player} is cut off");
    }
}
