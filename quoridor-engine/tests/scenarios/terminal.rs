use quoridor_engine::{Alignment, Game, GameState, Player, QuoridorError};

use crate::common::{game, h, m, play, t};

fn finished_game() -> Game {
    let mut game = Game::standard();
    play(&mut game, &[m(3, 0), m(5, 8)]);
    for row in 1..9 {
        play(&mut game, &[m(3, row)]);
        if row < 8 {
            play(&mut game, &[m(5, 8 - row)]);
        }
    }
    game
}

/// Player 2 boxed in beside Player 1 after both budgets are spent.
fn stalemated_game() -> Game {
    let mut game = game(3, 1);
    play(
        &mut game,
        &[m(1, 1), m(0, 2), m(2, 1), m(0, 1), m(1, 1), h(0, 1), h(0, 2)],
    );
    game
}

#[test]
fn winning_move_still_passes_the_turn() {
    let game = finished_game();
    assert_eq!(game.state(), GameState::Player1Win);
    assert_eq!(game.turn(), Player::Two);
}

#[test]
fn finished_game_refuses_everything() {
    let mut game = finished_game();
    let before = game.snapshot();

    for player in Player::ALL {
        assert_eq!(
            game.try_move(player, t(5, 0)),
            Err(QuoridorError::GameAlreadyOver)
        );
        assert_eq!(
            game.try_place_fence(player, Alignment::Vertical, t(2, 2)),
            Err(QuoridorError::GameAlreadyOver)
        );
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn snapshot_json_is_stable() {
    let game = finished_game();
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["state"], "player_1_win");
    assert_eq!(json["turn"], 2);
    assert_eq!(json["pawns"]["player1"], serde_json::json!({"col": 3, "row": 8}));
}

#[test]
fn stalemate_refuses_everything() {
    let mut game = stalemated_game();
    assert_eq!(game.state(), GameState::Stalemate);
    assert_eq!(game.turn(), Player::Two);
    let before = game.snapshot();

    for player in Player::ALL {
        assert_eq!(
            game.try_move(player, t(1, 2)),
            Err(QuoridorError::GameAlreadyOver)
        );
        assert_eq!(
            game.try_place_fence(player, Alignment::Vertical, t(2, 1)),
            Err(QuoridorError::GameAlreadyOver)
        );
        assert!(!game.move_pawn(player, t(2, 2)));
    }
    assert_eq!(game.snapshot(), before);
    assert!(game.legal_moves(Player::Two).is_empty());
}
