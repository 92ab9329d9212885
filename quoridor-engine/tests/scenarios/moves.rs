use quoridor_engine::{Game, GameState, Player, QuoridorError};

use crate::common::{game, m, play, t};

/// Player 1 opens, then tries to move again before Player 2.
#[test]
fn opening_move_then_out_of_turn() {
    let mut game = Game::standard();
    assert_eq!(game.pawn(Player::One), t(4, 0));
    assert_eq!(game.pawn(Player::Two), t(4, 8));

    assert!(game.move_pawn(Player::One, t(4, 1)));
    assert_eq!(game.turn(), Player::Two);

    let before = game.snapshot();
    assert_eq!(
        game.try_move(Player::One, t(4, 2)),
        Err(QuoridorError::OutOfTurn)
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = Game::standard();
    let before = game.snapshot();

    // Two rows at once.
    assert_eq!(
        game.try_move(Player::One, t(4, 2)),
        Err(QuoridorError::NotReachable)
    );
    // Diagonal without a pawn to jump.
    assert_eq!(
        game.try_move(Player::One, t(5, 1)),
        Err(QuoridorError::NotReachable)
    );
    assert_eq!(
        game.try_move(Player::One, t(9, 0)),
        Err(QuoridorError::OutOfBounds)
    );
    assert!(!game.move_pawn(Player::One, t(4, 0)));

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.turn(), Player::One);
}

#[test]
fn facing_pawns_jump_only_forward() {
    let mut game = Game::standard();
    play(
        &mut game,
        &[m(4, 1), m(4, 7), m(4, 2), m(4, 6), m(4, 3), m(4, 5), m(4, 4)],
    );
    assert_eq!(game.turn(), Player::Two);

    // Player 2 faces up into Player 1 and may hop over it.
    let moves = game.legal_moves(Player::Two);
    assert!(moves.contains(&t(4, 3)));
    assert!(!moves.contains(&t(4, 4)));

    play(&mut game, &[m(4, 3)]);

    // Player 1 faces down; the pawn behind it blocks and cannot be jumped.
    let moves = game.legal_moves(Player::One);
    assert!(!moves.contains(&t(4, 3)));
    assert!(!moves.contains(&t(4, 2)));
    assert_eq!(moves.len(), 3);
}

#[test]
fn racing_down_a_free_column_wins() {
    let mut game = Game::standard();
    play(&mut game, &[m(3, 0), m(5, 8)]);
    for row in 1..8 {
        play(&mut game, &[m(3, row), m(5, 8 - row)]);
    }
    assert_eq!(game.pawn(Player::Two), t(5, 1));

    let state = play(&mut game, &[m(3, 8)]);
    assert_eq!(state, GameState::Player1Win);
    assert_eq!(state.winner(), Some(Player::One));
}

#[test]
fn turn_alternates_and_holds_on_rejection() {
    let mut game = game(5, 2);
    let mut expected = Player::One;
    let attempts = [
        (t(2, 1), true),
        (t(2, 3), true),
        (t(0, 0), false),
        (t(1, 1), true),
        (t(2, 3), false),
        (t(3, 3), true),
    ];
    for (target, ok) in attempts {
        let player = game.turn();
        assert_eq!(player, expected);
        assert_eq!(game.move_pawn(player, target), ok, "{player} to {target}");
        if ok {
            expected = expected.opp();
        }
        assert_eq!(game.turn(), expected);
    }
}
