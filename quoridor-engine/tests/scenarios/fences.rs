use quoridor_engine::{
    Alignment, FenceOutcome, FenceSegment, Game, GameState, Player, QuoridorError,
};

use crate::common::{assert_fair, game, h, m, play, t, v};

#[test]
fn same_fence_twice() {
    let mut game = Game::standard();
    assert_eq!(
        game.place_fence(Player::One, Alignment::Vertical, t(4, 4)),
        FenceOutcome::Accepted
    );
    assert_eq!(
        game.try_place_fence(Player::Two, Alignment::Vertical, t(4, 4)),
        Err(QuoridorError::FenceAlreadyPlaced)
    );
    assert_eq!(game.turn(), Player::Two);
    assert_eq!(game.fences_remaining(Player::Two), 10);

    // The other alignment on the same anchor is a different edge.
    assert_eq!(
        game.place_fence(Player::Two, Alignment::Horizontal, t(4, 4)),
        FenceOutcome::Accepted
    );
}

#[test]
fn border_and_off_board_anchors() {
    let mut game = Game::standard();
    assert_eq!(
        game.try_place_fence(Player::One, Alignment::Vertical, t(0, 3)),
        Err(QuoridorError::FenceAlreadyPlaced)
    );
    assert_eq!(
        game.try_place_fence(Player::One, Alignment::Horizontal, t(6, 0)),
        Err(QuoridorError::FenceAlreadyPlaced)
    );
    assert_eq!(
        game.try_place_fence(Player::One, Alignment::Vertical, t(9, 2)),
        Err(QuoridorError::OutOfBounds)
    );
    assert_eq!(
        game.place_fence(Player::One, Alignment::Horizontal, t(2, 9)),
        FenceOutcome::RejectedIllegal
    );
    assert_eq!(game.fences_remaining(Player::One), 10);
    assert!(game.fences().is_empty());
}

/// Closing the last side of a box around Player 1's start tile.
#[test]
fn enclosing_ring_breaks_fair_play() {
    let mut game = Game::standard();
    play(&mut game, &[v(4, 0), v(5, 0)]);
    let before = game.snapshot();

    let err = game
        .try_place_fence(Player::One, Alignment::Horizontal, t(4, 1))
        .unwrap_err();
    assert_eq!(err, QuoridorError::BreaksFairPlay);
    assert!(err.is_fair_play_violation());
    assert_eq!(
        game.place_fence(Player::One, Alignment::Horizontal, t(4, 1)),
        FenceOutcome::RejectedUnfair
    );

    assert_eq!(game.snapshot(), before);
    assert!(!game.fences().contains(FenceSegment::horizontal(t(4, 1))));
    assert_fair(&game);
}

/// A wall across the board may leave one gap but never close it.
#[test]
fn wall_keeps_its_last_gap() {
    let mut game = Game::standard();
    for col in 0..8 {
        play(&mut game, &[h(col, 4)]);
        assert_fair(&game);
    }
    assert_eq!(game.fences_remaining(Player::One), 6);
    assert_eq!(game.fences_remaining(Player::Two), 6);

    let player = game.turn();
    assert_eq!(
        game.place_fence(player, Alignment::Horizontal, t(8, 4)),
        FenceOutcome::RejectedUnfair
    );
    assert_eq!(game.fences().horizontal().len(), 8);
}

#[test]
fn budget_runs_out() {
    let mut game = game(5, 1);
    play(&mut game, &[v(1, 1), v(3, 3)]);
    assert_eq!(
        game.try_place_fence(Player::One, Alignment::Horizontal, t(2, 2)),
        Err(QuoridorError::FenceBudgetExhausted)
    );
    // Moving is still fine.
    play(&mut game, &[m(2, 1)]);
    assert_eq!(game.fences_remaining(Player::One), 0);
    assert_eq!(game.fences_remaining(Player::Two), 0);
}

/// Player 2 is boxed in beside Player 1 with no fences left.
#[test]
fn walled_in_without_fences_is_stalemate() {
    let mut game = game(3, 1);
    play(
        &mut game,
        &[m(1, 1), m(0, 2), m(2, 1), m(0, 1), m(1, 1), h(0, 1)],
    );
    assert_eq!(game.state(), GameState::Ongoing);
    assert_eq!(game.fences_remaining(Player::Two), 0);

    let state = play(&mut game, &[h(0, 2)]);
    assert_eq!(state, GameState::Stalemate);
    assert_eq!(state.winner(), None);
    assert!(game.legal_moves(Player::Two).is_empty());
    assert!(!game.has_legal_action(Player::Two));
    assert_fair(&game);
}
