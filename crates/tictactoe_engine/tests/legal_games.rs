//! Properties checked over every reachable game.
//!
//! The full game tree is small enough to walk exhaustively, so these tests
//! visit every sequence of legal moves instead of sampling.

use tictactoe_engine::{
    AdapterEvent, Board, GameEngine, GameStatus, Player, Presenter, check_winner, is_full,
};

/// Calls `visit` on every engine state reachable by legal play, including the start.
fn walk(engine: &GameEngine, visit: &mut impl FnMut(&GameEngine)) {
    visit(engine);
    if engine.status().is_over() {
        return;
    }
    for index in 0..9 {
        if engine.board().is_empty(index) {
            let mut next = engine.clone();
            assert!(next.play_move(index).is_placed());
            next.validate_result();
            walk(&next, visit);
        }
    }
}

#[test]
fn test_mark_counts_stay_balanced() {
    walk(&GameEngine::new(), &mut |engine| {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        let balanced = x == o || x == o + 1;
        assert!(balanced, "x={x} o={o} history={:?}", engine.history());
    });
}

#[test]
fn test_status_matches_board() {
    walk(&GameEngine::new(), &mut |engine| {
        let board = engine.board();
        match engine.status() {
            GameStatus::Won(player) => assert_eq!(check_winner(board), Some(player)),
            GameStatus::Draw => {
                assert!(is_full(board));
                assert_eq!(check_winner(board), None);
            }
            GameStatus::InProgress => {
                assert_eq!(check_winner(board), None);
                assert!(!is_full(board));
            }
        }
    });
}

#[test]
fn test_each_win_counted_once() {
    let mut finished = 0usize;
    walk(&GameEngine::new(), &mut |engine| {
        let expected = match engine.status() {
            GameStatus::Won(Player::X) => (1, 0),
            GameStatus::Won(Player::O) => (0, 1),
            _ => (0, 0),
        };
        let score = engine.score();
        assert_eq!((score.wins(Player::X), score.wins(Player::O)), expected);
        if engine.status().is_over() {
            finished += 1;
        }
    });
    // Number of distinct complete tic-tac-toe games.
    assert_eq!(finished, 255_168);
}

#[test]
fn test_turn_alternates_until_terminal() {
    walk(&GameEngine::new(), &mut |engine| {
        if !engine.status().is_over() {
            let expected = match engine.history().len() % 2 {
                0 => Player::X,
                _ => Player::O,
            };
            assert_eq!(engine.turn(), expected);
        }
    });
}

#[test]
fn test_ignored_moves_leave_state_unchanged() {
    walk(&GameEngine::new(), &mut |engine| {
        for index in 0..12 {
            let playable = !engine.status().is_over() && engine.board().is_empty(index);
            if playable {
                continue;
            }
            let mut copy = engine.clone();
            assert!(!copy.play_move(index).is_placed());
            assert_eq!(&copy, engine);
        }
    });
}

#[test]
fn test_reset_from_any_state() {
    walk(&GameEngine::new(), &mut |engine| {
        let mut copy = engine.clone();
        let score = *copy.score();
        copy.reset();
        assert_eq!(*copy.board(), Board::new());
        assert_eq!(copy.turn(), Player::X);
        assert_eq!(copy.status(), GameStatus::InProgress);
        assert_eq!(*copy.score(), score);
    });
}

#[test]
fn test_presenter_renders_only_on_change() {
    let mut presenter = Presenter::default();
    let moves = [4, 4, 0, 0, 8, 2, 6, 3, 5, 1, 7];
    let mut frames = 0;
    for index in moves {
        let before = presenter.engine().clone();
        match presenter.handle(AdapterEvent::CellClicked(index)) {
            Some(frame) => {
                frames += 1;
                assert_ne!(presenter.engine(), &before);
                assert_eq!(frame.board(), presenter.engine().board());
            }
            None => assert_eq!(presenter.engine(), &before),
        }
    }
    assert_eq!(frames, presenter.engine().history().len());
}
