//! Tests for the scripted replay front end.

use tictactoe::{FrameFormat, GameStatus, Player, RenderInstruction, parse_script, run_replay};

fn replay_text(script: &str) -> (usize, String) {
    let events = parse_script(script).expect("valid script");
    let mut out = Vec::new();
    let format = FrameFormat::Text;
    let frames = run_replay(&events, format, &mut out).expect("replay");
    (frames, String::from_utf8(out).expect("utf8"))
}

fn replay_json(script: &str) -> Vec<RenderInstruction> {
    let events = parse_script(script).expect("valid script");
    let mut out = Vec::new();
    let format = FrameFormat::Json;
    run_replay(&events, format, &mut out).expect("replay");
    String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("frame json"))
        .collect()
}

#[test]
fn test_initial_frame_only() {
    let (frames, text) = replay_text("");
    assert_eq!(frames, 1);
    let expected = "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\nIt's X's turn\nScore X: 0 | O: 0\n";
    assert_eq!(text, expected);
}

#[test]
fn test_win_announced() {
    let (frames, text) = replay_text("0 3 1 4 2");
    assert_eq!(frames, 6);
    let last = "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\nPlayer X has won!\nScore X: 1 | O: 0\n";
    assert!(text.ends_with(last), "{text}");
}

#[test]
fn test_ignored_clicks_print_nothing() {
    let frames = replay_json("0,0,9,3,1,4,2,8");
    // initial + five placed moves; the repeat, the out-of-range and the post-win click are dropped
    assert_eq!(frames.len(), 6);
    assert_eq!(*frames.last().unwrap().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_restart_keeps_score_and_always_renders() {
    let frames = replay_json("0,3,1,4,2,r,r");
    assert_eq!(frames.len(), 8);
    let last = frames.last().unwrap();
    assert_eq!(*last.status(), GameStatus::InProgress);
    assert_eq!(*last.turn(), Player::X);
    assert_eq!(last.score().wins(Player::X), 1);
    assert_eq!(frames[6], frames[7]);
}

#[test]
fn test_draw_announced() {
    let frames = replay_json("0,1,2,4,3,5,7,6,8");
    let last = frames.last().unwrap();
    assert_eq!(*last.status(), GameStatus::Draw);
    assert_eq!(last.message(), "Game ended in a draw!");
    let score = last.score();
    assert_eq!(score.wins(Player::X) + score.wins(Player::O), 0);
}

#[test]
fn test_negative_and_huge_numbers_are_ignored_clicks() {
    let (frames, text) = replay_text("0,-1,99999999999999999999,3");
    // initial + the two on-board moves
    assert_eq!(frames, 3);
    assert!(text.contains("X|2|3\n-+-+-\nO|5|6"), "{text}");
    let prompt = "It's X's turn\nScore X: 0 | O: 0\n";
    assert!(text.ends_with(prompt), "{text}");
}

#[test]
fn test_bad_token_is_an_error() {
    assert!(parse_script("0,1,two").is_err());
}
