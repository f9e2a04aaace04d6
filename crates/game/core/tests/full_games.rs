//! Whole-game scenarios driven through the entry engine.

use bowling_core::{
    FrameCorrection, GameConfig, GameEngine, GameStatus, ThrowLog, ThrowOutcome, frame_scores,
    is_valid_frame, running_totals,
};

/// Plays `tokens` and returns the engine together with the final outcome.
fn play(tokens: &[&str]) -> (GameEngine, ThrowOutcome) {
    let mut engine = GameEngine::start();
    let mut last = None;
    for token in tokens {
        last = Some(
            engine
                .submit_throw(token)
                .unwrap_or_else(|e| panic!("token {token:?} rejected: {e}")),
        );
    }
    (engine, last.expect("at least one token"))
}

fn complete_log(tokens: &[&str]) -> ThrowLog {
    match play(tokens) {
        (_, ThrowOutcome::GameComplete(log)) => log,
        (_, other) => panic!("game did not complete: {other:?}"),
    }
}

#[test]
fn perfect_game_scores_300() {
    let log = complete_log(&["x"; 12]);

    let mut expected = [None; GameConfig::LOG_SLOTS];
    for frame in 0..9 {
        expected[frame * 2] = Some(10);
    }
    expected[18] = Some(10);
    expected[19] = Some(10);
    expected[20] = Some(10);
    assert_eq!(log, ThrowLog::from_slots(expected));

    let scores = frame_scores(&log);
    assert_eq!(scores, [Some(30); 10]);
    assert_eq!(running_totals(&scores)[9], Some(300));
}

#[test]
fn gutter_game_scores_zero() {
    let log = complete_log(&["-"; 20]);
    assert_eq!(log.get(20), None);
    assert_eq!(running_totals(&frame_scores(&log)), [Some(0); 10]);
}

#[test]
fn all_spares_with_five_bonus() {
    let mut tokens = Vec::new();
    for _ in 0..10 {
        tokens.extend(["5", "/"]);
    }
    tokens.push("5");
    let log = complete_log(&tokens);

    let scores = frame_scores(&log);
    assert_eq!(scores, [Some(15); 10]);
    assert_eq!(running_totals(&scores)[9], Some(150));
}

#[test]
fn open_last_frame_ends_without_third_prompt() {
    let mut tokens = vec!["x"; 9];
    tokens.extend(["3", "4"]);
    let (engine, outcome) = play(&tokens);

    assert!(matches!(outcome, ThrowOutcome::GameComplete(_)));
    assert_eq!(engine.status(), GameStatus::Completed);
    assert_eq!(engine.state().throw, 2);
    assert!(engine.log().get(20).is_none());
}

#[test]
fn last_frame_double_faces_fresh_rack_on_third_throw() {
    let mut engine = GameEngine::start();
    for _ in 0..9 {
        engine.submit_throw("-").unwrap();
        engine.submit_throw("-").unwrap();
    }
    engine.submit_throw("x").unwrap();
    let outcome = engine.submit_throw("x").unwrap();

    let ThrowOutcome::Accepted(state) = outcome else {
        panic!("expected third throw to be owed, got {outcome:?}");
    };
    assert_eq!((state.frame, state.throw, state.pins_remaining), (10, 3, 10));
    assert!(matches!(
        engine.submit_throw("x").unwrap(),
        ThrowOutcome::GameComplete(_)
    ));
}

#[test]
fn strike_then_count_limits_third_throw() {
    let mut tokens = vec!["-"; 18];
    tokens.extend(["x", "6"]);
    let (mut engine, outcome) = play(&tokens);
    assert!(matches!(outcome, ThrowOutcome::Accepted(_)));

    assert!(matches!(
        engine.submit_throw("5").unwrap(),
        ThrowOutcome::Invalid(_)
    ));
    assert!(matches!(
        engine.submit_throw("/").unwrap(),
        ThrowOutcome::GameComplete(_)
    ));
    assert_eq!(engine.scorecard().frame_scores[9], Some(20));
}

#[test]
fn legal_games_are_fully_scored() {
    let games: &[&[&str]] = &[
        &[
            "9", "-", "x", "7", "/", "x", "x", "8", "1", "-", "/", "3", "3", "x", "x", "9", "/",
        ],
        &[
            "1", "4", "4", "5", "6", "/", "5", "/", "x", "-", "1", "7", "/", "6", "/", "x", "2",
            "/", "6",
        ],
        &[
            "x", "x", "x", "x", "x", "x", "x", "x", "x", "x", "x", "9",
        ],
    ];

    for tokens in games {
        let log = complete_log(tokens);
        let scores = frame_scores(&log);
        assert!(scores.iter().all(Option::is_some), "{tokens:?}");

        let totals = running_totals(&scores);
        let sum: u16 = scores.iter().flatten().sum();
        assert_eq!(totals[9], Some(sum));
        assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    // Known total for the classic example card.
    let log = complete_log(games[1]);
    assert_eq!(running_totals(&frame_scores(&log))[9], Some(133));
    let log = complete_log(games[2]);
    assert_eq!(running_totals(&frame_scores(&log))[9], Some(299));
}

#[test]
fn corrections_during_play_rescore_the_card() {
    let mut engine = GameEngine::start();
    for token in ["3", "4", "2", "2"] {
        engine.submit_throw(token).unwrap();
    }
    assert_eq!(engine.scorecard().running_totals[1], Some(11));

    engine
        .correct_frame(&FrameCorrection::new(1, vec![Some(3), Some(7)]))
        .unwrap();
    assert_eq!(engine.scorecard().running_totals[..2], [Some(12), Some(16)]);
}

#[test]
fn last_frame_validation_is_stricter_than_mark_check() {
    // Open frame with a live third throw: rejected.
    assert!(!is_valid_frame(10, &[Some(3), Some(4), Some(2)]));
    // A single strike leaves pins standing for the third throw.
    assert!(!is_valid_frame(10, &[Some(10), Some(5), Some(7)]));
    assert!(is_valid_frame(10, &[Some(10), Some(5), Some(5)]));
    // Spare followed by a strike on a fresh rack.
    assert!(is_valid_frame(10, &[Some(5), Some(5), Some(10)]));
}
