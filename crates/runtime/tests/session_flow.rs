//! End-to-end entry sessions driven by scripted input.

use std::sync::Arc;

use bowling_core::{CorrectionError, FrameError, ThrowParseError};
use chrono::NaiveDate;
use runtime::{
    GameKey, GameRepository, GameSession, InMemoryGameRepository, InputFn, NullObserver, Prompt,
    RecordingObserver, RuntimeError, ScriptedInput, SessionEvent, SessionOutcome, Topic,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 25).unwrap()
}

fn session() -> (GameSession, Arc<InMemoryGameRepository>) {
    let repository = Arc::new(InMemoryGameRepository::new());
    (GameSession::new(repository.clone()), repository)
}

#[test]
fn perfect_game_is_stored_with_totals() {
    let (session, repository) = session();
    let mut input = ScriptedInput::new(["x"; 12]);

    let outcome = session
        .play(date(), &mut input, &mut NullObserver)
        .unwrap();

    let record = match outcome {
        SessionOutcome::Completed(record) => record,
        other => panic!("expected a completed game, got {other:?}"),
    };
    assert_eq!(record.key, GameKey::new(date(), 1));
    assert_eq!(record.final_score(), Some(300));
    assert_eq!(input.remaining(), 0);

    let stored = repository.load(record.key).unwrap().unwrap();
    assert_eq!(stored, record);
    assert_eq!(repository.games_played(date()).unwrap(), 1);
}

#[test]
fn quitting_deletes_the_partial_game() {
    let (session, repository) = session();
    let mut observer = RecordingObserver::new();
    let mut input = ScriptedInput::new(["3", "4", "q"]);

    let outcome = session.play(date(), &mut input, &mut observer).unwrap();

    assert_eq!(outcome, SessionOutcome::Aborted(GameKey::new(date(), 1)));
    assert!(repository.list(date()).unwrap().is_empty());

    let events = observer.events();
    assert!(matches!(events[0], SessionEvent::GameStarted { .. }));
    assert!(matches!(events[1], SessionEvent::ThrowAccepted { .. }));
    assert!(matches!(events[2], SessionEvent::FrameCompleted { frame: 1, .. }));
    assert!(matches!(events[3], SessionEvent::GameAborted { .. }));
    assert_eq!(events.len(), 4);
}

#[test]
fn end_of_input_counts_as_quit() {
    let (session, repository) = session();
    let mut input = ScriptedInput::new(["5"]);

    let outcome = session
        .play(date(), &mut input, &mut NullObserver)
        .unwrap();

    assert!(matches!(outcome, SessionOutcome::Aborted(_)));
    assert_eq!(repository.games_played(date()).unwrap(), 0);
}

#[test]
fn completed_frames_are_saved_before_the_game_ends() {
    let repository = Arc::new(InMemoryGameRepository::new());
    let session = GameSession::new(repository.clone());
    let key = GameKey::new(date(), 1);

    let mut lines = vec!["7", "2", "x"].into_iter();
    let mut checked = false;
    let mut input = InputFn(|prompt: &Prompt| -> runtime::Result<Option<String>> {
        if let Prompt::Throw(state) = prompt
            && state.frame == 3
        {
            let stored = repository.load(key)?.unwrap();
            assert_eq!(stored.throws.frame_throws(1).as_slice(), &[7, 2]);
            assert_eq!(stored.throws.frame_throws(2).as_slice(), &[10]);
            assert_eq!(stored.totals[0], Some(9));
            assert_eq!(stored.totals[1], None);
            checked = true;
        }
        Ok(lines.next().map(str::to_string))
    });

    session.play(date(), &mut input, &mut NullObserver).unwrap();
    drop(input);
    assert!(checked);
}

#[test]
fn input_failure_discards_the_partial_game() {
    let (session, repository) = session();
    let mut lines = vec!["3", "4", "5"].into_iter();
    let mut input = InputFn(|_: &Prompt| -> runtime::Result<Option<String>> {
        match lines.next() {
            Some(line) => Ok(Some(line.to_string())),
            None => Err(RuntimeError::Input(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "terminal closed",
            ))),
        }
    });

    let result = session.play(date(), &mut input, &mut NullObserver);

    assert!(matches!(result, Err(RuntimeError::Input(_))));
    assert!(repository.list(date()).unwrap().is_empty());
    assert_eq!(repository.games_played(date()).unwrap(), 0);
}

#[test]
fn rejected_throws_are_reported_and_retried() {
    let (session, _repository) = session();
    let mut observer = RecordingObserver::new();
    let mut input = ScriptedInput::new(["/", "abc", "6", "x", "q"]);

    session.play(date(), &mut input, &mut observer).unwrap();

    let rejected: Vec<_> = observer.on_topic(Topic::Entry).collect();
    assert_eq!(
        rejected[0],
        &SessionEvent::ThrowRejected {
            input: "/".to_string(),
            error: ThrowParseError::SpareOnFreshRack,
        }
    );
    assert!(matches!(
        rejected[1],
        SessionEvent::ThrowRejected {
            error: ThrowParseError::NotANumber { .. },
            ..
        }
    ));
    assert!(matches!(rejected[2], SessionEvent::ThrowAccepted { .. }));
    assert_eq!(
        rejected[3],
        &SessionEvent::ThrowRejected {
            input: "x".to_string(),
            error: ThrowParseError::StrikeUnavailable { pins_remaining: 4 },
        }
    );
}

#[test]
fn modify_flow_rereads_until_a_correction_applies() {
    let (session, repository) = session();
    let mut observer = RecordingObserver::new();

    let mut lines = vec!["3", "4", "m", "0 1 2", "2 5 4", "1 5 5", "x"];
    lines.extend(["3", "4"].repeat(7));
    lines.extend(["3", "4"]);
    let mut input = ScriptedInput::new(lines);

    let outcome = session.play(date(), &mut input, &mut observer).unwrap();

    let record = match outcome {
        SessionOutcome::Completed(record) => record,
        other => panic!("expected a completed game, got {other:?}"),
    };
    assert_eq!(record.throws.frame_throws(1).as_slice(), &[5, 5]);
    assert_eq!(record.scorecard().frame_scores[0], Some(20));
    assert_eq!(record.scorecard().frame_scores[1], Some(17));
    assert_eq!(record.final_score(), Some(93));
    assert_eq!(repository.load(record.key).unwrap(), Some(record));

    let corrections: Vec<_> = observer.on_topic(Topic::Correction).collect();
    assert_eq!(corrections.len(), 3);
    assert!(matches!(
        corrections[0],
        SessionEvent::CorrectionRejected {
            error: CorrectionError::Frame(FrameError::InvalidFrameNumber { frame: 0 }),
            ..
        }
    ));
    assert!(matches!(
        corrections[1],
        SessionEvent::CorrectionRejected {
            error: CorrectionError::FrameNotCompleted { frame: 2, current: 2 },
            ..
        }
    ));
    assert!(matches!(
        corrections[2],
        SessionEvent::CorrectionApplied { frame: 1, .. }
    ));
}

#[test]
fn backing_out_of_modify_resumes_entry() {
    let (session, _repository) = session();
    let mut observer = RecordingObserver::new();
    let mut input = ScriptedInput::new(["4", "m", "q", "5", "q"]);

    let outcome = session.play(date(), &mut input, &mut observer).unwrap();

    assert!(matches!(outcome, SessionOutcome::Aborted(_)));
    assert_eq!(observer.on_topic(Topic::Correction).count(), 0);
    assert!(
        observer
            .events()
            .iter()
            .any(|event| matches!(event, SessionEvent::FrameCompleted { frame: 1, .. }))
    );
}

#[test]
fn game_numbers_continue_per_date() {
    let (session, repository) = session();
    let other = NaiveDate::from_ymd_opt(2023, 1, 26).unwrap();

    for day in [date(), date(), other] {
        let mut input = ScriptedInput::new(["x"; 12]);
        session.play(day, &mut input, &mut NullObserver).unwrap();
    }

    let keys: Vec<_> = repository
        .list(date())
        .unwrap()
        .into_iter()
        .map(|record| record.key.game)
        .collect();
    assert_eq!(keys, vec![1, 2]);
    assert_eq!(repository.games_played(other).unwrap(), 1);
}
