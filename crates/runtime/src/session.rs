//! Session driver for entering one game.
//!
//! [`GameSession`] connects the entry engine to a repository, an input
//! provider, and an observer. It owns no display logic: prompts go out through
//! the [`InputProvider`], results through the [`SessionObserver`].

use std::sync::Arc;

use bowling_core::{
    CorrectionError, EntryCommand, GameEngine, ThrowOutcome, parse_correction,
};
use chrono::NaiveDate;

use crate::api::{InputProvider, Prompt, Result};
use crate::events::{SessionEvent, SessionObserver};
use crate::repository::{GameKey, GameRecord, GameRepository};

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// All ten frames were entered; the record is stored with its totals.
    Completed(GameRecord),
    /// The user quit; the partial record was deleted.
    Aborted(GameKey),
}

impl SessionOutcome {
    pub fn key(&self) -> GameKey {
        match self {
            Self::Completed(record) => record.key,
            Self::Aborted(key) => *key,
        }
    }
}

/// Drives interactive entry of games against a repository.
#[derive(Clone)]
pub struct GameSession {
    repository: Arc<dyn GameRepository>,
}

impl GameSession {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn GameRepository> {
        &self.repository
    }

    /// Enters a new game bowled on `date`.
    ///
    /// Progress is saved after every completed frame and every accepted
    /// correction, so an interrupted process loses at most the current frame.
    /// If entry fails with an error, the partial record is deleted before the
    /// error is returned.
    pub fn play(
        &self,
        date: NaiveDate,
        input: &mut dyn InputProvider,
        observer: &mut dyn SessionObserver,
    ) -> Result<SessionOutcome> {
        let mut record = self.repository.create_game(date)?;
        let key = record.key;
        tracing::info!("Started {}", key);
        observer.on_event(&SessionEvent::GameStarted { key });

        self.enter(&mut record, input, observer).inspect_err(|error| {
            tracing::warn!("Entry of {} failed: {}", key, error);
            if let Err(delete_error) = self.repository.delete(key) {
                tracing::warn!("Failed to discard {}: {}", key, delete_error);
            }
        })
    }

    fn enter(
        &self,
        record: &mut GameRecord,
        input: &mut dyn InputProvider,
        observer: &mut dyn SessionObserver,
    ) -> Result<SessionOutcome> {
        let key = record.key;
        let mut engine = GameEngine::start();

        loop {
            let prompt = Prompt::Throw(engine.state());
            let line = match input.next_input(&prompt)? {
                Some(line) => line,
                None => {
                    tracing::debug!("Input ended during {}; aborting", key);
                    "q".to_string()
                }
            };

            match engine.submit_throw(&line)? {
                ThrowOutcome::Accepted(state) => {
                    observer.on_event(&SessionEvent::ThrowAccepted {
                        state,
                        scorecard: engine.scorecard(),
                    });
                }
                ThrowOutcome::Invalid(error) => {
                    tracing::warn!("Rejected throw '{}': {}", line.trim(), error);
                    observer.on_event(&SessionEvent::ThrowRejected {
                        input: line,
                        error,
                    });
                }
                ThrowOutcome::FrameComplete { frame, .. } => {
                    record.update(*engine.log());
                    self.repository.save(record)?;
                    observer.on_event(&SessionEvent::FrameCompleted {
                        frame,
                        throws: record.throws,
                        scorecard: engine.scorecard(),
                    });
                }
                ThrowOutcome::GameComplete(log) => {
                    record.update(log);
                    self.repository.save(record)?;
                    tracing::info!(
                        "Completed {} with {}",
                        key,
                        record.final_score().unwrap_or_default()
                    );
                    observer.on_event(&SessionEvent::GameCompleted {
                        record: record.clone(),
                    });
                    return Ok(SessionOutcome::Completed(record.clone()));
                }
                ThrowOutcome::Aborted => {
                    self.repository.delete(key)?;
                    tracing::info!("Aborted {}", key);
                    observer.on_event(&SessionEvent::GameAborted { key });
                    return Ok(SessionOutcome::Aborted(key));
                }
                ThrowOutcome::ModifyRequested => {
                    self.modify(&mut engine, record, input, observer)?;
                }
            }
        }
    }

    /// Reads correction lines until one is applied or the user backs out.
    fn modify(
        &self,
        engine: &mut GameEngine,
        record: &mut GameRecord,
        input: &mut dyn InputProvider,
        observer: &mut dyn SessionObserver,
    ) -> Result<()> {
        loop {
            let Some(line) = input.next_input(&Prompt::Correction)? else {
                return Ok(());
            };
            if EntryCommand::parse(&line) == EntryCommand::Quit {
                return Ok(());
            }

            let applied = parse_correction(&line)
                .map_err(CorrectionError::from)
                .and_then(|correction| {
                    engine.correct_frame(&correction)?;
                    Ok(correction.frame)
                });

            match applied {
                Ok(frame) => {
                    record.update(*engine.log());
                    self.repository.save(record)?;
                    tracing::info!("Corrected frame {} of {}", frame, record.key);
                    observer.on_event(&SessionEvent::CorrectionApplied {
                        frame,
                        throws: record.throws,
                        scorecard: engine.scorecard(),
                    });
                    return Ok(());
                }
                Err(error) => {
                    tracing::warn!("Rejected correction '{}': {}", line.trim(), error);
                    observer.on_event(&SessionEvent::CorrectionRejected { input: line, error });
                }
            }
        }
    }
}
